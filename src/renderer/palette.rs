//! Theme colors
//!
//! Each role has one color per theme slot; the difficulty ticker rotates the
//! slot every tick.

use crate::consts::THEME_SLOTS;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xFFFFFF);

    pub const fn rgb(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        )
    }
}

/// What is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Player,
    Missile,
    Asteroid,
    Score,
}

/// Per-role color cycles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub player: [Color; THEME_SLOTS],
    pub missile: [Color; THEME_SLOTS],
    pub asteroid: [Color; THEME_SLOTS],
    pub score: [Color; THEME_SLOTS],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            player: [Color::WHITE, Color(0x0000FF), Color(0x0000FF)],
            missile: [Color::WHITE, Color(0x44D62C), Color(0x44D62C)],
            asteroid: [Color::WHITE, Color(0xE10600), Color(0xE10600)],
            score: [Color::WHITE, Color(0xFFEA19), Color(0xFFEA19)],
        }
    }
}

impl Palette {
    /// Color for `role` in theme slot `index` (wraps)
    pub fn color(&self, role: Role, index: usize) -> Color {
        let cycle = match role {
            Role::Player => &self.player,
            Role::Missile => &self.missile,
            Role::Asteroid => &self.asteroid,
            Role::Score => &self.score,
        };
        cycle[index % THEME_SLOTS]
    }
}
