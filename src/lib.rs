//! Asteroid Drift - an edge-spawn asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, per-frame tick)
//! - `schedule`: Simulated clock and timers driving frames and spawns
//! - `session`: Game loop orchestration (frames, difficulty ticker, spawner)
//! - `input`: Key latch turning key events into per-frame input
//! - `renderer`: Drawing interface, theme palette and a text-grid backend
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod renderer;
pub mod schedule;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{HullTest, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulated display frame length (60 Hz), in milliseconds
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Maximum frames per advance to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock gap accepted by a single advance
    pub const MAX_ELAPSED_MS: f32 = 100.0;

    /// Default viewport, used by the headless demo
    pub const DEFAULT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_HEIGHT: f32 = 720.0;

    /// Asteroid size bands: below SMALL is small, strictly between is medium
    pub const SMALL_ASTEROID_LIMIT: f32 = 30.0;
    pub const LARGE_ASTEROID_LIMIT: f32 = 60.0;
    pub const SMALL_ASTEROID_VALUE: u32 = 300;
    pub const MEDIUM_ASTEROID_VALUE: u32 = 200;
    pub const LARGE_ASTEROID_VALUE: u32 = 100;
    /// Extra speed for small and medium asteroids over the base speed
    pub const SMALL_ASTEROID_BOOST: f32 = 1.0;
    pub const MEDIUM_ASTEROID_BOOST: f32 = 0.5;

    /// Number of slots in the theme cycle
    pub const THEME_SLOTS: usize = 3;
}

/// Unit direction vector for a rotation in radians
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    Vec2::from_angle(rotation)
}

/// Rotate a ship-local offset into world orientation
#[inline]
pub fn rotate_local(offset: Vec2, rotation: f32) -> Vec2 {
    Vec2::from_angle(rotation).rotate(offset)
}
