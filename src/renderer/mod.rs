//! Rendering module
//!
//! The simulation never draws. After each frame a [`Renderer`] backend is
//! handed the game state through [`draw_frame`].

pub mod palette;
pub mod scene;
pub mod text_canvas;

pub use palette::{Color, Palette, Role};
pub use scene::draw_frame;
pub use text_canvas::TextCanvas;

use glam::Vec2;

/// Horizontal anchoring for text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Drawing primitives a backend must provide
pub trait Renderer {
    /// Fill the whole surface with `color`
    fn clear(&mut self, width: f32, height: f32, color: Color);

    /// Closed outline through `points`
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Text with its baseline anchored at `anchor`; `size` in pixels
    fn draw_text(&mut self, text: &str, anchor: Vec2, size: f32, align: TextAlign, color: Color);
}
