//! Character-grid backend for terminals and logs

use std::fmt;

use glam::Vec2;

use super::palette::Color;
use super::{Renderer, TextAlign};

const BLANK: char = ' ';
const OUTLINE_GLYPH: char = '+';
const DISC_GLYPH: char = '*';
const RING_GLYPH: char = 'o';

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    glyph: char,
    color: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            glyph: BLANK,
            color: Color::BLACK,
        }
    }
}

/// Rasterizes draw calls into a fixed grid of characters
///
/// The world is scaled to fit the grid on every `clear`, so the canvas
/// follows viewport changes without being rebuilt.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    cols: usize,
    rows: usize,
    /// World pixels per cell
    scale: Vec2,
    cells: Vec<Cell>,
    ansi: bool,
}

impl TextCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: Vec2::ONE,
            cells: vec![Cell::default(); cols * rows],
            ansi: false,
        }
    }

    /// Emit 24-bit ANSI color escapes when displayed
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// One grid row as plain text
    pub fn row(&self, row: usize) -> String {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|c| c.glyph)
            .collect()
    }

    fn cell_of(&self, p: Vec2) -> Option<(usize, usize)> {
        let c = (p / self.scale).floor();
        if !c.is_finite() || c.x < 0.0 || c.y < 0.0 {
            return None;
        }
        let (col, row) = (c.x as usize, c.y as usize);
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    fn put(&mut self, col: usize, row: usize, glyph: char, color: Color) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = Cell { glyph, color };
        }
    }

    fn plot(&mut self, p: Vec2, glyph: char, color: Color) {
        if let Some((col, row)) = self.cell_of(p) {
            self.put(col, row, glyph, color);
        }
    }

    fn line(&mut self, a: Vec2, b: Vec2, glyph: char, color: Color) {
        let span = ((b - a) / self.scale).abs().max_element();
        let steps = (span.ceil() as usize).max(1) * 2;
        for i in 0..=steps {
            self.plot(a.lerp(b, i as f32 / steps as f32), glyph, color);
        }
    }
}

impl Renderer for TextCanvas {
    fn clear(&mut self, width: f32, height: f32, color: Color) {
        self.scale = Vec2::new(width / self.cols as f32, height / self.rows as f32)
            .max(Vec2::splat(f32::EPSILON));
        self.cells.fill(Cell {
            glyph: BLANK,
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Color) {
        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.line(start, end, OUTLINE_GLYPH, color);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let min = center - Vec2::splat(radius);
        let max = center + Vec2::splat(radius);
        let mut y = min.y;
        while y <= max.y {
            let mut x = min.x;
            while x <= max.x {
                let p = Vec2::new(x, y);
                if p.distance(center) <= radius {
                    self.plot(p, DISC_GLYPH, color);
                }
                x += self.scale.x;
            }
            y += self.scale.y;
        }
        self.plot(center, DISC_GLYPH, color);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let cell = self.scale.min_element();
        let segments = ((std::f32::consts::TAU * radius / cell).ceil() as usize).clamp(8, 720);
        for i in 0..segments {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            self.plot(center + Vec2::from_angle(angle) * radius, RING_GLYPH, color);
        }
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, _size: f32, align: TextAlign, color: Color) {
        let Some((col, row)) = self.cell_of(anchor) else {
            return;
        };
        let len = text.chars().count();
        let start = match align {
            TextAlign::Left => col,
            TextAlign::Center => col.saturating_sub(len / 2),
            TextAlign::Right => col.saturating_sub(len),
        };
        for (i, glyph) in text.chars().enumerate() {
            self.put(start + i, row, glyph, color);
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for cell in &self.cells[row * self.cols..(row + 1) * self.cols] {
                if self.ansi && cell.glyph != BLANK {
                    let (r, g, b) = cell.color.rgb();
                    write!(f, "\x1b[38;2;{r};{g};{b}m{}\x1b[0m", cell.glyph)?;
                } else {
                    write!(f, "{}", cell.glyph)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
