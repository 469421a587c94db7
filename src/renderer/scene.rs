//! Frame composition: what gets drawn, where, and in which color

use glam::Vec2;

use super::palette::{Color, Palette, Role};
use super::{Renderer, TextAlign};
use crate::sim::GameState;
use crate::tuning::Tuning;

/// Score text inset from the top-right corner
const SCORE_INSET: Vec2 = Vec2::new(50.0, 50.0);
const SCORE_SIZE: f32 = 24.0;
const TITLE_SIZE: f32 = 48.0;
const PROMPT_SIZE: f32 = 24.0;
const PROMPT_OFFSET: f32 = 50.0;

/// Draw the whole frame: background, score, ship, missiles, asteroids and,
/// once the run has ended, the game-over overlay
pub fn draw_frame<R: Renderer + ?Sized>(
    state: &GameState,
    tuning: &Tuning,
    palette: &Palette,
    renderer: &mut R,
) {
    let viewport = state.viewport;
    let slot = state.color_index;

    renderer.clear(viewport.width, viewport.height, Color::BLACK);

    renderer.draw_text(
        &state.score.value.to_string(),
        Vec2::new(viewport.width - SCORE_INSET.x, SCORE_INSET.y),
        SCORE_SIZE,
        TextAlign::Right,
        palette.color(Role::Score, slot),
    );

    let hull = state.player.hull(tuning);
    renderer.stroke_polygon(&hull.vertices, palette.color(Role::Player, slot));

    let missile_color = palette.color(Role::Missile, slot);
    for missile in &state.missiles {
        renderer.fill_circle(missile.position, missile.radius, missile_color);
    }

    let asteroid_color = palette.color(Role::Asteroid, slot);
    for asteroid in &state.asteroids {
        renderer.stroke_circle(asteroid.position, asteroid.radius, asteroid_color);
    }

    if state.is_over() {
        let center = viewport.center();
        renderer.draw_text("Game Over", center, TITLE_SIZE, TextAlign::Center, Color::WHITE);
        renderer.draw_text(
            "Press ENTER to restart",
            center + Vec2::new(0.0, PROMPT_OFFSET),
            PROMPT_SIZE,
            TextAlign::Center,
            Color::WHITE,
        );
    }
}
