//! Per-frame simulation step
//!
//! Core game loop body that advances the simulation by one display frame,
//! plus the two timer-driven mutations (difficulty ramp and asteroid spawn).

use super::pilot::steer;
use super::resolve::{PassOutcome, resolve_pass};
use super::spawn::generate_asteroid;
use super::state::{Asteroid, Body, GamePhase, GameState, Missile};
use crate::consts::THEME_SLOTS;
use crate::tuning::Tuning;

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held: rotate counter-clockwise
    pub turn_left: bool,
    /// Held: rotate clockwise
    pub turn_right: bool,
    /// Held: full speed along the current facing
    pub thrust: bool,
    /// Edge: missiles to launch, one per press since the last frame
    pub fire: u32,
    /// Edge: start over (honoured only after game over)
    pub restart: bool,
}

/// Advance the game state by one frame
///
/// Does nothing once the run is over.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    for _ in 0..input.fire {
        let missile = Missile::fired_from(&state.player, tuning);
        state.missiles.push(missile);
    }

    steer(&mut state.player, input, state.viewport, tuning);

    let volley = resolve_pass(
        &mut state.missiles,
        &mut state.asteroids,
        None,
        state.viewport,
        tuning,
    );
    apply(state, volley);

    let hull = state.player.hull(tuning);
    let drift = resolve_pass(
        &mut state.asteroids,
        &mut state.missiles,
        Some(&hull),
        state.viewport,
        tuning,
    );
    apply(state, drift);

    if tuning.trailing_drift {
        for asteroid in &mut state.asteroids {
            asteroid.advance();
        }
    }

    state.frame += 1;
}

/// Fold a pass outcome into the game state
fn apply(state: &mut GameState, outcome: PassOutcome) {
    state.score.add(outcome.points);
    state.asteroids.extend(outcome.fragments);
    if outcome.hull_struck && state.phase != GamePhase::GameOver {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at frame {} with score {}",
            state.frame,
            state.score.value
        );
    }
}

/// Difficulty ticker: cycle the theme and shorten the spawn interval
pub fn ramp_difficulty(state: &mut GameState, tuning: &Tuning) {
    state.color_index = (state.color_index + 1) % THEME_SLOTS;
    state.spawn_interval_ms = (state.spawn_interval_ms - tuning.spawn_interval_step_ms)
        .max(tuning.spawn_interval_floor_ms);
    log::trace!("Spawn interval now {} ms", state.spawn_interval_ms);
}

/// Spawn one asteroid at a random edge and return a copy of it
pub fn spawn_asteroid(state: &mut GameState, tuning: &Tuning) -> Asteroid {
    let asteroid = generate_asteroid(&mut state.rng, state.viewport, tuning);
    log::debug!(
        "Spawned asteroid r={:.1} value={} at ({:.0}, {:.0})",
        asteroid.radius,
        asteroid.value,
        asteroid.position.x,
        asteroid.position.y
    );
    state.asteroids.push(asteroid.clone());
    asteroid
}
