//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per display frame
//! - Seeded RNG only
//! - Stable iteration order (descending index within a pass)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pilot;
pub mod resolve;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{
    Circle, Hull, circle_overlaps_triangle, circle_overlaps_triangle_exact, circles_overlap,
};
pub use pilot::steer;
pub use resolve::{PassOutcome, resolve_pass};
pub use spawn::{Edge, generate_asteroid, shatter, size_band, split_asteroid};
pub use state::{Asteroid, Body, GamePhase, GameState, Missile, Player, Score, Viewport};
pub use tick::{TickInput, ramp_difficulty, spawn_asteroid, tick};
