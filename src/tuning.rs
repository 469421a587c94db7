//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults reproduce the classic feel; a JSON file can override any subset.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Which circle-vs-hull test the game uses for player collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HullTest {
    /// Projection with bounding-box endpoint snapping (classic behaviour)
    #[default]
    Legacy,
    /// Projection clamped to the segment
    Exact,
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Velocity magnitude while thrusting (pixels/frame)
    pub player_speed: f32,
    /// Rotation per frame while a turn key is held (radians)
    pub turn_rate: f32,
    /// Velocity multiplier per frame while coasting
    pub friction: f32,
    /// Clamp inset when the ship leaves the viewport
    pub boundary_margin: f32,
    /// Hull nose distance ahead of the ship center
    pub hull_nose: f32,
    /// Hull tail distance behind the ship center
    pub hull_tail: f32,
    /// Half width of the hull at the tail
    pub hull_half_width: f32,
    /// Collision test used against the hull
    pub hull_test: HullTest,

    // === Missiles ===
    pub missile_speed: f32,
    pub missile_radius: f32,

    // === Asteroids ===
    /// Base asteroid speed (pixels/frame)
    pub asteroid_speed: f32,
    /// Random radius span added on top of `asteroid_min_radius`
    pub asteroid_max_size: f32,
    pub asteroid_min_radius: f32,
    /// Parents strictly above this radius split when destroyed
    pub split_threshold: f32,
    pub split_divisor: f32,
    pub fragment_min_radius: f32,
    pub fragment_value_bonus: u32,
    pub fragment_speed_penalty: f32,
    /// Move every asteroid a second time after the collision passes, as the
    /// classic loop does
    pub trailing_drift: bool,

    // === Difficulty ===
    /// Initial delay between asteroid spawns (ms)
    pub spawn_interval_ms: f32,
    /// Spawn delay never drops below this (ms)
    pub spawn_interval_floor_ms: f32,
    /// Spawn delay reduction per difficulty tick (ms)
    pub spawn_interval_step_ms: f32,
    /// Period of the difficulty/theme ticker (ms)
    pub difficulty_period_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: 5.0,
            turn_rate: 0.15,
            friction: 0.95,
            boundary_margin: 30.0,
            hull_nose: 30.0,
            hull_tail: 10.0,
            hull_half_width: 10.0,
            hull_test: HullTest::Legacy,

            missile_speed: 10.0,
            missile_radius: 5.0,

            asteroid_speed: 1.0,
            asteroid_max_size: 80.0,
            asteroid_min_radius: 10.0,
            split_threshold: 30.0,
            split_divisor: 1.9,
            fragment_min_radius: 20.0,
            fragment_value_bonus: 50,
            fragment_speed_penalty: 2.0,
            trailing_drift: true,

            spawn_interval_ms: 2000.0,
            spawn_interval_floor_ms: 100.0,
            spawn_interval_step_ms: 1.0,
            difficulty_period_ms: 100.0,
        }
    }
}

/// Failure to load a tuning file
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read tuning file: {e}"),
            Self::Parse(e) => write!(f, "malformed tuning file: {e}"),
            Self::Invalid(reason) => write!(f, "invalid tuning: {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl Tuning {
    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a tuning file from disk
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::debug!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let finite = [
            self.player_speed,
            self.turn_rate,
            self.friction,
            self.boundary_margin,
            self.hull_nose,
            self.hull_tail,
            self.hull_half_width,
            self.missile_speed,
            self.missile_radius,
            self.asteroid_speed,
            self.asteroid_max_size,
            self.asteroid_min_radius,
            self.split_threshold,
            self.split_divisor,
            self.fragment_min_radius,
            self.fragment_speed_penalty,
            self.spawn_interval_ms,
            self.spawn_interval_floor_ms,
            self.spawn_interval_step_ms,
            self.difficulty_period_ms,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(TuningError::Invalid("values must be finite"));
        }
        if !(0.0..1.0).contains(&self.friction) {
            return Err(TuningError::Invalid("friction must be in [0, 1)"));
        }
        if self.missile_speed <= 0.0 {
            return Err(TuningError::Invalid("missile_speed must be positive"));
        }
        if self.split_divisor <= 1.0 {
            return Err(TuningError::Invalid("split_divisor must exceed 1"));
        }
        if self.asteroid_min_radius <= 0.0
            || self.missile_radius <= 0.0
            || self.fragment_min_radius <= 0.0
        {
            return Err(TuningError::Invalid("radii must be positive"));
        }
        if self.asteroid_max_size < 0.0 {
            return Err(TuningError::Invalid("asteroid_max_size may not be negative"));
        }
        if self.hull_nose <= 0.0 || self.hull_tail <= 0.0 || self.hull_half_width <= 0.0 {
            return Err(TuningError::Invalid("hull dimensions must be positive"));
        }
        if self.spawn_interval_floor_ms <= 0.0
            || self.spawn_interval_ms < self.spawn_interval_floor_ms
        {
            return Err(TuningError::Invalid(
                "spawn interval must start at or above a positive floor",
            ));
        }
        if self.spawn_interval_step_ms < 0.0 {
            return Err(TuningError::Invalid("spawn interval may not grow"));
        }
        if self.difficulty_period_ms <= 0.0 {
            return Err(TuningError::Invalid("difficulty_period_ms must be positive"));
        }
        Ok(())
    }
}
