//! Game state and core simulation types
//!
//! Everything a frame reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Circle, Hull};
use crate::tuning::Tuning;
use crate::{heading, rotate_local};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; only a restart leaves this phase
    GameOver,
}

/// Visible play area in pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies inside `[0, width] x [0, height]`
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }

    /// Whether a circle lies entirely beyond one of the four edges
    pub fn is_beyond(&self, circle: Circle) -> bool {
        let Circle { center, radius } = circle;
        !center.is_finite()
            || center.x + radius < 0.0
            || center.x - radius > self.width
            || center.y + radius < 0.0
            || center.y - radius > self.height
    }

    /// Clamp both axes into the viewport shrunk by `margin` on every side
    pub fn clamp_inset(&self, p: Vec2, margin: f32) -> Vec2 {
        Vec2::new(
            p.x.min(self.width - margin).max(margin),
            p.y.min(self.height - margin).max(margin),
        )
    }
}

/// Anything the resolve pass can move and collide
pub trait Body {
    fn circle(&self) -> Circle;

    fn velocity(&self) -> Vec2;

    /// Integrate one frame of motion
    fn advance(&mut self);

    /// Score-bearing colliders expose their asteroid data
    fn as_asteroid(&self) -> Option<&Asteroid> {
        None
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Facing (radians, 0 = +x, positive turns toward +y)
    pub rotation: f32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    /// World-space tip of the hull, where missiles leave the ship
    pub fn nose(&self, tuning: &Tuning) -> Vec2 {
        self.position + heading(self.rotation) * tuning.hull_nose
    }

    /// Triangular collision hull for the current pose
    pub fn hull(&self, tuning: &Tuning) -> Hull {
        let local = [
            Vec2::new(tuning.hull_nose, 0.0),
            Vec2::new(-tuning.hull_tail, tuning.hull_half_width),
            Vec2::new(-tuning.hull_tail, -tuning.hull_half_width),
        ];
        Hull {
            vertices: local.map(|v| self.position + rotate_local(v, self.rotation)),
        }
    }
}

/// A projectile fired from the ship's nose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Missile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Missile {
    pub fn fired_from(player: &Player, tuning: &Tuning) -> Self {
        Self {
            position: player.nose(tuning),
            velocity: heading(player.rotation) * tuning.missile_speed,
            radius: tuning.missile_radius,
        }
    }
}

impl Body for Missile {
    fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn advance(&mut self) {
        self.position += self.velocity;
    }
}

/// An asteroid drifting in a straight line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    /// Score awarded when destroyed
    pub value: u32,
    /// Scalar speed, inherited (reduced) by fragments
    pub speed: f32,
}

impl Body for Asteroid {
    fn circle(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn advance(&mut self) {
        self.position += self.velocity;
    }

    fn as_asteroid(&self) -> Option<&Asteroid> {
        Some(self)
    }
}

/// Running score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub value: u64,
}

impl Score {
    pub fn add(&mut self, points: u64) {
        self.value = self.value.saturating_add(points);
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generator and spawn-edge RNG
    #[serde(skip)]
    pub rng: Pcg32,
    /// Frames simulated while running
    pub frame: u64,
    pub phase: GamePhase,
    /// Theme cycle slot
    pub color_index: usize,
    /// Current delay between asteroid spawns (ms)
    pub spawn_interval_ms: f32,
    pub viewport: Viewport,
    pub player: Player,
    pub missiles: Vec<Missile>,
    pub asteroids: Vec<Asteroid>,
    pub score: Score,
}

impl GameState {
    /// Fresh run: ship centered and at rest, empty sky
    pub fn new(seed: u64, viewport: Viewport, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            phase: GamePhase::Running,
            color_index: 0,
            spawn_interval_ms: tuning.spawn_interval_ms,
            viewport,
            player: Player::new(viewport.center()),
            missiles: Vec::new(),
            asteroids: Vec::new(),
            score: Score::default(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
