//! Asteroid creation: edge spawns and fragment splitting

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, Viewport};
use crate::consts::*;
use crate::tuning::Tuning;

/// Screen edge an asteroid enters from, in draw order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Bottom,
    Right,
    Top,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Left, Edge::Bottom, Edge::Right, Edge::Top];

    /// Unit velocity direction pointing into the viewport
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::X,
            Edge::Bottom => Vec2::NEG_Y,
            Edge::Right => Vec2::NEG_X,
            Edge::Top => Vec2::Y,
        }
    }
}

/// Speed and score for a freshly spawned asteroid of the given radius
///
/// Smaller rocks are faster and worth more. A radius of exactly the small
/// limit falls through to the large band, as does anything from the large
/// limit upward.
pub fn size_band(radius: f32, base_speed: f32) -> (f32, u32) {
    if radius < SMALL_ASTEROID_LIMIT {
        (base_speed + SMALL_ASTEROID_BOOST, SMALL_ASTEROID_VALUE)
    } else if radius > SMALL_ASTEROID_LIMIT && radius < LARGE_ASTEROID_LIMIT {
        (base_speed + MEDIUM_ASTEROID_BOOST, MEDIUM_ASTEROID_VALUE)
    } else {
        (base_speed, LARGE_ASTEROID_VALUE)
    }
}

/// Spawn an asteroid just outside a random edge, heading straight in
pub fn generate_asteroid<R: Rng>(rng: &mut R, viewport: Viewport, tuning: &Tuning) -> Asteroid {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let radius = tuning.asteroid_max_size * rng.random::<f32>() + tuning.asteroid_min_radius;
    let (speed, value) = size_band(radius, tuning.asteroid_speed);

    let position = match edge {
        Edge::Left => Vec2::new(-radius, rng.random::<f32>() * viewport.height),
        Edge::Bottom => Vec2::new(rng.random::<f32>() * viewport.width, viewport.height + radius),
        Edge::Right => Vec2::new(viewport.width + radius, rng.random::<f32>() * viewport.height),
        Edge::Top => Vec2::new(rng.random::<f32>() * viewport.width, -radius),
    };

    Asteroid {
        position,
        velocity: edge.inward() * speed,
        radius,
        value,
        speed,
    }
}

/// One fragment of a destroyed asteroid
///
/// `sign` (+1 or -1) is added to both velocity axes so the two fragments of
/// a split drift apart.
pub fn split_asteroid(
    parent: &Asteroid,
    hitter_velocity: Vec2,
    sign: f32,
    tuning: &Tuning,
) -> Asteroid {
    Asteroid {
        position: parent.position,
        velocity: hitter_velocity / tuning.missile_speed + Vec2::splat(sign),
        radius: (parent.radius / tuning.split_divisor).max(tuning.fragment_min_radius),
        value: parent.value + tuning.fragment_value_bonus,
        speed: parent.speed - tuning.fragment_speed_penalty,
    }
}

/// Both fragments of a destroyed asteroid, or none if it is too small to split
pub fn shatter(
    parent: &Asteroid,
    hitter_velocity: Vec2,
    tuning: &Tuning,
) -> Option<[Asteroid; 2]> {
    if parent.radius > tuning.split_threshold {
        Some([
            split_asteroid(parent, hitter_velocity, 1.0, tuning),
            split_asteroid(parent, hitter_velocity, -1.0, tuning),
        ])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn parent(radius: f32) -> Asteroid {
        Asteroid {
            position: Vec2::new(110.0, 100.0),
            velocity: Vec2::new(-1.0, 0.0),
            radius,
            value: 100,
            speed: 1.0,
        }
    }

    #[test]
    fn test_size_band_boundaries() {
        assert_eq!(size_band(29.9, 1.0), (2.0, 300));
        assert_eq!(size_band(30.0, 1.0), (1.0, 100));
        assert_eq!(size_band(45.0, 1.0), (1.5, 200));
        assert_eq!(size_band(60.0, 1.0), (1.0, 100));
        assert_eq!(size_band(89.0, 1.0), (1.0, 100));
    }

    #[test]
    fn test_split_fragment_fields() {
        let tuning = Tuning::default();
        let child = split_asteroid(&parent(50.0), Vec2::new(10.0, 0.0), 1.0, &tuning);
        assert_eq!(child.position, Vec2::new(110.0, 100.0));
        assert_eq!(child.velocity, Vec2::new(2.0, 1.0));
        assert!((child.radius - 50.0 / 1.9).abs() < 1e-4);
        assert_eq!(child.value, 150);
        assert_eq!(child.speed, -1.0);

        let twin = split_asteroid(&parent(50.0), Vec2::new(10.0, 0.0), -1.0, &tuning);
        assert_eq!(twin.velocity, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_shatter_requires_radius_above_threshold() {
        let tuning = Tuning::default();
        assert!(shatter(&parent(30.0), Vec2::X, &tuning).is_none());
        assert!(shatter(&parent(20.0), Vec2::X, &tuning).is_none());
        assert!(shatter(&parent(30.5), Vec2::X, &tuning).is_some());
    }

    #[test]
    fn test_generated_asteroid_starts_outside_and_heads_in() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..500 {
            let a = generate_asteroid(&mut rng, viewport, &tuning);
            let next = a.position + a.velocity;
            // Entering: the next step moves closer to the center
            assert!(next.distance(viewport.center()) < a.position.distance(viewport.center()));
            let on_edge = a.position.x == -a.radius
                || a.position.x == viewport.width + a.radius
                || a.position.y == -a.radius
                || a.position.y == viewport.height + a.radius;
            assert!(on_edge);
            assert!((a.velocity.length() - a.speed).abs() < 1e-5);
        }
    }

    #[test]
    fn test_generator_value_bands_over_many_draws() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(1024.0, 768.0);
        let mut rng = Pcg32::seed_from_u64(2024);
        for _ in 0..10_000 {
            let a = generate_asteroid(&mut rng, viewport, &tuning);
            assert!(a.radius >= 10.0 && a.radius < 90.0);
            let expected = if a.radius < 30.0 {
                300
            } else if a.radius > 30.0 && a.radius < 60.0 {
                200
            } else {
                100
            };
            assert_eq!(a.value, expected);
            assert!(a.speed >= tuning.asteroid_speed);
        }
    }

    #[test]
    fn test_generator_is_deterministic_per_seed() {
        let tuning = Tuning::default();
        let viewport = Viewport::new(800.0, 600.0);
        let mut a = Pcg32::seed_from_u64(9);
        let mut b = Pcg32::seed_from_u64(9);
        for _ in 0..32 {
            assert_eq!(
                generate_asteroid(&mut a, viewport, &tuning),
                generate_asteroid(&mut b, viewport, &tuning)
            );
        }
    }

    proptest! {
        #[test]
        fn prop_split_never_below_min_radius(
            radius in 30.01f32..500.0, vx in -20.0f32..20.0, vy in -20.0f32..20.0,
        ) {
            let tuning = Tuning::default();
            let children = shatter(&parent(radius), Vec2::new(vx, vy), &tuning);
            prop_assert!(children.is_some());
            for child in children.iter().flatten() {
                prop_assert!(child.radius >= 20.0);
                prop_assert!((child.radius - (radius / 1.9).max(20.0)).abs() < 1e-3);
                prop_assert_eq!(child.value, 150);
            }
        }
    }
}
