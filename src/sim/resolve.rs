//! Collision resolution and garbage collection for paired entity lists
//!
//! A pass moves every object one frame, checks it against the ship hull and
//! the collider list, then drops whatever was destroyed or drifted off
//! screen. Removal is mark-then-compact: indices stay valid for the whole
//! pass and nothing is removed twice.

use super::collision::{Hull, circles_overlap};
use super::spawn::shatter;
use super::state::{Asteroid, Body, Viewport};
use crate::tuning::Tuning;

/// What a single pass produced, applied to the game state by the caller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassOutcome {
    /// Points from destroyed score-bearing colliders
    pub points: u64,
    /// Fragments from split asteroids, to be appended after the pass
    pub fragments: Vec<Asteroid>,
    /// An object touched the ship hull
    pub hull_struck: bool,
    /// Object/collider pairs destroyed
    pub collisions: u32,
    /// Objects dropped for leaving the viewport
    pub culled: u32,
}

/// Advance `objects` one frame and resolve them against `colliders`
///
/// Objects are visited from the last index down, colliders likewise. An
/// object is consumed by the first collider it overlaps; a collider already
/// consumed earlier in the pass is skipped.
pub fn resolve_pass<O: Body, C: Body>(
    objects: &mut Vec<O>,
    colliders: &mut Vec<C>,
    hull: Option<&Hull>,
    viewport: Viewport,
    tuning: &Tuning,
) -> PassOutcome {
    let mut outcome = PassOutcome::default();
    let mut object_gone = vec![false; objects.len()];
    let mut collider_gone = vec![false; colliders.len()];

    for i in (0..objects.len()).rev() {
        let object = &mut objects[i];
        object.advance();
        let circle = object.circle();

        if hull.is_some_and(|hull| hull.struck_by(circle, tuning.hull_test)) {
            outcome.hull_struck = true;
            object_gone[i] = true;
            continue;
        }

        for j in (0..colliders.len()).rev() {
            if collider_gone[j] {
                continue;
            }
            let collider = &colliders[j];
            if !circles_overlap(circle, collider.circle()) {
                continue;
            }

            if let Some(asteroid) = collider.as_asteroid() {
                outcome.points += u64::from(asteroid.value);
                if let Some(fragments) = shatter(asteroid, object.velocity(), tuning) {
                    log::debug!(
                        "Asteroid r={:.1} split into two r={:.1}",
                        asteroid.radius,
                        fragments[0].radius
                    );
                    outcome.fragments.extend(fragments);
                }
            }

            object_gone[i] = true;
            collider_gone[j] = true;
            outcome.collisions += 1;
            break;
        }

        if !object_gone[i] && viewport.is_beyond(circle) {
            object_gone[i] = true;
            outcome.culled += 1;
        }
    }

    compact(objects, &object_gone);
    compact(colliders, &collider_gone);
    outcome
}

/// Drop every entry whose flag is set, preserving order
fn compact<T>(items: &mut Vec<T>, gone: &[bool]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !gone[index];
        index += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Missile, Player};
    use glam::Vec2;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn missile(x: f32, y: f32, vx: f32, vy: f32) -> Missile {
        Missile {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius: 5.0,
        }
    }

    fn asteroid(x: f32, y: f32, radius: f32, value: u32) -> Asteroid {
        Asteroid {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius,
            value,
            speed: 1.0,
        }
    }

    #[test]
    fn test_missile_destroys_small_asteroid() {
        let tuning = Tuning::default();
        let mut missiles = vec![missile(100.0, 100.0, 10.0, 0.0)];
        let mut asteroids = vec![asteroid(110.0, 100.0, 20.0, 100)];

        let outcome = resolve_pass(&mut missiles, &mut asteroids, None, viewport(), &tuning);

        assert!(missiles.is_empty());
        assert!(asteroids.is_empty());
        assert_eq!(outcome.points, 100);
        assert_eq!(outcome.collisions, 1);
        assert!(outcome.fragments.is_empty());
    }

    #[test]
    fn test_missile_splits_large_asteroid() {
        let tuning = Tuning::default();
        let mut missiles = vec![missile(100.0, 100.0, 10.0, 0.0)];
        let mut asteroids = vec![asteroid(110.0, 100.0, 50.0, 100)];

        let outcome = resolve_pass(&mut missiles, &mut asteroids, None, viewport(), &tuning);

        assert!(missiles.is_empty());
        assert!(asteroids.is_empty());
        assert_eq!(outcome.points, 100);
        assert_eq!(outcome.fragments.len(), 2);
        for fragment in &outcome.fragments {
            assert!((fragment.radius - 26.315_79).abs() < 1e-3);
            assert_eq!(fragment.value, 150);
            assert_eq!(fragment.position, Vec2::new(110.0, 100.0));
        }
        assert_eq!(outcome.fragments[0].velocity, Vec2::new(2.0, 1.0));
        assert_eq!(outcome.fragments[1].velocity, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_asteroid_hitting_missile_scores_nothing() {
        let tuning = Tuning::default();
        let mut asteroids = vec![asteroid(110.0, 100.0, 50.0, 100)];
        let mut missiles = vec![missile(100.0, 100.0, 0.0, 0.0)];

        let outcome = resolve_pass(&mut asteroids, &mut missiles, None, viewport(), &tuning);

        assert!(asteroids.is_empty());
        assert!(missiles.is_empty());
        assert_eq!(outcome.points, 0);
        assert!(outcome.fragments.is_empty());
    }

    #[test]
    fn test_offscreen_asteroid_is_culled() {
        let tuning = Tuning::default();
        let mut asteroids = vec![Asteroid {
            velocity: Vec2::new(-1.0, 0.0),
            ..asteroid(-21.0, 300.0, 20.0, 100)
        }];
        let mut missiles: Vec<Missile> = Vec::new();

        let outcome = resolve_pass(&mut asteroids, &mut missiles, None, viewport(), &tuning);

        assert!(asteroids.is_empty());
        assert_eq!(outcome.culled, 1);
    }

    #[test]
    fn test_asteroid_straddling_edge_survives() {
        let tuning = Tuning::default();
        let mut asteroids = vec![Asteroid {
            velocity: Vec2::new(-1.0, 0.0),
            ..asteroid(-19.0, 300.0, 20.0, 100)
        }];
        let mut missiles: Vec<Missile> = Vec::new();

        let outcome = resolve_pass(&mut asteroids, &mut missiles, None, viewport(), &tuning);

        assert_eq!(asteroids.len(), 1);
        assert_eq!(asteroids[0].position, Vec2::new(-20.0, 300.0));
        assert_eq!(outcome.culled, 0);
    }

    #[test]
    fn test_hull_strike_is_reported() {
        let tuning = Tuning::default();
        let player = Player::new(Vec2::new(400.0, 300.0));
        let hull = player.hull(&tuning);
        let mut asteroids = vec![asteroid(440.0, 300.0, 15.0, 100)];
        let mut missiles: Vec<Missile> = Vec::new();

        let outcome = resolve_pass(&mut asteroids, &mut missiles, Some(&hull), viewport(), &tuning);

        assert!(outcome.hull_struck);
        assert!(asteroids.is_empty());
    }

    #[test]
    fn test_missile_consumed_by_first_hit_only() {
        let tuning = Tuning::default();
        let mut missiles = vec![missile(100.0, 100.0, 0.0, 0.0)];
        let mut asteroids = vec![
            asteroid(105.0, 100.0, 20.0, 100),
            asteroid(95.0, 100.0, 20.0, 300),
        ];

        let outcome = resolve_pass(&mut missiles, &mut asteroids, None, viewport(), &tuning);

        // Colliders are scanned from the back
        assert_eq!(outcome.points, 300);
        assert_eq!(asteroids.len(), 1);
        assert_eq!(asteroids[0].value, 100);
        assert!(missiles.is_empty());
    }

    #[test]
    fn test_consumed_collider_not_hit_twice() {
        let tuning = Tuning::default();
        let mut missiles = vec![
            missile(100.0, 100.0, 0.0, 0.0),
            missile(102.0, 100.0, 0.0, 0.0),
        ];
        let mut asteroids = vec![asteroid(110.0, 100.0, 20.0, 200)];

        let outcome = resolve_pass(&mut missiles, &mut asteroids, None, viewport(), &tuning);

        assert_eq!(outcome.points, 200);
        assert_eq!(outcome.collisions, 1);
        assert_eq!(missiles.len(), 1);
        assert_eq!(missiles[0].position, Vec2::new(100.0, 100.0));
        assert!(asteroids.is_empty());
    }

    #[test]
    fn test_survivors_keep_order() {
        let tuning = Tuning::default();
        let mut missiles = vec![
            missile(10.0, 10.0, 1.0, 0.0),
            missile(900.0, 10.0, 1.0, 0.0),
            missile(30.0, 10.0, 1.0, 0.0),
        ];
        let mut asteroids: Vec<Asteroid> = Vec::new();

        resolve_pass(&mut missiles, &mut asteroids, None, viewport(), &tuning);

        let xs: Vec<f32> = missiles.iter().map(|m| m.position.x).collect();
        assert_eq!(xs, vec![11.0, 31.0]);
    }
}
