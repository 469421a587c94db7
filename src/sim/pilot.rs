//! Player controller: held keys to ship motion

use super::state::{Player, Viewport};
use super::tick::TickInput;
use crate::heading;
use crate::tuning::Tuning;

/// Advance the ship one frame from the held-key state
///
/// Position integrates the previous frame's velocity first. Thrust then pins
/// velocity to the facing at full speed; without thrust it decays by
/// friction and never snaps to zero. Leaving the viewport clamps both axes
/// into the inset rectangle, even if only one axis was out.
pub fn steer(player: &mut Player, input: &TickInput, viewport: Viewport, tuning: &Tuning) {
    player.position += player.velocity;

    if input.thrust {
        player.velocity = heading(player.rotation) * tuning.player_speed;
    } else {
        player.velocity *= tuning.friction;
    }

    if input.turn_right {
        player.rotation += tuning.turn_rate;
    }
    if input.turn_left {
        player.rotation -= tuning.turn_rate;
    }

    if !viewport.contains(player.position) {
        player.position = viewport.clamp_inset(player.position, tuning.boundary_margin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_thrust_sets_velocity_to_facing() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.velocity = Vec2::new(-3.0, 2.0);
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };

        steer(&mut player, &input, viewport(), &tuning);

        assert_eq!(player.position, Vec2::new(397.0, 302.0));
        assert_eq!(player.velocity, Vec2::new(5.0, 0.0));

        // Holding thrust does not accumulate
        steer(&mut player, &input, viewport(), &tuning);
        assert_eq!(player.velocity, Vec2::new(5.0, 0.0));
        assert_eq!(player.position, Vec2::new(402.0, 302.0));
    }

    #[test]
    fn test_coasting_decays_but_never_stops() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        player.velocity = Vec2::new(4.0, 0.0);

        for _ in 0..200 {
            steer(&mut player, &TickInput::default(), viewport(), &tuning);
        }

        assert!(player.velocity.x > 0.0);
        assert!(player.velocity.x < 0.01);
    }

    #[test]
    fn test_opposite_turns_cancel() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(400.0, 300.0));
        let input = TickInput {
            turn_left: true,
            turn_right: true,
            ..Default::default()
        };

        steer(&mut player, &input, viewport(), &tuning);
        assert!(player.rotation.abs() < 1e-6);

        let right = TickInput {
            turn_right: true,
            ..Default::default()
        };
        steer(&mut player, &right, viewport(), &tuning);
        assert!((player.rotation - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_leaving_right_edge_clamps_both_axes() {
        let tuning = Tuning::default();
        let vp = viewport();
        let mut player = Player::new(Vec2::new(vp.width + 50.0, vp.height / 2.0));

        steer(&mut player, &TickInput::default(), vp, &tuning);

        assert_eq!(player.position, Vec2::new(vp.width - 30.0, vp.height / 2.0));
        assert!((30.0..=vp.width - 30.0).contains(&player.position.x));
        assert!((30.0..=vp.height - 30.0).contains(&player.position.y));
    }

    #[test]
    fn test_leaving_one_axis_pulls_other_axis_inside_margin() {
        let tuning = Tuning::default();
        let vp = viewport();
        // y is inside the viewport but within the margin
        let mut player = Player::new(Vec2::new(-5.0, 10.0));

        steer(&mut player, &TickInput::default(), vp, &tuning);

        assert_eq!(player.position, Vec2::new(30.0, 30.0));
    }

    #[test]
    fn test_inside_margin_without_leaving_is_untouched() {
        let tuning = Tuning::default();
        let mut player = Player::new(Vec2::new(5.0, 5.0));

        steer(&mut player, &TickInput::default(), viewport(), &tuning);

        assert_eq!(player.position, Vec2::new(5.0, 5.0));
    }
}
