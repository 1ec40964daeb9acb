//! Per-tick player motion: gravity, fall clamp, and horizontal wrap

use super::state::Player;
use crate::settings::GameConfig;

/// Advance the player by one tick.
///
/// Returns true when the player's bottom edge reached the bottom of the
/// screen (game over). Nothing else is touched in that case.
pub fn integrate(player: &mut Player, config: &GameConfig) -> bool {
    if player.airborne {
        player.vel.y += config.gravity;
        // Clamp falling only; rising speed is bounded by the launch strength
        player.vel.y = player.vel.y.min(config.max_velocity);
        player.pos += player.vel;
    }

    if player.bottom() >= config.screen_height {
        return true;
    }

    wrap_horizontal(player, config.screen_width);
    false
}

/// Once more than half the sprite leaves one side, re-enter half-visible on
/// the other side.
pub fn wrap_horizontal(player: &mut Player, screen_width: f32) {
    let half = player.size.x / 2.0;
    let right = player.pos.x + player.size.x;

    if right > screen_width + half {
        player.pos.x = -half;
    } else if player.pos.x < -half {
        player.pos.x = screen_width + half - player.size.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn airborne_player(config: &GameConfig, pos: Vec2, vel: Vec2) -> Player {
        let mut player = Player::new(config);
        player.pos = pos;
        player.jump(vel);
        player
    }

    #[test]
    fn test_gravity_applied_before_move() {
        let config = GameConfig::default();
        let mut player = airborne_player(&config, Vec2::new(100.0, 100.0), Vec2::new(2.0, -10.0));

        assert!(!integrate(&mut player, &config));
        assert_eq!(player.vel, Vec2::new(2.0, -9.5));
        assert_eq!(player.pos, Vec2::new(102.0, 90.5));
    }

    #[test]
    fn test_fall_speed_clamped() {
        let config = GameConfig::default();
        let mut player = airborne_player(&config, Vec2::new(100.0, 0.0), Vec2::new(0.0, 24.8));

        integrate(&mut player, &config);
        assert_eq!(player.vel.y, config.max_velocity);
        assert_eq!(player.pos.y, config.max_velocity);
    }

    #[test]
    fn test_rise_not_clamped() {
        let config = GameConfig::default();
        let mut player = airborne_player(&config, Vec2::new(100.0, 300.0), Vec2::new(0.0, -40.0));

        integrate(&mut player, &config);
        assert_eq!(player.vel.y, -39.5);
    }

    #[test]
    fn test_grounded_player_does_not_move() {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.pos = Vec2::new(100.0, 200.0);
        player.vel = Vec2::new(3.0, 0.0);

        assert!(!integrate(&mut player, &config));
        assert_eq!(player.pos, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_terminal_at_screen_bottom() {
        let config = GameConfig::default();
        // Bottom lands exactly on the screen edge
        let mut player = airborne_player(&config, Vec2::new(100.0, 540.0), Vec2::new(0.0, 9.5));
        assert!(integrate(&mut player, &config));
        assert_eq!(player.bottom(), config.screen_height);
    }

    #[test]
    fn test_terminal_skips_wrap() {
        let config = GameConfig::default();
        let mut player = airborne_player(&config, Vec2::new(790.0, 560.0), Vec2::new(20.0, 10.0));
        assert!(integrate(&mut player, &config));
        // Past the wrap threshold, but game over wins
        assert_eq!(player.pos.x, 810.0);
    }

    #[test]
    fn test_wrap_right_to_left() {
        let config = GameConfig::default();
        let mut player = airborne_player(&config, Vec2::new(770.0, 100.0), Vec2::new(10.0, 0.0));
        integrate(&mut player, &config);
        assert_eq!(player.pos.x, -25.0);
    }

    #[test]
    fn test_wrap_left_to_right() {
        let config = GameConfig::default();
        let mut player = airborne_player(&config, Vec2::new(-20.0, 100.0), Vec2::new(-10.0, 0.0));
        integrate(&mut player, &config);
        assert_eq!(player.pos.x, 775.0);
        assert_eq!(player.pos.x + player.size.x, 825.0);
    }

    #[test]
    fn test_wrap_threshold_is_stable() {
        let config = GameConfig::default();
        for start_x in [775.0, -25.0] {
            let mut player = Player::new(&config);
            player.pos = Vec2::new(start_x, 100.0);

            integrate(&mut player, &config);
            let first = player.pos.x;
            integrate(&mut player, &config);
            assert_eq!(first, start_x);
            assert_eq!(player.pos.x, first);
        }
    }

    proptest! {
        #[test]
        fn wrap_never_oscillates(x in -200.0f32..1000.0, y in 0.0f32..400.0) {
            let config = GameConfig::default();
            let mut player = Player::new(&config);
            player.pos = Vec2::new(x, y);

            integrate(&mut player, &config);
            let once = player.pos.x;
            integrate(&mut player, &config);
            prop_assert_eq!(player.pos.x, once);
        }

        #[test]
        fn bottom_past_screen_is_game_over(y in 550.0f32..700.0, vy in -5.0f32..30.0) {
            let config = GameConfig::default();
            let mut player = airborne_player(&config, Vec2::new(300.0, y), Vec2::new(0.0, vy));
            let over = integrate(&mut player, &config);
            prop_assert_eq!(over, player.bottom() >= config.screen_height);
        }
    }
}
