use crate::{Config, Player};

/// Constant per-tick gravity, then move by the new velocity
pub fn integrate_gravity(player: &mut Player, config: &Config) {
    player.vel_y += config.gravity;
    player.pos.y += player.vel_y;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_free_fall_from_rest() {
        let config = Config::new();
        let mut player = Player::new(Vec2::new(100.0, 400.0));
        integrate_gravity(&mut player, &config);
        assert_eq!(player.vel_y, 0.5);
        assert_eq!(player.pos.y, 400.5);
        assert!(!player.jumping, "gravity never touches the airborne flag");
    }

    #[test]
    fn test_fall_accelerates() {
        let config = Config::new();
        let mut player = Player::new(Vec2::new(0.0, 0.0));
        for _ in 0..4 {
            integrate_gravity(&mut player, &config);
        }
        // 0.5 + 1.0 + 1.5 + 2.0
        assert_eq!(player.vel_y, 2.0);
        assert_eq!(player.pos.y, 5.0);
    }

    #[test]
    fn test_jump_apex_rises_then_falls() {
        let config = Config::new();
        let mut player = Player::new(Vec2::new(0.0, 400.0));
        player.vel_y = -10.0;
        integrate_gravity(&mut player, &config);
        assert_eq!(player.vel_y, -9.5);
        assert_eq!(player.pos.y, 390.5);
    }
}
