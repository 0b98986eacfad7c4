use crate::{Config, Session};

/// Apply held keys: horizontal walk and the jump impulse
pub fn apply_input(session: &mut Session, config: &Config) {
    let input = session.input;
    let player = &mut session.player;

    if input.left() {
        player.pos.x -= config.move_speed;
    }
    if input.right() {
        player.pos.x += config.move_speed;
    }

    // Level check on the airborne flag, not on the key transition
    if input.jump() && !player.jumping {
        player.vel_y = config.jump_velocity;
        player.jumping = true;
    }
}
