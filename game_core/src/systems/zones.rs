use hecs::World;

use crate::{count_overlaps, Config, GeometryKind, Session};

/// Each overlapping gravity zone pushes back against gravity once per tick
pub fn apply_gravity_zones(world: &World, session: &mut Session, config: &Config) {
    let zones = count_overlaps(world, session, config, GeometryKind::GravityZone);
    if zones > 0 {
        session.player.vel_y -= config.gravity_zone_lift * zones as f32;
    }
}
