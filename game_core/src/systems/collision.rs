use hecs::{Entity, World};

use crate::{Aabb, Config, Geometry, GeometryKind, LevelId, Session, Visibility};

/// Visible geometry of the active level matching `kind`, ordered by entity id
pub fn active_geometry(
    world: &World,
    level: LevelId,
    kind: impl Fn(GeometryKind) -> bool,
) -> Vec<(Entity, Aabb)> {
    let mut found: Vec<(Entity, Aabb)> = world
        .query::<(&Geometry, &Aabb, &Visibility)>()
        .iter()
        .filter(|(_e, (geometry, _b, visibility))| {
            visibility.visible && geometry.level == level && kind(geometry.kind)
        })
        .map(|(entity, (_g, bounds, _v))| (entity, *bounds))
        .collect();
    found.sort_by_key(|(entity, _)| entity.id());
    found
}

/// Count active objects of `kind` the player currently overlaps
pub fn count_overlaps(
    world: &World,
    session: &Session,
    config: &Config,
    kind: GeometryKind,
) -> usize {
    let player = session.player.bounds(config.player_size);
    active_geometry(world, session.level, |k| k == kind)
        .iter()
        .filter(|(_e, bounds)| player.overlaps(bounds))
        .count()
}

/// Land on platforms of the active level when falling into them from above
pub fn land_on_platforms(world: &World, session: &mut Session, config: &Config) {
    let platforms = active_geometry(world, session.level, GeometryKind::is_solid);

    for (_entity, platform) in platforms {
        let player_bounds = session.player.bounds(config.player_size);
        if player_bounds.overlaps(&platform) && session.player.vel_y > 0.0 {
            // Snap bottom edge onto the platform top
            session.player.pos.y = platform.top() - config.player_size.y;
            session.player.vel_y = 0.0;
            session.player.jumping = false;
        }
    }
}
