use crate::{count_overlaps, Config, GeometryKind, Session};
use hecs::World;

/// True if the player touches any hazard of the active level
pub fn touching_hazard(world: &World, session: &Session, config: &Config) -> bool {
    count_overlaps(world, session, config, GeometryKind::Hazard) > 0
}
