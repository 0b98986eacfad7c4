use hecs::World;

use crate::{active_geometry, Config, Events, GameEvent, GeometryKind, Session, Visibility};

/// Collect touched collectibles: hide each and add its value once
pub fn collect_items(
    world: &mut World,
    session: &mut Session,
    config: &Config,
    events: &mut Events,
) {
    let player = session.player.bounds(config.player_size);
    let collectibles = active_geometry(world, session.level, |k| k == GeometryKind::Collectible);
    let touched: Vec<_> = collectibles
        .into_iter()
        .filter(|(_e, bounds)| player.overlaps(bounds))
        .map(|(entity, _)| entity)
        .collect();

    for entity in touched {
        if let Ok(mut visibility) = world.get::<&mut Visibility>(entity) {
            visibility.visible = false;
        }
        session.score.add(config.collectible_value);
        events.push(GameEvent::CollectiblePicked {
            level: session.level,
            score: session.score.points,
        });
        tracing::debug!(
            entity = entity.id(),
            score = session.score.points,
            "collectible picked"
        );
    }
}
