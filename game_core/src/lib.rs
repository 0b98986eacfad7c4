pub mod components;
pub mod config;
pub mod error;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::{Entity, EntityBuilder, World};
use systems::*;

/// Run one frame of the platformer simulation
///
/// Player logic only runs while a level is being played; moving platforms
/// keep oscillating on wall-clock time either way. The only failure is a
/// level with no goal, which aborts the rest of the frame.
pub fn step(
    world: &mut World,
    session: &mut Session,
    levels: &LevelSet,
    config: &Config,
    time: &Time,
    events: &mut Events,
) -> Result<(), StepError> {
    if session.running() {
        update_player(world, session, levels, config, events)?;
    }

    oscillate_platforms(world, time, config);
    Ok(())
}

fn update_player(
    world: &mut World,
    session: &mut Session,
    levels: &LevelSet,
    config: &Config,
    events: &mut Events,
) -> Result<(), StepError> {
    // 1. Walk and jump from the held-key snapshot
    apply_input(session, config);

    // 2. Gravity
    integrate_gravity(&mut session.player, config);

    // 3. Land on platforms while descending
    land_on_platforms(world, session, config);

    // 4. Collectibles
    collect_items(world, session, config, events);

    // 5. Hazards end the frame with a full reset
    if touching_hazard(world, session, config) {
        session.hit_hazard(world, config, events);
        return Ok(());
    }

    // 6. Gravity zones
    apply_gravity_zones(world, session, config);

    // 7. Goal
    if reached_goal(world, session, config)? {
        session.complete_level(world, levels, config, events);
    }

    Ok(())
}

/// Helper to create one hidden geometry object
pub fn spawn_geometry(
    world: &mut World,
    kind: GeometryKind,
    level: LevelId,
    bounds: Aabb,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder.add(Geometry::new(kind, level));
    builder.add(bounds);
    builder.add(Visibility::default());
    if kind == GeometryKind::MovingPlatform {
        builder.add(Oscillator {
            base_y: bounds.top(),
        });
    }
    world.spawn(builder.build())
}

/// Helper to create the geometry of every level, all hidden until activated
pub fn spawn_level_geometry(world: &mut World, levels: &LevelSet) {
    for level in &levels.levels {
        for def in &level.geometry {
            spawn_geometry(world, def.kind, level.id, def.bounds);
        }
        tracing::debug!(
            level = level.id.0,
            objects = level.geometry.len(),
            "level geometry spawned"
        );
    }
}
