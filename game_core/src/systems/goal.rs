use hecs::World;

use crate::{active_geometry, Config, GeometryKind, Session, StepError};

/// Check the active level's goal; a level without one is an authoring defect
pub fn reached_goal(world: &World, session: &Session, config: &Config) -> Result<bool, StepError> {
    let (_entity, goal) = active_geometry(world, session.level, |k| k == GeometryKind::Goal)
        .into_iter()
        .next()
        .ok_or(StepError::MissingGoal {
            level: session.level,
        })?;

    Ok(session.player.bounds(config.player_size).overlaps(&goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_geometry, Aabb, LevelId, Visibility};

    #[test]
    fn test_missing_goal_is_an_error() {
        let config = Config::new();
        let session = Session::new(&config);
        let world = World::new();
        assert_eq!(
            reached_goal(&world, &session, &config),
            Err(StepError::MissingGoal { level: LevelId(1) })
        );
    }

    #[test]
    fn test_goal_overlap() {
        let config = Config::new();
        let mut session = Session::new(&config);
        let mut world = World::new();
        let goal = spawn_geometry(
            &mut world,
            GeometryKind::Goal,
            LevelId(1),
            Aabb::rect(700.0, 380.0, 40.0, 60.0),
        );
        world
            .insert_one(goal, Visibility { visible: true })
            .unwrap();

        assert_eq!(reached_goal(&world, &session, &config), Ok(false));

        session.player.pos.x = 680.0;
        assert_eq!(reached_goal(&world, &session, &config), Ok(true));
    }

    #[test]
    fn test_other_level_goal_does_not_count() {
        let config = Config::new();
        let session = Session::new(&config);
        let mut world = World::new();
        let goal = spawn_geometry(
            &mut world,
            GeometryKind::Goal,
            LevelId(2),
            Aabb::rect(100.0, 400.0, 40.0, 60.0),
        );
        world
            .insert_one(goal, Visibility { visible: true })
            .unwrap();

        assert!(reached_goal(&world, &session, &config).is_err());
    }
}
