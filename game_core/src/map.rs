use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::GeometryKind;

/// Axis-aligned bounding box in pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left corner and a size, the way the page lays elements out
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::from_pos_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.max.y > other.min.y
            && self.min.y < other.max.y
            && self.max.x > other.min.x
            && self.min.x < other.max.x
    }

    /// Same box moved so its top edge sits at `y`
    pub fn with_top(&self, y: f32) -> Self {
        let size = self.size();
        Self::from_pos_size(Vec2::new(self.min.x, y), size)
    }
}

/// Level number, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelId(pub u8);

impl LevelId {
    pub const FIRST: LevelId = LevelId(crate::params::Params::FIRST_LEVEL);

    pub fn next(self) -> LevelId {
        LevelId(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for LevelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One authored piece of level geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryDef {
    pub kind: GeometryKind,
    pub bounds: Aabb,
}

impl GeometryDef {
    pub fn new(kind: GeometryKind, bounds: Aabb) -> Self {
        Self { kind, bounds }
    }
}

/// Level definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    pub id: LevelId,
    pub name: String,
    pub background: String,
    pub geometry: Vec<GeometryDef>,
}

/// All authored levels, in play order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub levels: Vec<LevelDef>,
}

impl LevelSet {
    pub fn new(levels: Vec<LevelDef>) -> Self {
        Self { levels }
    }

    pub fn get(&self, id: LevelId) -> Option<&LevelDef> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn contains(&self, id: LevelId) -> bool {
        self.get(id).is_some()
    }

    /// Display name, or "Unknown" for ids with no level
    pub fn name(&self, id: LevelId) -> &str {
        self.get(id)
            .map(|level| level.name.as_str())
            .unwrap_or("Unknown")
    }

    pub fn background(&self, id: LevelId) -> Option<&str> {
        self.get(id).map(|level| level.background.as_str())
    }

    /// The three shipped levels on an 800x600 playfield
    pub fn standard() -> Self {
        use GeometryKind::*;
        let g = |kind, x, y, w, h| GeometryDef::new(kind, Aabb::rect(x, y, w, h));

        let dawn = LevelDef {
            id: LevelId(1),
            name: "The Dawn".to_string(),
            background: "Background 5 (Bonus).png".to_string(),
            geometry: vec![
                g(Platform, 0.0, 480.0, 800.0, 20.0),
                g(Platform, 250.0, 380.0, 120.0, 20.0),
                g(Platform, 450.0, 300.0, 120.0, 20.0),
                g(Collectible, 300.0, 340.0, 20.0, 20.0),
                g(Collectible, 500.0, 260.0, 20.0, 20.0),
                g(Collectible, 640.0, 450.0, 20.0, 20.0),
                g(Hazard, 390.0, 465.0, 40.0, 15.0),
                g(Goal, 730.0, 420.0, 40.0, 60.0),
            ],
        };

        let forest = LevelDef {
            id: LevelId(2),
            name: "Forest of Lights".to_string(),
            background: "Background 6 (Bonus).png".to_string(),
            geometry: vec![
                g(Platform, 0.0, 480.0, 300.0, 20.0),
                g(Platform, 520.0, 480.0, 280.0, 20.0),
                g(MovingPlatform, 330.0, 420.0, 140.0, 20.0),
                g(Platform, 200.0, 330.0, 100.0, 20.0),
                g(Platform, 0.0, 260.0, 100.0, 20.0),
                g(Collectible, 380.0, 380.0, 20.0, 20.0),
                g(Collectible, 240.0, 290.0, 20.0, 20.0),
                g(Collectible, 600.0, 200.0, 20.0, 20.0),
                g(Hazard, 300.0, 560.0, 220.0, 40.0),
                g(GravityZone, 560.0, 150.0, 100.0, 330.0),
                g(Goal, 20.0, 200.0, 40.0, 60.0),
            ],
        };

        let ruins = LevelDef {
            id: LevelId(3),
            name: "The Ruined City".to_string(),
            background: "Background 7 (Bonus).png".to_string(),
            geometry: vec![
                g(Platform, 0.0, 480.0, 220.0, 20.0),
                g(Platform, 280.0, 400.0, 100.0, 20.0),
                g(MovingPlatform, 430.0, 340.0, 100.0, 20.0),
                g(Platform, 580.0, 280.0, 220.0, 20.0),
                g(Collectible, 320.0, 360.0, 20.0, 20.0),
                g(Collectible, 470.0, 300.0, 20.0, 20.0),
                g(Collectible, 620.0, 240.0, 20.0, 20.0),
                g(Collectible, 680.0, 240.0, 20.0, 20.0),
                g(Hazard, 220.0, 560.0, 580.0, 40.0),
                g(Hazard, 640.0, 265.0, 30.0, 15.0),
                g(GravityZone, 380.0, 200.0, 50.0, 200.0),
                g(GravityZone, 530.0, 180.0, 50.0, 160.0),
                g(Goal, 750.0, 220.0, 40.0, 60.0),
            ],
        };

        Self::new(vec![dawn, forest, ruins])
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_requires_both_axes() {
        let a = Aabb::rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Aabb::rect(5.0, 5.0, 10.0, 10.0)));
        assert!(
            !a.overlaps(&Aabb::rect(5.0, 20.0, 10.0, 10.0)),
            "apart vertically"
        );
        assert!(
            !a.overlaps(&Aabb::rect(20.0, 5.0, 10.0, 10.0)),
            "apart horizontally"
        );
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Aabb::rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Aabb::rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Aabb::rect(0.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_overlaps_both_ways() {
        let outer = Aabb::rect(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::rect(40.0, 40.0, 5.0, 5.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_with_top_keeps_size() {
        let a = Aabb::rect(3.0, 7.0, 10.0, 4.0).with_top(20.0);
        assert_eq!(a.min, Vec2::new(3.0, 20.0));
        assert_eq!(a.size(), Vec2::new(10.0, 4.0));
    }

    #[test]
    fn test_standard_levels_have_one_goal_each() {
        let set = LevelSet::standard();
        assert_eq!(set.levels.len(), 3);
        for level in &set.levels {
            let goals = level
                .geometry
                .iter()
                .filter(|g| g.kind == GeometryKind::Goal)
                .count();
            assert_eq!(goals, 1, "level {} should have exactly one goal", level.id);
        }
    }

    #[test]
    fn test_spawn_is_clear_of_hazards_and_goals() {
        let set = LevelSet::standard();
        let spawn = Aabb::rect(100.0, 400.0, 40.0, 40.0);
        for level in &set.levels {
            for def in &level.geometry {
                if matches!(def.kind, GeometryKind::Hazard | GeometryKind::Goal) {
                    assert!(
                        !spawn.overlaps(&def.bounds),
                        "level {} spawn blocked",
                        level.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_goal_spot_does_not_reach_next_goal() {
        let set = LevelSet::standard();
        let player = Vec2::new(40.0, 40.0);
        let goal = |level: &LevelDef| {
            level
                .geometry
                .iter()
                .find(|g| g.kind == GeometryKind::Goal)
                .map(|g| g.bounds)
                .unwrap()
        };

        for pair in set.levels.windows(2) {
            // Every player rect that touches this goal lies inside this box
            let reached = goal(&pair[0]);
            let reach = Aabb::new(reached.min - player, reached.max + player);
            assert!(
                !reach.overlaps(&goal(&pair[1])),
                "level {} goal spot overlaps level {} goal",
                pair[0].id,
                pair[1].id
            );
        }
    }

    #[test]
    fn test_level_names() {
        let set = LevelSet::standard();
        assert_eq!(set.name(LevelId(1)), "The Dawn");
        assert_eq!(set.name(LevelId(2)), "Forest of Lights");
        assert_eq!(set.name(LevelId(3)), "The Ruined City");
        assert_eq!(set.name(LevelId(9)), "Unknown");
        assert_eq!(set.background(LevelId(2)), Some("Background 6 (Bonus).png"));
    }
}
