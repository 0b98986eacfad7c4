use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::map::{Aabb, LevelId};

/// Player kinematic state - there is exactly one, owned by the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub pos: Vec2, // top-left corner, pixels
    pub vel_y: f32, // negative = up
    pub jumping: bool, // airborne since the last jump impulse
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            jumping: false,
        }
    }

    /// Back to the spawn point, at rest and grounded
    pub fn reset(&mut self, spawn: Vec2) {
        *self = Self::new(spawn);
    }

    pub fn bounds(&self, size: Vec2) -> Aabb {
        Aabb::from_pos_size(self.pos, size)
    }
}

/// What a piece of level geometry does when the player touches it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeometryKind {
    Platform,
    Goal,
    Collectible,
    Hazard,
    GravityZone,
    MovingPlatform,
}

impl GeometryKind {
    /// Kinds the player can stand on
    pub fn is_solid(self) -> bool {
        matches!(self, GeometryKind::Platform | GeometryKind::MovingPlatform)
    }
}

/// Geometry component - kind plus the level it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub kind: GeometryKind,
    pub level: LevelId,
}

impl Geometry {
    pub fn new(kind: GeometryKind, level: LevelId) -> Self {
        Self { kind, level }
    }
}

/// Whether the object is shown (and therefore collidable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub visible: bool,
}

/// Vertical oscillation anchor for moving platforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub base_y: f32,
}
