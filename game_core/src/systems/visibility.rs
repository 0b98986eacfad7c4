use hecs::World;
use serde::Serialize;

use crate::{Aabb, Geometry, GeometryKind, LevelId, Visibility};

/// Show exactly the geometry tagged with `level`, hide everything else
pub fn activate_level(world: &mut World, level: LevelId) {
    for (_entity, (geometry, visibility)) in world.query_mut::<(&Geometry, &mut Visibility)>() {
        visibility.visible = geometry.level == level;
    }
}

/// Presentation view of one geometry object
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometryView {
    pub id: u32,
    pub kind: GeometryKind,
    pub level: LevelId,
    pub bounds: Aabb,
    pub visible: bool,
}

/// Every geometry object with its current rect and visibility, ordered by id
pub fn geometry_views(world: &World) -> Vec<GeometryView> {
    let mut views: Vec<GeometryView> = world
        .query::<(&Geometry, &Aabb, &Visibility)>()
        .iter()
        .map(|(entity, (geometry, bounds, visibility))| GeometryView {
            id: entity.id(),
            kind: geometry.kind,
            level: geometry.level,
            bounds: *bounds,
            visible: visibility.visible,
        })
        .collect();
    views.sort_by_key(|view| view.id);
    views
}
