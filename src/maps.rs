/// Arena layout: a hollow square of wall tiles.

use tracing::debug;

use crate::container::SpriteList;
use crate::entities::{Body, EntityIds, Wall};
use crate::tuning::{
    SPATIAL_CELL_SIZE, WALL_BOT, WALL_LEFT, WALL_RIGHT, WALL_SCALING, WALL_TILE_SIZE, WALL_TOP,
};

/// Inclusive-exclusive edge coordinates of the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

pub const ARENA: Bounds = Bounds {
    left: WALL_LEFT,
    right: WALL_RIGHT,
    bottom: WALL_BOT,
    top: WALL_TOP,
};

/// The default arena.
pub fn create_walls(ids: &mut EntityIds) -> SpriteList<Wall> {
    create_walls_within(ARENA, WALL_TILE_SIZE, WALL_SCALING, ids)
}

/// Lay tiles along the four edges of `bounds`, one every
/// `tile_size * scale` units.  Each horizontal run starts at `left` and
/// stops before `right`; vertical runs likewise from `bottom` to `top`.
/// The interior stays empty.
pub fn create_walls_within(
    bounds: Bounds,
    tile_size: f32,
    scale: f32,
    ids: &mut EntityIds,
) -> SpriteList<Wall> {
    let side = tile_size * scale;
    let pitch = (side as usize).max(1);
    let mut positions = Vec::new();

    for x in (bounds.left..bounds.right).step_by(pitch) {
        positions.push((x, bounds.bottom));
        positions.push((x, bounds.top));
    }
    for y in (bounds.bottom..bounds.top).step_by(pitch) {
        positions.push((bounds.left, y));
        positions.push((bounds.right, y));
    }

    let mut walls = SpriteList::with_spatial_hash(SPATIAL_CELL_SIZE);
    for (x, y) in positions {
        walls.push(Wall {
            id: ids.next_id(),
            body: Body::new(x as f32, y as f32, side, side),
        });
    }
    debug!(tiles = walls.len(), pitch, "walls created");
    walls
}
