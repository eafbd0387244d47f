//! Fast world-border tests.

use crate::bounding_volume::Aabb;
use crate::shape::VoxelShape;
use crate::world::{BlockView, Body, WorldBorder};

/// Is `aabb` fully within the border, to the rounding granularity of one grid
/// unit?
///
/// The border bounds are rounded outward (floor on the west/north minimums,
/// ceil on the east/south maximums), so a box exactly touching a border edge
/// still counts as within. This substitutes for the shape-based intersection
/// test in the overwhelming common case of a box nowhere near the map edge.
///
/// The rounding is an accepted approximation: at sub-grid-unit precision this
/// may report "within" where the exact test disagrees, but it never reports
/// "outside" for a box the exact test considers inside. Callers that need the
/// exact answer fall back to [`box_collides_with_border`].
pub fn aabb_is_within_border(border: &WorldBorder, aabb: &Aabb) -> bool {
    let min_x = border.west().floor();
    let min_z = border.north().floor();
    let max_x = border.east().ceil();
    let max_z = border.south().ceil();

    aabb.mins.x >= min_x
        && aabb.mins.x <= max_x
        && aabb.mins.z >= min_z
        && aabb.mins.z <= max_z
        && aabb.maxs.x >= min_x
        && aabb.maxs.x <= max_x
        && aabb.maxs.z >= min_z
        && aabb.maxs.z <= max_z
}

/// The border's collidable shape, if the border region is capable of
/// colliding with `body` at this position.
pub fn border_collision_shape(
    view: &dyn BlockView,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) -> Option<VoxelShape> {
    view.border_can_collide(body, aabb)
        .then(|| view.world_border().as_shape())
}

/// Does `aabb` collide with the world border?
///
/// Short-circuits through the cheap rounded containment test; only boxes near
/// the map edge pay for the exact shape intersection.
pub fn box_collides_with_border(
    view: &dyn BlockView,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) -> bool {
    if aabb_is_within_border(view.world_border(), aabb) {
        return false;
    }

    border_collision_shape(view, body, aabb).is_some_and(|shape| shape.intersects_aabb(aabb))
}
