//! Supporting-surface lookup beneath a body.

use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::VoxelShape;
use crate::world::{chunk_coord, BlockPos, BlockView, Body};

/// The collision shape of the surface directly below a body's footprint.
///
/// Bodies that track their supporting block supply the shape through
/// [`Body::cached_support_shape`] and skip the grid entirely. Otherwise the
/// single cell beneath the footprint center is sampled. The cached shape is
/// not always the one that would cancel a downward motion, but usually is,
/// and this lookup only feeds a quick additional test.
///
/// Returns `None` when the footprint is outside the world's height limits or
/// its chunk is not loaded. The returned shape is in world coordinates and
/// may itself be empty.
pub fn supporting_block_collision(
    view: &dyn BlockView,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) -> Option<VoxelShape> {
    if let Some(shape) = body.and_then(|body| body.cached_support_shape()) {
        return Some(shape);
    }

    collision_shape_below(view, body, aabb)
}

fn collision_shape_below(
    view: &dyn BlockView,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) -> Option<VoxelShape> {
    let x = (aabb.mins.x + (aabb.maxs.x - aabb.mins.x) * 0.5).floor() as i32;
    let y = aabb.mins.y.floor() as i32;
    let z = (aabb.mins.z + (aabb.maxs.z - aabb.mins.z) * 0.5).floor() as i32;

    if view.is_out_of_height_limit(y) {
        return None;
    }

    let chunk = view.chunk_at(chunk_coord(x), chunk_coord(z))?;
    let shape = chunk.block_collision_shape(BlockPos::new(x, y, z), body);

    Some(shape.translated(&Vector::new(x as Real, y as Real, z as Real)))
}
