//! Non-persistent collision queries.
//!
//! Everything here is demand-driven and call-scoped: a query runs entirely on
//! the caller's thread, computes no more than the caller consumes, and leaves
//! no state behind. The entry points most movement code needs are:
//!
//! * [`get_block_collisions()`] to collect every block shape a box overlaps.
//! * [`box_collides_with_blocks()`] to ask for the first block collision only.
//! * [`box_collides_with_hard_bodies()`] to ask whether any hard body is hit.
//! * [`box_collides_with_border()`] to test a box against the world border.
//! * [`BodyBorderCollisions`] to lazily enumerate body and border collisions.
//! * [`reduce_for_single_axis_motion()`] to shrink the swept volume of a body
//!   moving along a single axis.

pub use self::block_sweep::BlockCollisionSweeper;
pub use self::body_border::{
    append_body_collisions, append_world_border_collision, BodyBorderCollisions,
};
pub use self::border::{aabb_is_within_border, border_collision_shape, box_collides_with_border};
pub use self::motion::reduce_for_single_axis_motion;
pub use self::support::supporting_block_collision;

pub mod block_sweep;
pub mod body_border;
pub mod border;
pub mod motion;
pub mod support;

use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::shape::VoxelShape;
use crate::world::{BlockView, Body, BodyIndex};

/// Boxes whose average side length does not exceed this threshold are treated
/// as empty: an empty box never collides.
pub const EPSILON: Real = 1.0e-7;

/// Is `aabb` too small to collide with anything?
#[inline]
pub fn aabb_is_empty(aabb: &Aabb) -> bool {
    aabb.average_extent() <= EPSILON
}

/// Collects every block shape colliding with `aabb`, in sweep order.
pub fn get_block_collisions(
    view: &dyn BlockView,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) -> Vec<VoxelShape> {
    BlockCollisionSweeper::new(view, body, *aabb).collect_all()
}

/// Does `aabb` collide with any block?
///
/// Pulls exactly one element from the sweep; the remaining cells are never
/// visited.
pub fn box_collides_with_blocks(
    view: &dyn BlockView,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) -> bool {
    let mut sweeper = BlockCollisionSweeper::new(view, body, *aabb);
    sweeper.next().is_some_and(|shape| !shape.is_empty())
}

/// Does `aabb` collide with any hard body?
///
/// Degenerate boxes report `false` without consulting the spatial index. The
/// world border is not considered here.
pub fn box_collides_with_hard_bodies(
    index: &dyn BodyIndex,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) -> bool {
    if aabb_is_empty(aabb) {
        return false;
    }

    BodyBorderCollisions::new(index, body, aabb.loosened(EPSILON))
        .next()
        .is_some()
}

/// Appends the sweeper's last computed shape to `collisions` when `missing`
/// holds.
///
/// Callers that detected a block collision through the cheap one-pull
/// existence check can patch the already-computed shape into their result set
/// without running a second sweep.
pub fn add_block_collision_if_missing(
    missing: bool,
    sweeper: &BlockCollisionSweeper<'_>,
    collisions: &mut Vec<VoxelShape>,
) {
    if missing {
        if let Some(last) = sweeper.last_collision() {
            collisions.push(last.clone());
        }
    }
}
