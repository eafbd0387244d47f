//! Collaborator interfaces consumed by the collision queries.
//!
//! The engine is a pure query layer: the voxel grid, the registry of dynamic
//! bodies, and per-block shape tables are owned by the host and reached
//! through the traits below. None of these traits let the engine mutate
//! anything, and a query must never trigger loading as a side effect — a
//! chunk that is not loaded simply reports no collisions.

#[doc(inline)]
pub use self::border::WorldBorder;

pub mod border;

use crate::bounding_volume::Aabb;
use crate::shape::VoxelShape;

/// A position on the voxel grid.
pub type BlockPos = na::Point3<i32>;

/// Number of bits shifted to convert a block coordinate into the coordinate
/// of its chunk.
pub const CHUNK_SHIFT: i32 = 4;

/// The coordinate of the chunk containing the given block coordinate.
#[inline]
pub fn chunk_coord(block_coord: i32) -> i32 {
    block_coord >> CHUNK_SHIFT
}

/// A dynamic body with a collidable footprint.
pub trait Body {
    /// The body's current axis-aligned footprint.
    fn bounding_box(&self) -> Aabb;

    /// Whether other bodies collide against this one.
    ///
    /// Off by default; bodies whose collisions must be "hard" (a solid
    /// floating obstacle, a vehicle) opt in explicitly.
    fn is_collidable(&self) -> bool {
        false
    }

    /// Pairwise collision predicate owned by this body.
    ///
    /// May depend on relational state; the canonical example is a rider never
    /// hard-colliding with its own mount. The default consults only the other
    /// body's collidable capability.
    fn collides_with(&self, other: &dyn Body) -> bool {
        other.is_collidable()
    }

    /// A precomputed shape of the surface directly below this body, if the
    /// body tracks one.
    ///
    /// Bodies without this capability return `None` and the engine falls
    /// back to sampling the grid cell beneath the footprint center.
    fn cached_support_shape(&self) -> Option<VoxelShape> {
        None
    }
}

/// A loaded chunk of the voxel grid.
pub trait Chunk {
    /// The collision shape of the block at `pos`, in block-local coordinates.
    ///
    /// `context` is the body the shape is being queried for; blocks whose
    /// geometry depends on who is asking receive it.
    fn block_collision_shape(&self, pos: BlockPos, context: Option<&dyn Body>) -> VoxelShape;
}

/// Read access to the block grid and the world border.
pub trait BlockView {
    /// The chunk at the given chunk coordinates, if it is loaded.
    fn chunk_at(&self, chunk_x: i32, chunk_z: i32) -> Option<&dyn Chunk>;

    /// Is `y` outside the vertical limits of the world?
    fn is_out_of_height_limit(&self, y: i32) -> bool;

    /// The rectangular boundary of the playable region.
    fn world_border(&self) -> &WorldBorder;

    /// Whether the border region is capable of colliding with `body` at the
    /// given position. Host-controlled; collidable everywhere by default.
    fn border_can_collide(&self, body: Option<&dyn Body>, aabb: &Aabb) -> bool {
        let _ = (body, aabb);
        true
    }
}

/// Spatial index over dynamic bodies.
pub trait BodyIndex {
    /// All bodies whose footprints overlap `aabb`, excluding `exclude`
    /// itself.
    ///
    /// The order is the index's own, but must be deterministic for a fixed
    /// world state.
    fn bodies_overlapping<'a>(&'a self, aabb: &Aabb, exclude: Option<&dyn Body>)
        -> Vec<&'a dyn Body>;
}
