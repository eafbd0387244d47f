//! Collidable volumes produced and consumed by the collision queries.

#[doc(inline)]
pub use self::voxel_shape::VoxelShape;

pub mod voxel_shape;
