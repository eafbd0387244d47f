//! The rectangular world border.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::VoxelShape;

/// The rectangular horizontal boundary of the playable region.
///
/// Defined by four planar bounds and conceptually infinite along the vertical
/// axis. The collidable geometry of the border is everything *outside* those
/// bounds; see [`WorldBorder::as_shape`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBorder {
    west: Real,
    east: Real,
    north: Real,
    south: Real,
}

impl WorldBorder {
    /// How far out the border walls extend, horizontally and vertically.
    pub const MAX_EXTENT: Real = 3.0e7;

    /// Creates a border from its four planar bounds.
    pub fn new(west: Real, east: Real, north: Real, south: Real) -> Self {
        debug_assert!(
            west <= east && north <= south,
            "world border bounds must be ordered"
        );
        WorldBorder {
            west,
            east,
            north,
            south,
        }
    }

    /// The minimum x bound.
    #[inline]
    pub fn west(&self) -> Real {
        self.west
    }

    /// The maximum x bound.
    #[inline]
    pub fn east(&self) -> Real {
        self.east
    }

    /// The minimum z bound.
    #[inline]
    pub fn north(&self) -> Real {
        self.north
    }

    /// The maximum z bound.
    #[inline]
    pub fn south(&self) -> Real {
        self.south
    }

    /// Is `aabb` fully inside the border, comparing against the exact bounds?
    ///
    /// This is the reference test the outward-rounding fast path
    /// [`crate::query::aabb_is_within_border`] approximates.
    #[inline]
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        aabb.mins.x >= self.west
            && aabb.maxs.x <= self.east
            && aabb.mins.z >= self.north
            && aabb.maxs.z <= self.south
    }

    /// The collidable region outside the border, as four wall slabs.
    ///
    /// The walls overlap at the corners; overlap is harmless under the
    /// boolean AND/OR shape semantics.
    pub fn as_shape(&self) -> VoxelShape {
        let max = Self::MAX_EXTENT;

        VoxelShape::compound([
            Aabb::new(
                Point::new(-max, -max, -max),
                Point::new(self.west, max, max),
            ),
            Aabb::new(Point::new(self.east, -max, -max), Point::new(max, max, max)),
            Aabb::new(
                Point::new(-max, -max, -max),
                Point::new(max, max, self.north),
            ),
            Aabb::new(
                Point::new(-max, -max, self.south),
                Point::new(max, max, max),
            ),
        ])
    }
}
