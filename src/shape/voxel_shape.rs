//! Voxel collision shapes: cuboids and compounds of cuboids.

use smallvec::SmallVec;

use crate::bounding_volume::Aabb;
use crate::math::{Vector, DIM};
use crate::query::EPSILON;

/// A collidable volume.
///
/// The collision queries treat shapes as atomic: the only structure they rely
/// on is emptiness and cuboid-wise overlap. Anything the grid hands back —
/// a plain full-cube block, multi-part block geometry, a body's footprint, or
/// the world-border walls — is represented as zero, one, or several
/// axis-aligned cuboids.
///
/// Boolean combination follows the usual voxel-shape semantics: two shapes
/// AND-intersect iff any pair of their cuboids strictly overlaps, and the OR
/// combination of two shapes is the concatenation of their cuboids.
#[derive(Clone, Debug, PartialEq)]
pub enum VoxelShape {
    /// The empty shape. Collides with nothing.
    Empty,
    /// A single axis-aligned cuboid.
    Cuboid(Aabb),
    /// Several axis-aligned cuboids taken together.
    Compound(SmallVec<[Aabb; 4]>),
}

impl VoxelShape {
    /// Wraps a box into a cuboid shape.
    ///
    /// Boxes below the degenerate-size threshold produce [`VoxelShape::Empty`]:
    /// an empty box never collides.
    pub fn cuboid(aabb: Aabb) -> Self {
        if aabb.average_extent() <= EPSILON {
            VoxelShape::Empty
        } else {
            VoxelShape::Cuboid(aabb)
        }
    }

    /// Builds a shape from several cuboids, dropping degenerate ones.
    pub fn compound<I>(cuboids: I) -> Self
    where
        I: IntoIterator<Item = Aabb>,
    {
        let mut parts: SmallVec<[Aabb; 4]> = cuboids
            .into_iter()
            .filter(|aabb| aabb.average_extent() > EPSILON)
            .collect();

        match parts.len() {
            0 => VoxelShape::Empty,
            1 => VoxelShape::Cuboid(parts.remove(0)),
            _ => VoxelShape::Compound(parts),
        }
    }

    /// Does this shape contain no volume at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, VoxelShape::Empty)
    }

    /// The cuboids making up this shape.
    #[inline]
    pub fn cuboids(&self) -> &[Aabb] {
        match self {
            VoxelShape::Empty => &[],
            VoxelShape::Cuboid(aabb) => core::slice::from_ref(aabb),
            VoxelShape::Compound(parts) => parts,
        }
    }

    /// Does this shape strictly overlap the given box?
    ///
    /// Equivalent to AND-combining `self` with a cuboid of `aabb` and testing
    /// the result for emptiness, without building the combined shape.
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.cuboids().iter().any(|part| part.intersects(aabb))
    }

    /// Does this shape strictly overlap `other` (boolean AND emptiness test)?
    pub fn intersects(&self, other: &VoxelShape) -> bool {
        self.cuboids()
            .iter()
            .any(|part| other.intersects_aabb(part))
    }

    /// The boolean OR combination of `self` and `other`.
    #[must_use]
    pub fn union(self, other: VoxelShape) -> VoxelShape {
        let parts = self
            .cuboids()
            .iter()
            .chain(other.cuboids())
            .copied()
            .collect::<SmallVec<[Aabb; 4]>>();
        Self::compound(parts)
    }

    /// This shape shifted by `translation`.
    #[must_use]
    pub fn translated(&self, translation: &Vector) -> VoxelShape {
        match self {
            VoxelShape::Empty => VoxelShape::Empty,
            VoxelShape::Cuboid(aabb) => VoxelShape::Cuboid(aabb.translated(translation)),
            VoxelShape::Compound(parts) => VoxelShape::Compound(
                parts
                    .iter()
                    .map(|aabb| aabb.translated(translation))
                    .collect(),
            ),
        }
    }

    /// Does this block-local shape spill outside the unit cell `[0, 1]³`?
    ///
    /// Block shapes are expressed in the coordinates of their own grid cell.
    /// Most stay inside it; shapes that reach into neighboring cells must be
    /// considered by the sweep even for cells the query box only borders.
    pub fn exceeds_unit_cell(&self) -> bool {
        self.cuboids().iter().any(|part| {
            (0..DIM).any(|i| part.mins[i] < -EPSILON || part.maxs[i] > 1.0 + EPSILON)
        })
    }
}
