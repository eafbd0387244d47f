//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box (AABB).
///
/// Defined by its minimum and maximum corners. Every operation returns a new
/// box; an `Aabb` is never mutated in place by this crate.
///
/// Invariant: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y`, `mins.z ≤ maxs.z`.
/// Degenerate (zero-volume) boxes are valid values; the collision queries
/// treat a box as "empty" when its [average extent](Aabb::average_extent)
/// does not exceed [`crate::query::EPSILON`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point, maxs: Point) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point, half_extents: Vector) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this AABB along each axis.
    #[inline]
    pub fn extents(&self) -> Vector {
        self.maxs - self.mins
    }

    /// The half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector {
        self.extents() * 0.5
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// The side lengths of this AABB averaged over the three axes.
    #[inline]
    pub fn average_extent(&self) -> Real {
        self.extents().sum() / DIM as Real
    }

    /// Does this AABB strictly overlap `other`?
    ///
    /// Boxes that merely touch along a face, edge, or corner do not count as
    /// intersecting. This is the comparison collision semantics call for: a
    /// body resting exactly on a surface is in contact, not in collision.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        for i in 0..DIM {
            // Written positively so NaN bounds compare as non-intersecting.
            if !(self.mins[i] < other.maxs[i] && self.maxs[i] > other.mins[i]) {
                return false;
            }
        }

        true
    }

    /// Does this AABB fully contain `other`?
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// The smallest AABB containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    /// Computes the intersection of this AABB and another one, if any.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: Point::from(self.mins.coords.sup(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.inf(&other.maxs.coords)),
        };

        for i in 0..DIM {
            if result.mins[i] > result.maxs[i] {
                return None;
            }
        }

        Some(result)
    }

    /// Enlarges this AABB by `amount` on all sides.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        debug_assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Computes the AABB bounding `self` translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Extends this AABB in the direction of `motion`.
    ///
    /// Each axis grows on one side only: towards `mins` for a negative
    /// component, towards `maxs` for a positive one. The result is the volume
    /// swept by this box when displaced by `motion`.
    #[must_use]
    pub fn stretched(&self, motion: &Vector) -> Self {
        let mut result = *self;

        for i in 0..DIM {
            if motion[i] < 0.0 {
                result.mins[i] += motion[i];
            } else {
                result.maxs[i] += motion[i];
            }
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::Aabb;
    use crate::math::{Point, Vector};

    #[test]
    fn intersects_is_strict() {
        let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
        let touching = Aabb::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 1.0, 1.0));
        let overlapping = Aabb::new(Point::new(0.5, 0.5, 0.5), Point::new(2.0, 2.0, 2.0));

        assert!(!a.intersects(&touching));
        assert!(!touching.intersects(&a));
        assert!(a.intersects(&overlapping));
    }

    #[test]
    fn stretched_grows_towards_the_motion() {
        let aabb = Aabb::new(Point::new(0.0, 10.0, 0.0), Point::new(1.0, 11.0, 1.0));
        let swept = aabb.stretched(&Vector::new(0.5, -2.0, 0.0));

        assert_eq!(swept.mins, Point::new(0.0, 8.0, 0.0));
        assert_eq!(swept.maxs, Point::new(1.5, 11.0, 1.0));
    }

    #[test]
    fn average_extent_of_degenerate_box_is_zero() {
        let aabb = Aabb::new(Point::new(3.0, 4.0, 5.0), Point::new(3.0, 4.0, 5.0));
        assert_eq!(aabb.average_extent(), 0.0);
        assert_eq!(aabb.volume(), 0.0);
    }

    #[test]
    fn intersection_of_disjoint_boxes_is_none() {
        let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Point::new(2.0, 0.0, 0.0), Point::new(3.0, 1.0, 1.0));

        assert_eq!(a.intersection(&b), None);
        assert_eq!(
            a.intersection(&a.loosened(0.5)),
            Some(a),
            "the intersection with a larger box is the box itself"
        );
    }
}
