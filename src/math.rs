//! Aliases for the mathematical types used throughout this crate.

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point = na::Point3<Real>;

/// The vector type.
pub type Vector = na::Vector3<Real>;
