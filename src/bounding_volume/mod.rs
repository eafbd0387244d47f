//! Bounding volumes.

#[doc(inline)]
pub use self::aabb::Aabb;

pub mod aabb;
