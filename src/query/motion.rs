//! Query-box reduction for axis-aligned motion.

use log::debug;

use crate::bounding_volume::Aabb;
use crate::math::Vector;

/// Rewrites a query box for motion along a single axis into the smaller slab
/// the box is about to enter.
///
/// A body already overlapping a static obstacle does not need that overlap
/// re-detected; only its future path matters for step resolution. The
/// returned box spans from the leading face on the moving axis to that face
/// offset by the velocity, keeping the full extent on the other two axes.
/// Shrinking the query box shrinks the grid sweep to only the cells newly
/// entered, the dominant cost for fast bodies in dense terrain.
///
/// When no single moving axis can be identified — all components zero or
/// NaN, or several nonzero — the conservative full-motion sweep
/// [`Aabb::stretched`] is returned instead.
pub fn reduce_for_single_axis_motion(aabb: &Aabb, velocity: &Vector) -> Aabb {
    let moving_axes = velocity
        .iter()
        .filter(|v| **v != 0.0 && !v.is_nan())
        .count();

    if moving_axes != 1 {
        if velocity.iter().any(|v| v.is_nan()) {
            debug!(
                "cannot reduce the query box for velocity {:?}; falling back to a full stretch",
                velocity
            );
        }
        return aabb.stretched(velocity);
    }

    let mut mins = aabb.mins;
    let mut maxs = aabb.maxs;

    if velocity.y > 0.0 {
        mins.y = maxs.y;
        maxs.y += velocity.y;
    } else if velocity.y < 0.0 {
        maxs.y = mins.y;
        mins.y += velocity.y;
    } else if velocity.x > 0.0 {
        mins.x = maxs.x;
        maxs.x += velocity.x;
    } else if velocity.x < 0.0 {
        maxs.x = mins.x;
        mins.x += velocity.x;
    } else if velocity.z > 0.0 {
        mins.z = maxs.z;
        maxs.z += velocity.z;
    } else if velocity.z < 0.0 {
        maxs.z = mins.z;
        mins.z += velocity.z;
    }

    Aabb::new(mins, maxs)
}
