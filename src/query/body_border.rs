//! Collisions against dynamic bodies and the world border.

use crate::bounding_volume::Aabb;
use crate::shape::VoxelShape;
use crate::world::{Body, BodyIndex, WorldBorder};

use super::{aabb_is_empty, aabb_is_within_border, EPSILON};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Bodies,
    Border,
    Done,
}

/// Lazy sequence of body footprints colliding with a query box, optionally
/// followed by the world-border shape.
///
/// The sequence is finite and single-pass; re-iterating requires a fresh
/// value. The spatial index is not consulted until the first pull, so callers
/// that never pull (or stop after the first hit) pay only for what they
/// consumed. Bodies always precede the border in iteration order: callers
/// relying on first-match semantics get bodies preferentially.
///
/// A body is included iff the applicable predicate holds: with no excluded
/// body, its own [`Body::is_collidable`] capability; with an excluded body
/// `e`, the relational predicate `e.collides_with(other)`.
///
/// The border element is produced at most once, after the body list is
/// exhausted, and only if the query box is not within the border while the
/// excluded body's own footprint still is — a body that already breached the
/// boundary must not re-collide with it on every following step.
pub struct BodyBorderCollisions<'a> {
    index: &'a dyn BodyIndex,
    excluded: Option<&'a dyn Body>,
    border: Option<&'a WorldBorder>,
    aabb: Aabb,
    bodies: Vec<&'a dyn Body>,
    fetched: bool,
    cursor: usize,
    phase: Phase,
}

impl<'a> BodyBorderCollisions<'a> {
    /// Body collisions only, for a query box already expanded by the caller.
    pub fn new(index: &'a dyn BodyIndex, excluded: Option<&'a dyn Body>, aabb: Aabb) -> Self {
        Self::build(index, excluded, None, aabb)
    }

    /// Body collisions followed by the world border.
    ///
    /// Border inclusion is only meaningful relative to an excluded body, so
    /// one is required here rather than asserted at runtime.
    pub fn with_border(
        index: &'a dyn BodyIndex,
        border: &'a WorldBorder,
        excluded: &'a dyn Body,
        aabb: Aabb,
    ) -> Self {
        Self::build(index, Some(excluded), Some(border), aabb)
    }

    fn build(
        index: &'a dyn BodyIndex,
        excluded: Option<&'a dyn Body>,
        border: Option<&'a WorldBorder>,
        aabb: Aabb,
    ) -> Self {
        let phase = if aabb_is_empty(&aabb) {
            // Empty box never collides; the spatial index is not consulted.
            Phase::Done
        } else {
            Phase::Bodies
        };

        BodyBorderCollisions {
            index,
            excluded,
            border,
            aabb,
            bodies: Vec::new(),
            fetched: false,
            cursor: 0,
            phase,
        }
    }

    fn border_collision(&self) -> Option<VoxelShape> {
        let border = self.border?;
        let excluded = self.excluded?;

        if !aabb_is_within_border(border, &self.aabb)
            && aabb_is_within_border(border, &excluded.bounding_box())
        {
            return Some(border.as_shape());
        }

        None
    }
}

impl Iterator for BodyBorderCollisions<'_> {
    type Item = VoxelShape;

    fn next(&mut self) -> Option<VoxelShape> {
        loop {
            match self.phase {
                Phase::Bodies => {
                    if !self.fetched {
                        self.fetched = true;
                        self.bodies = self.index.bodies_overlapping(&self.aabb, self.excluded);
                    }

                    while self.cursor < self.bodies.len() {
                        let other = self.bodies[self.cursor];
                        self.cursor += 1;

                        let hard = match self.excluded {
                            None => other.is_collidable(),
                            Some(excluded) => excluded.collides_with(other),
                        };

                        if hard {
                            return Some(VoxelShape::cuboid(other.bounding_box()));
                        }
                    }

                    self.phase = Phase::Border;
                }
                Phase::Border => {
                    self.phase = Phase::Done;

                    if let Some(shape) = self.border_collision() {
                        return Some(shape);
                    }
                }
                Phase::Done => return None,
            }
        }
    }
}

/// Appends the footprint shapes of all bodies colliding with `aabb` to
/// `collisions`.
///
/// Same predicate logic as [`BodyBorderCollisions`], without border handling,
/// materialized eagerly for callers that need the full set. Strictly
/// additive: pre-existing contents of `collisions` are kept.
pub fn append_body_collisions(
    collisions: &mut Vec<VoxelShape>,
    index: &dyn BodyIndex,
    body: Option<&dyn Body>,
    aabb: &Aabb,
) {
    if aabb_is_empty(aabb) {
        return;
    }

    let expanded = aabb.loosened(EPSILON);

    for other in index.bodies_overlapping(&expanded, body) {
        let hard = match body {
            None => other.is_collidable(),
            Some(body) => body.collides_with(other),
        };

        if hard {
            collisions.push(VoxelShape::cuboid(other.bounding_box()));
        }
    }
}

/// Appends the world-border shape to `collisions` if `aabb` reaches outside
/// the border while `body`'s own footprint is still within it.
///
/// Uses the rounded containment test on both boxes; near the map edge this is
/// coarser than the exact shape math by up to the rounding of one grid unit.
pub fn append_world_border_collision(
    collisions: &mut Vec<VoxelShape>,
    border: &WorldBorder,
    body: &dyn Body,
    aabb: &Aabb,
) {
    if !aabb_is_within_border(border, aabb) && aabb_is_within_border(border, &body.bounding_box())
    {
        collisions.push(border.as_shape());
    }
}
