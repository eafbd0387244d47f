//! Chunk-aware sweep over the grid cells a box overlaps.

use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};
use crate::shape::VoxelShape;
use crate::world::{chunk_coord, BlockPos, BlockView, Body, Chunk};

use super::{aabb_is_within_border, EPSILON};

/// Lazy sweep over every grid cell a query box overlaps, yielding the block
/// shapes that collide with it.
///
/// The sweep is finite, single-pass, and deterministic for a given box and
/// world state: cells are visited x-outermost, then z, then y, so consecutive
/// steps stay within one chunk and the chunk lookup is cached across them. A
/// missing chunk or an out-of-range height is "no collision at that cell" —
/// the sweep never triggers chunk loading.
///
/// Block shapes are queried in block-local coordinates and translated to
/// their cell before the overlap test. The cell range carries a one-cell ring
/// beyond the box for shapes that spill outside their own cell; within the
/// ring, shapes that stay inside the unit cell are skipped since they cannot
/// reach the box.
///
/// When constructed with a context body, the first element produced is the
/// world-border shape if the box reaches outside the border while the body's
/// own footprint is still within it, using the cheap rounded containment test
/// instead of shape math. The border therefore precedes all block results.
pub struct BlockCollisionSweeper<'a> {
    view: &'a dyn BlockView,
    body: Option<&'a dyn Body>,
    aabb: Aabb,
    min: BlockPos,
    max: BlockPos,
    pos: BlockPos,
    started: bool,
    border_checked: bool,
    chunk_key: Option<(i32, i32)>,
    chunk: Option<&'a dyn Chunk>,
    last: Option<VoxelShape>,
}

impl<'a> BlockCollisionSweeper<'a> {
    /// Prepares a sweep of the cells overlapped by `aabb`.
    ///
    /// No grid access happens until the first pull.
    pub fn new(view: &'a dyn BlockView, body: Option<&'a dyn Body>, aabb: Aabb) -> Self {
        // Empty box never collides: an inverted range exhausts immediately
        // and the border check is marked as already done.
        let degenerate = super::aabb_is_empty(&aabb);

        let (min, max) = if degenerate {
            (BlockPos::new(0, 0, 0), BlockPos::new(-1, -1, -1))
        } else {
            (
                BlockPos::new(
                    cell_below(aabb.mins.x) - 1,
                    cell_below(aabb.mins.y) - 1,
                    cell_below(aabb.mins.z) - 1,
                ),
                BlockPos::new(
                    cell_above(aabb.maxs.x) + 1,
                    cell_above(aabb.maxs.y) + 1,
                    cell_above(aabb.maxs.z) + 1,
                ),
            )
        };

        BlockCollisionSweeper {
            view,
            body,
            aabb,
            min,
            max,
            pos: min,
            started: false,
            border_checked: degenerate,
            chunk_key: None,
            chunk: None,
            last: None,
        }
    }

    /// The most recently produced collision shape.
    ///
    /// Valid only after at least one pull; lets callers that stopped after
    /// the existence check recover the shape without re-sweeping.
    #[inline]
    pub fn last_collision(&self) -> Option<&VoxelShape> {
        self.last.as_ref()
    }

    /// Drains the sweep into an ordered list of collision shapes.
    pub fn collect_all(self) -> Vec<VoxelShape> {
        self.collect()
    }

    fn border_collision(&self) -> Option<VoxelShape> {
        let body = self.body?;
        let border = self.view.world_border();

        if !aabb_is_within_border(border, &self.aabb)
            && aabb_is_within_border(border, &body.bounding_box())
        {
            return Some(border.as_shape());
        }

        None
    }

    /// Steps the cell cursor; returns `false` once the range is exhausted.
    fn advance(&mut self) -> bool {
        if !self.started {
            self.started = true;
            self.pos = self.min;
            return self.min.x <= self.max.x
                && self.min.y <= self.max.y
                && self.min.z <= self.max.z;
        }

        self.pos.y += 1;
        if self.pos.y > self.max.y {
            self.pos.y = self.min.y;
            self.pos.z += 1;
            if self.pos.z > self.max.z {
                self.pos.z = self.min.z;
                self.pos.x += 1;
                if self.pos.x > self.max.x {
                    return false;
                }
            }
        }

        true
    }

    fn chunk_containing(&mut self, x: i32, z: i32) -> Option<&'a dyn Chunk> {
        let key = (chunk_coord(x), chunk_coord(z));
        if self.chunk_key != Some(key) {
            self.chunk_key = Some(key);
            self.chunk = self.view.chunk_at(key.0, key.1);
        }

        self.chunk
    }

    /// Is the cursor on the one-cell ring beyond the box's own cells?
    fn on_outer_ring(&self, pos: BlockPos) -> bool {
        pos.x == self.min.x
            || pos.x == self.max.x
            || pos.y == self.min.y
            || pos.y == self.max.y
            || pos.z == self.min.z
            || pos.z == self.max.z
    }
}

impl Iterator for BlockCollisionSweeper<'_> {
    type Item = VoxelShape;

    fn next(&mut self) -> Option<VoxelShape> {
        if !self.border_checked {
            self.border_checked = true;
            if let Some(shape) = self.border_collision() {
                self.last = Some(shape.clone());
                return Some(shape);
            }
        }

        while self.advance() {
            let pos = self.pos;

            if self.view.is_out_of_height_limit(pos.y) {
                continue;
            }

            let Some(chunk) = self.chunk_containing(pos.x, pos.z) else {
                continue;
            };

            let shape = chunk.block_collision_shape(pos, self.body);
            if shape.is_empty() {
                continue;
            }

            if self.on_outer_ring(pos) && !shape.exceeds_unit_cell() {
                continue;
            }

            let shape = shape.translated(&Vector::new(
                pos.x as Real,
                pos.y as Real,
                pos.z as Real,
            ));

            if shape.intersects_aabb(&self.aabb) {
                self.last = Some(shape.clone());
                return Some(shape);
            }
        }

        None
    }
}

/// The lowest cell a coordinate may interact with, epsilon-shifted so a bound
/// sitting exactly on a cell edge still counts the cell it touches.
#[inline]
fn cell_below(coord: Real) -> i32 {
    (coord - EPSILON).floor() as i32
}

/// The highest cell a coordinate may interact with.
#[inline]
fn cell_above(coord: Real) -> i32 {
    (coord + EPSILON).floor() as i32
}
