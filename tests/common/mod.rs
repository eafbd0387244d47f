#![allow(dead_code)]

use std::collections::HashMap;

use voxphase::bounding_volume::Aabb;
use voxphase::math::{Point, Real};
use voxphase::shape::VoxelShape;
use voxphase::world::{chunk_coord, BlockPos, BlockView, Body, BodyIndex, Chunk, WorldBorder};

pub fn aabb(mins: [Real; 3], maxs: [Real; 3]) -> Aabb {
    Aabb::new(
        Point::new(mins[0], mins[1], mins[2]),
        Point::new(maxs[0], maxs[1], maxs[2]),
    )
}

/// A full-cube block shape in block-local coordinates.
pub fn full_cube() -> VoxelShape {
    VoxelShape::cuboid(aabb([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]))
}

pub struct TestBody {
    pub aabb: Aabb,
    pub collidable: bool,
    /// A body that phases through everything, e.g. a rider relative to its
    /// mount.
    pub phases_through: bool,
    pub support: Option<VoxelShape>,
}

impl TestBody {
    pub fn at(aabb: Aabb) -> Self {
        TestBody {
            aabb,
            collidable: false,
            phases_through: false,
            support: None,
        }
    }

    pub fn hard(aabb: Aabb) -> Self {
        TestBody {
            collidable: true,
            ..Self::at(aabb)
        }
    }
}

impl Body for TestBody {
    fn bounding_box(&self) -> Aabb {
        self.aabb
    }

    fn is_collidable(&self) -> bool {
        self.collidable
    }

    fn collides_with(&self, other: &dyn Body) -> bool {
        !self.phases_through && other.is_collidable()
    }

    fn cached_support_shape(&self) -> Option<VoxelShape> {
        self.support.clone()
    }
}

#[derive(Default)]
pub struct GridChunk {
    blocks: HashMap<BlockPos, VoxelShape>,
}

impl Chunk for GridChunk {
    fn block_collision_shape(&self, pos: BlockPos, _context: Option<&dyn Body>) -> VoxelShape {
        self.blocks.get(&pos).cloned().unwrap_or(VoxelShape::Empty)
    }
}

/// A hash-map backed world: chunked block storage, height limits, border.
pub struct GridWorld {
    chunks: HashMap<(i32, i32), GridChunk>,
    pub border: WorldBorder,
    pub min_y: i32,
    pub max_y: i32,
}

impl GridWorld {
    pub fn new() -> Self {
        GridWorld {
            chunks: HashMap::new(),
            border: WorldBorder::new(-3.0e7, 3.0e7, -3.0e7, 3.0e7),
            min_y: -64,
            max_y: 320,
        }
    }

    pub fn with_border(border: WorldBorder) -> Self {
        GridWorld {
            border,
            ..Self::new()
        }
    }

    /// Places a block with the given block-local shape. The chunk containing
    /// it is created on demand; all other chunks stay absent.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, shape: VoxelShape) {
        let chunk = self
            .chunks
            .entry((chunk_coord(x), chunk_coord(z)))
            .or_default();
        let _ = chunk.blocks.insert(BlockPos::new(x, y, z), shape);
    }

    pub fn set_cube(&mut self, x: i32, y: i32, z: i32) {
        self.set_block(x, y, z, full_cube());
    }
}

impl BlockView for GridWorld {
    fn chunk_at(&self, chunk_x: i32, chunk_z: i32) -> Option<&dyn Chunk> {
        self.chunks
            .get(&(chunk_x, chunk_z))
            .map(|chunk| chunk as &dyn Chunk)
    }

    fn is_out_of_height_limit(&self, y: i32) -> bool {
        y < self.min_y || y > self.max_y
    }

    fn world_border(&self) -> &WorldBorder {
        &self.border
    }
}

/// A brute-force spatial index over a fixed list of bodies.
pub struct BodyList<'a> {
    pub bodies: Vec<&'a dyn Body>,
}

impl<'a> BodyList<'a> {
    pub fn new(bodies: Vec<&'a dyn Body>) -> Self {
        BodyList { bodies }
    }
}

impl BodyIndex for BodyList<'_> {
    fn bodies_overlapping<'a>(
        &'a self,
        aabb: &Aabb,
        exclude: Option<&dyn Body>,
    ) -> Vec<&'a dyn Body> {
        self.bodies
            .iter()
            .copied()
            .filter(|body| {
                let excluded = exclude.is_some_and(|e| {
                    std::ptr::eq(
                        (*body as *const dyn Body).cast::<u8>(),
                        (e as *const dyn Body).cast::<u8>(),
                    )
                });
                !excluded && body.bounding_box().intersects(aabb)
            })
            .collect()
    }
}
