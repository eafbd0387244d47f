mod common;

use common::{aabb, GridWorld, TestBody};
use voxphase::query::{aabb_is_within_border, border_collision_shape, box_collides_with_border};
use voxphase::world::{BlockView, Body, WorldBorder};

#[test]
fn box_crossing_the_western_bound_collides() {
    let border = WorldBorder::new(0.0, 16.0, 0.0, 16.0);
    let world = GridWorld::with_border(border);
    let crossing = aabb([-1.0, 0.0, -1.0], [1.0, 1.0, 1.0]);

    assert!(!aabb_is_within_border(&border, &crossing));
    assert!(box_collides_with_border(&world, None, &crossing));
}

#[test]
fn box_well_inside_the_border_takes_the_cheap_path() {
    let border = WorldBorder::new(0.0, 16.0, 0.0, 16.0);
    let world = GridWorld::with_border(border);
    let inside = aabb([4.0, 0.0, 4.0], [5.0, 1.0, 5.0]);

    assert!(aabb_is_within_border(&border, &inside));
    assert!(!box_collides_with_border(&world, None, &inside));
}

#[test]
fn touching_a_border_edge_still_counts_as_within() {
    let border = WorldBorder::new(0.0, 16.0, 0.0, 16.0);
    let touching = aabb([0.0, 0.0, 0.0], [16.0, 1.0, 16.0]);

    assert!(aabb_is_within_border(&border, &touching));
}

#[test]
fn rounded_test_agrees_with_the_exact_test_on_grid_aligned_boxes() {
    // Integer border bounds and integer box bounds: the outward rounding is
    // the identity and both tests must agree everywhere.
    let border = WorldBorder::new(0.0, 16.0, 0.0, 16.0);

    for x in -2..18 {
        for z in -2..18 {
            let cell = aabb(
                [f64::from(x), 0.0, f64::from(z)],
                [f64::from(x + 1), 1.0, f64::from(z + 1)],
            );
            assert_eq!(
                aabb_is_within_border(&border, &cell),
                border.contains_aabb(&cell),
                "disagreement at cell ({x}, {z})"
            );
        }
    }
}

#[test]
fn rounded_test_only_errs_in_the_outward_direction() {
    // Fractional border bounds and random fractional boxes: whenever the
    // exact test says "inside", the rounded test must agree. (The converse
    // may fail by up to one grid unit; that approximation is intentional.)
    let border = WorldBorder::new(0.3, 15.7, -3.9, 12.2);
    let mut rng = oorandom::Rand64::new(0xdecafbad);

    for _ in 0..1000 {
        let min_x = rng.rand_float() * 40.0 - 10.0;
        let min_z = rng.rand_float() * 40.0 - 10.0;
        let extent_x = rng.rand_float() * 4.0;
        let extent_z = rng.rand_float() * 4.0;
        let candidate = aabb(
            [min_x, 0.0, min_z],
            [min_x + extent_x, 1.0, min_z + extent_z],
        );

        if border.contains_aabb(&candidate) {
            assert!(
                aabb_is_within_border(&border, &candidate),
                "rounded test reported outside for a box exactly inside: {candidate:?}"
            );
        }
    }
}

#[test]
fn border_shape_is_gated_by_the_host_predicate() {
    struct DeadBorderWorld {
        inner: GridWorld,
    }

    impl BlockView for DeadBorderWorld {
        fn chunk_at(
            &self,
            chunk_x: i32,
            chunk_z: i32,
        ) -> Option<&dyn voxphase::world::Chunk> {
            self.inner.chunk_at(chunk_x, chunk_z)
        }

        fn is_out_of_height_limit(&self, y: i32) -> bool {
            self.inner.is_out_of_height_limit(y)
        }

        fn world_border(&self) -> &WorldBorder {
            self.inner.world_border()
        }

        fn border_can_collide(
            &self,
            _body: Option<&dyn Body>,
            _aabb: &voxphase::bounding_volume::Aabb,
        ) -> bool {
            false
        }
    }

    let border = WorldBorder::new(0.0, 16.0, 0.0, 16.0);
    let world = DeadBorderWorld {
        inner: GridWorld::with_border(border),
    };
    let crossing = aabb([-1.0, 0.0, 4.0], [1.0, 1.0, 5.0]);

    assert_eq!(border_collision_shape(&world, None, &crossing), None);
    assert!(!box_collides_with_border(&world, None, &crossing));

    let excluded = TestBody::at(aabb([4.0, 0.0, 4.0], [5.0, 1.0, 5.0]));
    assert!(!box_collides_with_border(&world, Some(&excluded), &crossing));
}

#[test]
fn border_shape_covers_exactly_the_outside() {
    let border = WorldBorder::new(0.0, 16.0, 0.0, 16.0);
    let shape = border.as_shape();

    assert!(!shape.intersects_aabb(&aabb([4.0, 0.0, 4.0], [5.0, 1.0, 5.0])));
    assert!(shape.intersects_aabb(&aabb([-1.0, 0.0, 4.0], [0.5, 1.0, 5.0])));
    assert!(shape.intersects_aabb(&aabb([4.0, 0.0, 16.5], [5.0, 1.0, 17.5])));
    // Touching the boundary plane from the inside is not a collision.
    assert!(!shape.intersects_aabb(&aabb([15.0, 0.0, 4.0], [16.0, 1.0, 5.0])));
}
