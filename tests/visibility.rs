#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use tilecast::math::Point2;
use tilecast::operations::build::{BuildSegments, Traversal};
use tilecast::operations::query::{intersect, BoundaryEdges, HitPolicy};
use tilecast::{GridLayout, Ray, Raycaster, Scene, Segment, SegmentStore, Tile, TileGrid};

const ARENA: &str = "
    ########
    #.#....#
    #.#....#
    #.#....#
    #......#
    #....#.#
    #......#
    ########
";

fn arena() -> TileGrid {
    let layout = GridLayout::square(8, 8, 32.0)
        .unwrap()
        .centered_in(1024.0, 512.0)
        .unwrap();
    let parsed = TileGrid::parse(ARENA, 32.0, 32.0).unwrap();
    TileGrid::new(layout, parsed.tiles().to_vec()).unwrap()
}

fn sorted(store: &SegmentStore) -> Vec<(f64, f64, f64, f64)> {
    let mut keys: Vec<_> = store
        .segments()
        .iter()
        .map(|s| (s.start.x, s.start.y, s.end.x, s.end.y))
        .collect();
    keys.sort_by(|a, b| a.partial_cmp(b).unwrap());
    keys
}

/// Seeded random wall patterns, roughly one wall in three tiles.
fn patterns(count: usize, rows: u32, cols: u32) -> Vec<TileGrid> {
    let mut rng = Xoshiro256Plus::seed_from_u64(0);
    (0..count)
        .map(|_| {
            let tiles = (0..rows * cols)
                .map(|_| {
                    if rng.random_bool(1.0 / 3.0) {
                        Tile::Wall
                    } else {
                        Tile::Open
                    }
                })
                .collect();
            TileGrid::new(GridLayout::square(rows, cols, 8.0).unwrap(), tiles).unwrap()
        })
        .collect()
}

#[test]
fn no_walls_no_segments() {
    let grid = TileGrid::new(GridLayout::square(5, 7, 1.0).unwrap(), vec![Tile::Open; 35]).unwrap();
    assert!(BuildSegments::new().execute(&grid).unwrap().is_empty());
}

#[test]
fn border_ring_merges_each_side() {
    for (rows, cols) in [(3_u32, 3_u32), (4, 9), (12, 5)] {
        let tiles = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| (x, y)))
            .map(|(x, y)| {
                if x == 0 || y == 0 || x == cols - 1 || y == rows - 1 {
                    Tile::Wall
                } else {
                    Tile::Open
                }
            })
            .collect();
        let grid = TileGrid::new(GridLayout::square(rows, cols, 1.0).unwrap(), tiles).unwrap();
        let store = BuildSegments::new().execute(&grid).unwrap();

        // One run per outer side and one per inner side, whatever the size.
        assert_eq!(store.len(), 8);
        let (w, h) = (f64::from(cols), f64::from(rows));
        let outer = [
            Segment::new(Point2::new(0.0, 0.0), Point2::new(w, 0.0)),
            Segment::new(Point2::new(w, 0.0), Point2::new(w, h)),
            Segment::new(Point2::new(0.0, h), Point2::new(w, h)),
            Segment::new(Point2::new(0.0, 0.0), Point2::new(0.0, h)),
        ];
        for side in &outer {
            assert!(store.segments().contains(side), "missing {side:?}");
        }
    }
}

#[test]
fn isolated_wall_has_four_unit_segments() {
    let grid = TileGrid::parse(".....\n.....\n..#..\n.....", 1.0, 1.0).unwrap();
    let store = BuildSegments::new().execute(&grid).unwrap();
    assert_eq!(store.len(), 4);
    for (_, segment) in store.iter() {
        assert_relative_eq!(segment.length(), 1.0);
    }
}

#[test]
fn arena_segments() {
    let store = BuildSegments::new().execute(&arena()).unwrap();
    assert_eq!(store.len(), 16);
    // The interior pillar splits the inner face of the top wall in two.
    assert!(store
        .segments()
        .contains(&Segment::new(Point2::new(32.0, 32.0), Point2::new(64.0, 32.0))));
    assert!(store
        .segments()
        .contains(&Segment::new(Point2::new(96.0, 32.0), Point2::new(224.0, 32.0))));
}

#[test]
fn traversal_order_keeps_minimal_set() {
    let mut grids = patterns(20, 6, 9);
    grids.push(arena());
    for grid in &grids {
        let rows = BuildSegments::new().execute(grid).unwrap();
        let cols = BuildSegments::new()
            .with_traversal(Traversal::ColumnMajor)
            .execute(grid)
            .unwrap();
        assert_eq!(sorted(&rows), sorted(&cols));
    }
}

#[test]
fn boundary_round_trip() {
    let mut grids = patterns(50, 7, 11);
    grids.push(arena());
    for grid in &grids {
        let store = BuildSegments::new().execute_world(grid).unwrap();
        let recovered = BoundaryEdges::from_segments(&store, grid).unwrap();
        assert_eq!(recovered, BoundaryEdges::from_grid(grid));
        assert_eq!(recovered.reconstruct_walls(grid.rows(), grid.cols()), grid.tiles());
    }
}

#[test]
fn ray_scenarios() {
    let ray = Ray::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));

    let ahead = Segment::new(Point2::new(5.0, -5.0), Point2::new(5.0, 5.0));
    let hit = intersect(&ray, &ahead).unwrap();
    assert_relative_eq!(hit.x, 5.0);
    assert_relative_eq!(hit.y, 0.0);

    let behind = Segment::new(Point2::new(-5.0, -5.0), Point2::new(-5.0, 5.0));
    assert!(intersect(&ray, &behind).is_none());

    let collinear = Segment::new(Point2::new(1.0, 0.0), Point2::new(4.0, 0.0));
    assert!(intersect(&ray, &collinear).is_none());
}

#[test]
fn segment_reversal_symmetry() {
    let store = BuildSegments::new().execute_world(&arena()).unwrap();
    let ray = Ray::new(Point2::new(512.0, 256.0), Point2::new(700.0, 140.0));
    for (_, segment) in store.iter() {
        let a = intersect(&ray, segment);
        let b = intersect(&ray, &segment.reversed());
        assert_eq!(a.is_some(), b.is_some());
        if let (Some(a), Some(b)) = (a, b) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        }
    }
}

#[test]
fn arena_frame_from_canvas_center() {
    // Caster at the canvas center looking right, as in the demo.
    let caster = Raycaster::new(Point2::new(512.0, 256.0), Point2::new(522.0, 256.0));
    let mut scene = Scene::new(arena(), caster).unwrap();

    // Row y=256 sits on the line between tile rows 3 and 4; pick a
    // direction that avoids grid corners.
    scene.aim(Point2::new(600.0, 250.0));
    let all = scene.frame();
    assert!(all.len() >= 2, "hits: {all:?}");
    for hit in &all {
        assert!(hit.u > 0.0 && hit.t > 0.0 && hit.t < 1.0);
    }

    let nearest = scene.clone().with_policy(HitPolicy::Nearest).frame();
    assert_eq!(nearest.len(), 1);
    let min_u = all.iter().map(|h| h.u).fold(f64::INFINITY, f64::min);
    assert_relative_eq!(nearest[0].u, min_u);
}
