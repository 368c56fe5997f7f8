use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_unknown_point, tile_regions, Cell, Field, HuntStrategy, Point, SearchStrategy,
};

#[test]
fn test_tiling_partitions_the_board() {
    for region_size in [2, 3, 4] {
        for seed in 0..20u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let regions = tile_regions(10, region_size, &mut rng);
            for y in 1..=10 {
                for x in 1..=10 {
                    let point = Point::new(x, y);
                    let covering = regions.iter().filter(|r| r.contains(point)).count();
                    assert_eq!(covering, 1, "cell ({}, {}) covered {} times", x, y, covering);
                }
            }
            for region in &regions {
                assert!(region.width() <= region_size);
                assert!(region.height() <= region_size);
            }
        }
    }
}

#[test]
fn test_search_pattern_density() {
    for region_size in [2, 3, 4] {
        for seed in 0..20u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let strategy = SearchStrategy::new(10, region_size, &mut rng);
            assert!(
                strategy.remaining().len() >= 100 / (region_size * region_size),
                "region size {} produced only {} points",
                region_size,
                strategy.remaining().len()
            );
        }
    }
}

#[test]
fn test_one_selected_point_per_region_row() {
    for region_size in [2, 3, 4] {
        for seed in 0..20u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let strategy = SearchStrategy::new(10, region_size, &mut rng);
            for region in strategy.regions() {
                for y in region.start_y..=region.end_y {
                    let in_row = strategy
                        .remaining()
                        .iter()
                        .filter(|p| p.y == y && region.contains(**p))
                        .count();
                    assert!(in_row <= 1);
                }
            }
        }
    }
}

/// No scan line may carry a run of more than `region_size` consecutive
/// selected cells; otherwise the pattern would over-sample one line instead
/// of spreading across the region.
#[test]
fn test_no_long_runs_on_a_scan_line() {
    for region_size in [2, 3, 4usize] {
        for seed in 0..20u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let strategy = SearchStrategy::new(10, region_size, &mut rng);
            for y in 1..=10usize {
                let selected: Vec<usize> = strategy
                    .remaining()
                    .iter()
                    .filter(|p| p.y == y)
                    .map(|p| p.x)
                    .collect();
                for start in 1..=(10 - region_size) {
                    let run_len = (start..=start + region_size)
                        .filter(|x| selected.contains(x))
                        .count();
                    assert!(run_len <= region_size);
                }
            }
        }
    }
}

#[test]
fn test_shoot_point_pops_from_the_end() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut strategy = SearchStrategy::new(10, 4, &mut rng);
    let total = strategy.remaining().len();
    let expected = *strategy.remaining().last().unwrap();
    assert_eq!(strategy.shoot_point(), Some(expected));
    assert_eq!(strategy.remaining().len(), total - 1);

    for _ in 0..total - 1 {
        assert!(strategy.shoot_point().is_some());
    }
    assert_eq!(strategy.shoot_point(), None);
}

#[test]
fn test_hunt_first_point_enqueues_orthogonal_neighbors() {
    let mut hunt = HuntStrategy::new();
    hunt.add_ship_point(Point::new(5, 5));
    assert_eq!(hunt.ship_len(), 1);
    let candidates = hunt.candidates().to_vec();
    assert_eq!(candidates.len(), 4);
    for expected in [
        Point::new(6, 5),
        Point::new(4, 5),
        Point::new(5, 6),
        Point::new(5, 4),
    ] {
        assert!(candidates.contains(&expected));
    }
}

#[test]
fn test_hunt_locks_onto_a_column() {
    let mut hunt = HuntStrategy::new();
    hunt.add_ship_point(Point::new(5, 5));
    hunt.add_ship_point(Point::new(5, 6));
    assert_eq!(hunt.ship_len(), 2);
    // both points share x, so every surviving candidate must too
    assert!(!hunt.candidates().is_empty());
    assert!(hunt.candidates().iter().all(|p| p.x == 5));
    assert!(hunt.candidates().contains(&Point::new(5, 4)));
    assert!(hunt.candidates().contains(&Point::new(5, 7)));
}

#[test]
fn test_hunt_locks_onto_a_row() {
    let mut hunt = HuntStrategy::new();
    hunt.add_ship_point(Point::new(3, 5));
    hunt.add_ship_point(Point::new(4, 5));
    hunt.add_ship_point(Point::new(5, 5));
    assert!(hunt.candidates().iter().all(|p| p.y == 5));
    assert!(hunt.candidates().contains(&Point::new(2, 5)));
    assert!(hunt.candidates().contains(&Point::new(6, 5)));
}

#[test]
fn test_hunt_perimeter_excludes_the_ship_itself() {
    let mut hunt = HuntStrategy::new();
    hunt.add_ship_point(Point::new(5, 5));
    hunt.add_ship_point(Point::new(5, 6));

    let perimeter = hunt.nearby_ship_points();
    // a vertical two-decker is ringed by exactly 10 cells
    assert_eq!(perimeter.len(), 10);
    assert!(!perimeter.contains(&Point::new(5, 5)));
    assert!(!perimeter.contains(&Point::new(5, 6)));
    for expected in [
        Point::new(4, 4),
        Point::new(5, 4),
        Point::new(6, 4),
        Point::new(4, 5),
        Point::new(6, 5),
        Point::new(4, 6),
        Point::new(6, 6),
        Point::new(4, 7),
        Point::new(5, 7),
        Point::new(6, 7),
    ] {
        assert!(perimeter.contains(&expected), "missing {:?}", expected);
    }
}

#[test]
fn test_hunt_candidates_at_the_edge_may_leave_the_board() {
    let mut hunt = HuntStrategy::new();
    hunt.add_ship_point(Point::new(1, 1));
    // candidates with a zero coordinate are rejected later by to_index
    assert!(hunt.candidates().contains(&Point::new(0, 1)));
    assert!(hunt.candidates().contains(&Point::new(1, 0)));
}

#[test]
fn test_random_fallback_picks_the_only_unknown_cell() {
    let mut cells = vec![Cell::Miss; 100];
    cells[4 * 10 + 6] = Cell::Empty; // (7, 5)
    let field = Field::from_cells(10, cells).unwrap();

    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        random_unknown_point(&field, &mut rng),
        Some(Point::new(7, 5))
    );
}

#[test]
fn test_random_fallback_on_fully_known_board() {
    let field = Field::from_cells(10, vec![Cell::Miss; 100]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(random_unknown_point(&field, &mut rng), None);
}
