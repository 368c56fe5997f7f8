use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Cell, Field, Point, DEFAULT_SHIPS};

/// Orthogonally connected components of ship cells, i.e. the ships.
fn ships_on(field: &Field) -> Vec<Vec<Point>> {
    let size = field.size();
    let at = |x: usize, y: usize| field.cells()[(y - 1) * size + (x - 1)];

    let mut seen = vec![false; size * size];
    let mut ships = Vec::new();
    for y in 1..=size {
        for x in 1..=size {
            if at(x, y) != Cell::Ship || seen[(y - 1) * size + (x - 1)] {
                continue;
            }
            let mut ship = Vec::new();
            let mut stack = vec![Point::new(x, y)];
            while let Some(point) = stack.pop() {
                let index = (point.y - 1) * size + (point.x - 1);
                if seen[index] {
                    continue;
                }
                seen[index] = true;
                ship.push(point);
                for neighbor in point.orthogonal_neighbors() {
                    if neighbor.x >= 1
                        && neighbor.y >= 1
                        && neighbor.x <= size
                        && neighbor.y <= size
                        && at(neighbor.x, neighbor.y) == Cell::Ship
                    {
                        stack.push(neighbor);
                    }
                }
            }
            ships.push(ship);
        }
    }
    ships
}

fn diagonally_adjacent(a: &[Point], b: &[Point]) -> bool {
    a.iter().any(|p| {
        b.iter()
            .any(|q| p.x.abs_diff(q.x) <= 1 && p.y.abs_diff(q.y) <= 1)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_fleet_is_complete_and_buffered(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = Field::generate(10, &DEFAULT_SHIPS, &mut rng).unwrap();

        // no placement buffer survives
        prop_assert!(field.cells().iter().all(|&c| c != Cell::Blocked));

        let ship_cells = field.cells().iter().filter(|&&c| c == Cell::Ship).count();
        prop_assert_eq!(ship_cells, DEFAULT_SHIPS.iter().sum::<usize>());

        let ships = ships_on(&field);

        // the inventory is exactly reproduced
        let mut lengths: Vec<usize> = ships.iter().map(|s| s.len()).collect();
        lengths.sort_unstable();
        let mut expected = DEFAULT_SHIPS.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(lengths, expected);

        // every ship is a straight line
        for ship in &ships {
            let straight = ship.iter().all(|p| p.x == ship[0].x)
                || ship.iter().all(|p| p.y == ship[0].y);
            prop_assert!(straight, "ship is not a line: {:?}", ship);
        }

        // no two ships touch, not even diagonally
        for (i, a) in ships.iter().enumerate() {
            for b in ships.iter().skip(i + 1) {
                prop_assert!(!diagonally_adjacent(a, b), "{:?} touches {:?}", a, b);
            }
        }
    }

    #[test]
    fn smaller_boards_place_a_reduced_fleet(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ships = [3, 2, 1];
        let field = Field::generate(6, &ships, &mut rng).unwrap();
        let ship_cells = field.cells().iter().filter(|&&c| c == Cell::Ship).count();
        prop_assert_eq!(ship_cells, 6);
        prop_assert_eq!(ships_on(&field).len(), 3);
    }
}
