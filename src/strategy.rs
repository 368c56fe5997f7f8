//! Targeting strategies: region-tiled sparse search, the damaged-ship hunt,
//! and the uniform-random fallback.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::common::Cell;
use crate::field::Field;
use crate::geometry::{to_position, Point, Region};

/// Which targeting behavior is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Sparse search pattern sized to deckers of `region_size`.
    Search { region_size: usize },
    /// Uniform-random over unknown cells.
    Random,
}

fn axis_segments<R: Rng>(size: usize, region_size: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let remainder = size % region_size;
    let start = rng.random_range(1..=remainder + 1);
    let mut segments = Vec::new();
    if start > 1 {
        segments.push((1, start - 1));
    }
    let mut coord = start;
    while coord <= size {
        segments.push((coord, (coord + region_size - 1).min(size)));
        coord += region_size;
    }
    segments
}

/// Tile the board into rectangles of at most `region_size` per side: an
/// optional short leading segment on each axis, then full-length segments.
/// The random start offset shifts the grid between games, which is what
/// keeps the resulting search pattern unpredictable.
pub fn tile_regions<R: Rng>(size: usize, region_size: usize, rng: &mut R) -> Vec<Region> {
    let x_segments = axis_segments(size, region_size, rng);
    let y_segments = axis_segments(size, region_size, rng);

    let mut regions = Vec::with_capacity(x_segments.len() * y_segments.len());
    for &(start_x, end_x) in &x_segments {
        for &(start_y, end_y) in &y_segments {
            regions.push(Region {
                start_x,
                start_y,
                end_x,
                end_y,
            });
        }
    }
    regions
}

/// Exhaustive sparse search pattern sized to the hunted decker class.
///
/// Every region projects one random R×R permutation matrix, so each region
/// row holds at most one selected column. Any straight run of `region_size`
/// cells inside a region must cross a selected cell, which is what makes
/// the pattern exhaustive for ships of that length.
#[derive(Debug, Clone)]
pub struct SearchStrategy {
    region_size: usize,
    regions: Vec<Region>,
    queue: Vec<Point>,
}

impl SearchStrategy {
    pub fn new<R: Rng>(size: usize, region_size: usize, rng: &mut R) -> Self {
        let regions = tile_regions(size, region_size, rng);

        // Random bijection row → selected column.
        let mut selected_column: Vec<usize> = (0..region_size).collect();
        selected_column.shuffle(rng);

        let mut queue = Vec::new();
        for region in &regions {
            for x in region.start_x..=region.end_x {
                let local_x = x - region.start_x;
                for y in region.start_y..=region.end_y {
                    let local_y = y - region.start_y;
                    if selected_column[local_y] == local_x {
                        queue.push(Point::new(x, y));
                    }
                }
            }
        }
        SearchStrategy {
            region_size,
            regions,
            queue,
        }
    }

    pub fn region_size(&self) -> usize {
        self.region_size
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Untried points, in pop order (the last entry is next).
    pub fn remaining(&self) -> &[Point] {
        &self.queue
    }

    /// Remove and return the next point, `None` once the pattern is spent.
    pub fn shoot_point(&mut self) -> Option<Point> {
        self.queue.pop()
    }
}

/// The line a damaged ship is locked to once two of its cells are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// All points share this x.
    Column(usize),
    /// All points share this y.
    Row(usize),
}

impl Axis {
    fn admits(&self, point: Point) -> bool {
        match *self {
            Axis::Column(x) => point.x == x,
            Axis::Row(y) => point.y == y,
        }
    }
}

/// Follow-up targeting for the ship currently under attack.
///
/// Accumulates confirmed ship points; the first one enqueues its orthogonal
/// neighbors, the second locks the ship's axis and discards candidates off
/// that line. Created on the first hit of a fresh ship, dropped on the kill.
#[derive(Debug, Clone, Default)]
pub struct HuntStrategy {
    ship: Vec<Point>,
    queue: Vec<Point>,
    axis: Option<Axis>,
}

impl HuntStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cells confirmed to belong to the hunted ship so far.
    pub fn ship_len(&self) -> usize {
        self.ship.len()
    }

    /// Untried candidate points, in pop order.
    pub fn candidates(&self) -> &[Point] {
        &self.queue
    }

    pub fn add_ship_point(&mut self, point: Point) {
        self.ship.push(point);
        self.queue.extend(point.orthogonal_neighbors());
        if self.ship.len() < 2 {
            return;
        }
        let axis = *self.axis.get_or_insert_with(|| {
            let (first, second) = (self.ship[0], self.ship[1]);
            if first.x == second.x {
                Axis::Column(first.x)
            } else {
                Axis::Row(first.y)
            }
        });
        self.queue.retain(|candidate| axis.admits(*candidate));
    }

    /// Remove and return the next candidate. Exhaustion is legitimate here:
    /// the last candidate may be the kill shot itself.
    pub fn shoot_point(&mut self) -> Option<Point> {
        self.queue.pop()
    }

    /// The full perimeter of the hunted ship: orthogonal and diagonal
    /// neighbors of every confirmed point, minus the ship itself. Once the
    /// ship is dead this whole ring is known water, since no other ship may
    /// touch it.
    pub fn nearby_ship_points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for ship_point in &self.ship {
            let neighbors = ship_point
                .orthogonal_neighbors()
                .into_iter()
                .chain(ship_point.diagonal_neighbors());
            for neighbor in neighbors {
                if !self.ship.contains(&neighbor) && !points.contains(&neighbor) {
                    points.push(neighbor);
                }
            }
        }
        points
    }
}

/// Uniform-random pick among the unknown cells of the inferred enemy field.
/// Used once every sized pattern is spent, for hunting the one-deckers.
pub fn random_unknown_point<R: Rng>(enemy_field: &Field, rng: &mut R) -> Option<Point> {
    let unknown: Vec<usize> = enemy_field
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, &cell)| cell == Cell::Empty)
        .map(|(index, _)| index)
        .collect();
    unknown
        .choose(rng)
        .map(|&index| to_position(enemy_field.size(), index))
}
