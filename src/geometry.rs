//! Board geometry: 1-based coordinates, linear indexing, and the
//! rectangular regions used by the search pattern.

use crate::common::GameError;

/// A 1-based board coordinate. `(1, 1)` is the top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }

    /// The four orthogonal neighbors. Results may leave the board;
    /// `to_index` rejects those when they are consumed.
    pub fn orthogonal_neighbors(&self) -> [Point; 4] {
        [
            Point::new(self.x + 1, self.y),
            Point::new(self.x.wrapping_sub(1), self.y),
            Point::new(self.x, self.y + 1),
            Point::new(self.x, self.y.wrapping_sub(1)),
        ]
    }

    /// The four diagonal neighbors, with the same out-of-board caveat.
    pub fn diagonal_neighbors(&self) -> [Point; 4] {
        [
            Point::new(self.x + 1, self.y + 1),
            Point::new(self.x.wrapping_sub(1), self.y.wrapping_sub(1)),
            Point::new(self.x.wrapping_sub(1), self.y + 1),
            Point::new(self.x + 1, self.y.wrapping_sub(1)),
        ]
    }
}

/// Inclusive rectangle produced by the region tiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start_x: usize,
    pub start_y: usize,
    pub end_x: usize,
    pub end_y: usize,
}

impl Region {
    pub fn contains(&self, point: Point) -> bool {
        (self.start_x..=self.end_x).contains(&point.x)
            && (self.start_y..=self.end_y).contains(&point.y)
    }

    pub fn width(&self) -> usize {
        self.end_x - self.start_x + 1
    }

    pub fn height(&self) -> usize {
        self.end_y - self.start_y + 1
    }
}

/// Convert a coordinate to its row-major index. Fails with `OutOfRange`
/// for any coordinate outside `1..=size`; zero encodes "below the board"
/// since coordinates are unsigned.
pub fn to_index(size: usize, point: Point) -> Result<usize, GameError> {
    if point.x == 0 || point.y == 0 || point.x > size || point.y > size {
        return Err(GameError::OutOfRange {
            x: point.x,
            y: point.y,
        });
    }
    Ok((point.y - 1) * size + (point.x - 1))
}

/// Convert a row-major index back to a coordinate. Total over `0..size²`.
pub fn to_position(size: usize, index: usize) -> Point {
    Point::new(index % size + 1, index / size + 1)
}
