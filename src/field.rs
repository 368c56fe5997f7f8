//! Board state: ship placement and shot resolution on a flat cell grid.

use core::fmt;
use rand::Rng;

use crate::common::{Cell, GameError, ShotOutcome};
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::geometry::{to_index, to_position, Point};

/// A flat row-major grid of cells plus its edge length. Used both for the
/// player's own board and for the inferred state of the enemy board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    size: usize,
    cells: Vec<Cell>,
}

impl Field {
    /// An all-water field.
    pub fn empty(size: usize) -> Self {
        Field {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Wrap a precomputed cell array. Only the length is validated; the
    /// caller is responsible for the layout being sensible.
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GameError> {
        if cells.len() != size * size {
            return Err(GameError::Config("field must hold exactly size² cells"));
        }
        Ok(Field { size, cells })
    }

    /// Place a whole ship inventory at random, then clear the placement
    /// buffer so no `Blocked` cell survives.
    pub fn generate<R: Rng>(size: usize, ships: &[usize], rng: &mut R) -> Result<Self, GameError> {
        let mut field = Field::empty(size);
        for &length in ships {
            field.place_ship(length, rng)?;
        }
        for cell in &mut field.cells {
            if *cell == Cell::Blocked {
                *cell = Cell::Empty;
            }
        }
        Ok(field)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell state at a coordinate.
    pub fn cell_at(&self, point: Point) -> Result<Cell, GameError> {
        Ok(self.cells[to_index(self.size, point)?])
    }

    pub(crate) fn at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Retry loop for one ship. Exceeding the attempt cap means the
    /// inventory cannot fit this board and is reported as a config error.
    fn place_ship<R: Rng>(&mut self, length: usize, rng: &mut R) -> Result<(), GameError> {
        if length == 0 || length > self.size {
            return Err(GameError::Config("ship length exceeds board size"));
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            if self.try_place(length, rng) {
                return Ok(());
            }
        }
        Err(GameError::Config("unable to place ship inventory on this board"))
    }

    fn try_place<R: Rng>(&mut self, length: usize, rng: &mut R) -> bool {
        let x = rng.random_range(1..=self.size);
        let y = rng.random_range(1..=self.size);
        let horizontal: bool = rng.random();

        let run: Vec<Point> = (0..length)
            .map(|i| {
                if horizontal {
                    Point::new(x + i, y)
                } else {
                    Point::new(x, y + i)
                }
            })
            .collect();

        // The whole run must be on the board and untouched; `Blocked`
        // counts as taken to keep the no-adjacency invariant.
        let mut indices = Vec::with_capacity(length);
        for point in &run {
            match to_index(self.size, *point) {
                Ok(index) if self.cells[index] == Cell::Empty => indices.push(index),
                _ => return false,
            }
        }

        for point in &run {
            let neighbors = point
                .orthogonal_neighbors()
                .into_iter()
                .chain(point.diagonal_neighbors());
            for neighbor in neighbors {
                if let Ok(index) = to_index(self.size, neighbor) {
                    if self.cells[index] == Cell::Empty {
                        self.cells[index] = Cell::Blocked;
                    }
                }
            }
        }
        for &index in &indices {
            self.cells[index] = Cell::Ship;
        }
        true
    }

    /// Resolve a shot at `point`. Total over in-bounds positions, including
    /// repeated shots on already-resolved cells.
    pub fn shot(&mut self, point: Point) -> Result<ShotOutcome, GameError> {
        let index = to_index(self.size, point)?;
        match self.cells[index] {
            Cell::Ship => {
                self.cells[index] = Cell::Hit;
                if self.is_dead_ship(index) {
                    Ok(ShotOutcome::Kill)
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            Cell::Hit => {
                if self.is_dead_ship(index) {
                    Ok(ShotOutcome::Kill)
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
            _ => {
                if self.cells[index] == Cell::Empty {
                    self.cells[index] = Cell::Miss;
                }
                Ok(ShotOutcome::Miss)
            }
        }
    }

    /// A hit ship is dead when no intact `Ship` cell is reachable from the
    /// hit through contiguous ship cells in any of the four directions.
    pub(crate) fn is_dead_ship(&self, index: usize) -> bool {
        const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let point = to_position(self.size, index);
        DIRECTIONS
            .iter()
            .all(|&(dx, dy)| self.tail_is_dead(point, dx, dy))
    }

    /// Walk one direction from `from`: hits continue the scan, an intact
    /// ship segment means the ship is alive, anything else ends it.
    fn tail_is_dead(&self, from: Point, dx: isize, dy: isize) -> bool {
        let size = self.size as isize;
        let (mut x, mut y) = (from.x as isize, from.y as isize);
        loop {
            x += dx;
            y += dy;
            if x < 1 || y < 1 || x > size || y > size {
                return true;
            }
            match self.cells[(y as usize - 1) * self.size + (x as usize - 1)] {
                Cell::Hit => continue,
                Cell::Ship => return false,
                _ => return true,
            }
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(self.size + 2))?;
        for y in 1..=self.size {
            let row: String = self.cells[(y - 1) * self.size..y * self.size]
                .iter()
                .map(|cell| match cell {
                    Cell::Empty | Cell::Blocked => '.',
                    Cell::Ship => '1',
                    Cell::Hit => 'X',
                    Cell::Miss => 'x',
                })
                .collect();
            writeln!(f, "|{}|", row)?;
        }
        write!(f, "{}", "-".repeat(self.size + 2))
    }
}
