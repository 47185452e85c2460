//! Fixed-size grid of cells, ship placement and shuffled position generation.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::core::cell::{Cell, CellState};
use crate::core::common::{Coord, GameError, Orientation};
use crate::core::ship::Ship;

/// A `rows × cols` grid. Dimensions never change after construction.
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell empty and unoccupied.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(Coord::new(row, col)));
            }
        }
        Board { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Cell at (`row`, `col`), or `None` when out of range.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.contains(row, col) {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.contains(row, col) {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Every coordinate of the board in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    /// Count of cells currently in `state`.
    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// A fresh random ordering of every coordinate, produced lazily.
    pub fn shuffled_positions<'r, R: Rng + ?Sized>(
        &self,
        rng: &'r mut R,
    ) -> ShuffledPositions<'r, R> {
        ShuffledPositions {
            pending: self.coords().collect(),
            next: 0,
            rng,
        }
    }

    /// `true` if a run of `size` cells from `origin` stays on the board and
    /// touches no occupied cell.
    pub fn is_placement_free(&self, origin: Coord, size: usize, orientation: Orientation) -> bool {
        if size == 0 || !self.contains(origin.row, origin.col) {
            return false;
        }
        let end = origin.step(orientation, size - 1);
        if !self.contains(end.row, end.col) {
            return false;
        }
        (0..size).all(|i| {
            let c = origin.step(orientation, i);
            self.cell_at(c.row, c.col)
                .map_or(false, |cell| !cell.has_occupant())
        })
    }

    /// Seat `ship` on the run starting at `origin`.
    ///
    /// On success every run cell points at the ship and the ship records the
    /// run. On failure nothing is mutated.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        ship: &mut Ship,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if !self.contains(origin.row, origin.col) {
            return Err(GameError::OutOfBounds {
                row: origin.row,
                col: origin.col,
            });
        }
        if ship.is_placed() || !self.is_placement_free(origin, ship.size(), orientation) {
            return Err(GameError::PlacementRejected);
        }
        for i in 0..ship.size() {
            let c = origin.step(orientation, i);
            if let Some(cell) = self.cell_at_mut(c.row, c.col) {
                cell.set_occupant(Some(ship.id()));
            }
            ship.push_cell(c);
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows, self.cols)?;
        for row in 0..self.rows {
            write!(f, "  ")?;
            for col in 0..self.cols {
                let ch = match self.cell_at(row, col) {
                    Some(cell) => match (cell.state(), cell.has_occupant()) {
                        (CellState::Hit, _) => 'X',
                        (CellState::Miss, _) => 'o',
                        (CellState::Empty, true) => '#',
                        (CellState::Empty, false) => '.',
                    },
                    None => '?',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Lazy Fisher–Yates walk over a board's coordinates.
///
/// Each call to `next` fixes one more position of the permutation, so a
/// consumer that stops early pays only for what it used.
pub struct ShuffledPositions<'r, R: Rng + ?Sized> {
    pending: Vec<Coord>,
    next: usize,
    rng: &'r mut R,
}

impl<R: Rng + ?Sized> Iterator for ShuffledPositions<'_, R> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let len = self.pending.len();
        if self.next >= len {
            return None;
        }
        let pick = self.rng.random_range(self.next..len);
        self.pending.swap(self.next, pick);
        let coord = self.pending[self.next];
        self.next += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.pending.len() - self.next;
        (left, Some(left))
    }
}

impl<R: Rng + ?Sized> ExactSizeIterator for ShuffledPositions<'_, R> {}
