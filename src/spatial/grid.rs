//! Square letter grid with an explicit empty state
//!
//! Cells are stored row-major in an `ndarray` matrix indexed `[y, x]`. An empty
//! cell accepts any letter during placement; `fill_empty` turns the remaining
//! empty cells into noise letters once placement is over.

use crate::io::configuration::{FILL_ALPHABET, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::spatial::direction::Direction;
use ndarray::Array2;
use rand::Rng;
use serde::Serialize;

/// Column/row coordinate of a grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    /// Column, growing to the right
    pub x: usize,
    /// Row, growing downwards
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Cell reached after `steps` moves along `direction`, if it lies in a grid of side `size`
    pub const fn offset(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let x = self.x as i64 + direction.dx as i64 * steps as i64;
        let y = self.y as i64 + direction.dy as i64 * steps as i64;
        if x < 0 || y < 0 || x >= size as i64 || y >= size as i64 {
            None
        } else {
            Some(Self::new(x as usize, y as usize))
        }
    }
}

/// Bring a requested side length into the supported range
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}

/// Square letter grid, `None` marking cells not yet written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<Option<u8>>,
}

impl LetterGrid {
    /// Create an empty grid of side `size`
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    /// Side length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Character at `position`, `None` when empty or outside the grid
    pub fn get(&self, position: Position) -> Option<u8> {
        self.cells.get([position.y, position.x]).copied().flatten()
    }

    /// Character at `position` as a `char`
    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.get(position).map(char::from)
    }

    /// Test whether `position` is inside the grid and still empty
    pub fn is_empty_at(&self, position: Position) -> bool {
        matches!(self.cells.get([position.y, position.x]), Some(None))
    }

    /// Write `letter` at `position`; positions outside the grid are ignored
    pub fn set(&mut self, position: Position, letter: u8) {
        if let Some(cell) = self.cells.get_mut([position.y, position.x]) {
            *cell = Some(letter);
        }
    }

    /// Test whether `letter` may be written at `position` without overwriting a different one
    pub fn accepts(&self, position: Position, letter: u8) -> bool {
        match self.cells.get([position.y, position.x]) {
            Some(None) => true,
            Some(Some(existing)) => *existing == letter,
            None => false,
        }
    }

    /// Number of cells still empty
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Test whether every cell holds a character
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Assign a uniformly random letter A-Z to every empty cell
    ///
    /// Must only run after all placement attempts, since placement treats
    /// empty cells as free.
    pub fn fill_empty<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            let index = rng.random_range(0..FILL_ALPHABET.len());
            *cell = FILL_ALPHABET.get(index).copied();
        }
    }

    /// Rows of characters top to bottom, empty cells rendered as `empty`
    pub fn rows(&self, empty: char) -> Vec<Vec<char>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|cell| cell.map_or(empty, char::from)).collect())
            .collect()
    }
}
