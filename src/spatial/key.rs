//! Answer key derived from placed words

use crate::algorithm::puzzle::Placement;
use crate::spatial::grid::Position;
use bitvec::prelude::*;
use std::fmt;

/// Answer key marking every cell covered by at least one placed word
///
/// Derived from placements alone; letters are never inspected, so cells
/// shared by crossing words are simply marked more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerKey {
    bits: BitVec,
    size: usize,
}

impl AnswerKey {
    /// Create a key with no cell marked
    pub fn new(size: usize) -> Self {
        Self {
            bits: bitvec![0; size * size],
            size,
        }
    }

    /// Derive the key for a grid of side `size` from its placements
    pub fn from_placements(size: usize, placements: &[Placement]) -> Self {
        let mut key = Self::new(size);
        for cell in placements.iter().flat_map(|placement| &placement.cells) {
            key.mark(*cell);
        }
        key
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Mark a cell as occupied; positions outside the key are ignored
    pub fn mark(&mut self, position: Position) {
        if let Some(index) = self.index(position) {
            self.bits.set(index, true);
        }
    }

    /// Test whether a cell is occupied by a placed word
    pub fn is_marked(&self, position: Position) -> bool {
        self.index(position)
            .and_then(|index| self.bits.get(index))
            .is_some_and(|bit| *bit)
    }

    /// Count marked cells
    pub fn marked_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Marked cells in row-major order
    pub fn marked_positions(&self) -> Vec<Position> {
        self.bits
            .iter_ones()
            .map(|index| Position::new(index % self.size, index / self.size))
            .collect()
    }

    const fn index(&self, position: Position) -> Option<usize> {
        if position.x < self.size && position.y < self.size {
            Some(position.y * self.size + position.x)
        } else {
            None
        }
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnswerKey({}x{}, {} marked)",
            self.size,
            self.size,
            self.marked_count()
        )
    }
}
