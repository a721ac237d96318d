//! Immutable records produced by a generation run

use crate::spatial::{AnswerKey, Direction, LetterGrid, Position};
use crate::words::RejectedWord;
use serde::Serialize;

/// A word committed to a straight line of grid cells
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Placement {
    /// Canonical form written into the grid
    pub word: String,
    /// Form shown to the player in the word list
    pub display: String,
    /// Cell holding the first character
    pub start: Position,
    /// Step between consecutive characters
    pub direction: Direction,
    /// Occupied cells, one per character, in reading order
    pub cells: Vec<Position>,
}

impl Placement {
    /// Cell holding the last character
    pub fn end(&self) -> Position {
        self.cells.last().copied().unwrap_or(self.start)
    }
}

/// Finished puzzle: filled grid, answer key and word accounting
///
/// Every word that survived filtering is in exactly one of `placements` or
/// `skipped`; everything filtered out beforehand is in `rejected`.
#[derive(Clone, Debug)]
pub struct PuzzleResult {
    /// Grid side length after clamping
    pub size: usize,
    /// Grid with every cell filled
    pub grid: LetterGrid,
    /// Words placed on the grid, in placement order
    pub placements: Vec<Placement>,
    /// Canonical forms of words that found no legal position
    pub skipped: Vec<String>,
    /// Inputs excluded before placement
    pub rejected: Vec<RejectedWord>,
    /// Cells covered by any placement
    pub answer_key: AnswerKey,
}

impl PuzzleResult {
    /// Test whether every word that reached placement was placed
    pub const fn is_fully_placed(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Words that reached placement, placed or skipped
    pub const fn total_words(&self) -> usize {
        self.placements.len() + self.skipped.len()
    }

    /// Display forms of the placed words, for printing beside the grid
    pub fn word_list(&self) -> Vec<&str> {
        self.placements
            .iter()
            .map(|placement| placement.display.as_str())
            .collect()
    }
}
