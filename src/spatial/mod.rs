//! Spatial data structures for the puzzle grid
//!
//! This module contains spatial-related functionality including:
//! - Step directions and the per-puzzle direction set
//! - The letter grid and cell positions
//! - The answer key derived from placements

/// Step directions and direction set assembly
pub mod direction;
/// Letter grid and cell coordinates
pub mod grid;
/// Answer key bit grid
pub mod key;

pub use direction::{Direction, DirectionSet};
pub use grid::{LetterGrid, Position};
pub use key::AnswerKey;
