//! Randomized greedy word search generation with answer keys
//!
//! Words are normalized, ordered longest first and laid onto a square grid one
//! at a time along randomly ordered directions. Words that find no room are
//! reported rather than treated as errors. Remaining cells are filled with
//! random letters and an answer key is derived from the placements.

#![forbid(unsafe_code)]

/// Placement search and generation runs
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Grid, direction and answer key structures
pub mod spatial;
/// Word normalization and selection
pub mod words;

pub use algorithm::{
    GenerationOptions, Placement, PuzzleResult, WordSearchExecutor, generate, generate_seeded,
};
pub use io::error::{Result, WordSearchError};
