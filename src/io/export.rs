//! Writing finished puzzles to disk as text or JSON

use crate::algorithm::{Placement, PuzzleResult};
use crate::io::configuration::KEY_EMPTY_MARKER;
use crate::io::error::{Result, WordSearchError, file_system_error};
use crate::io::render::{render_key, render_puzzle};
use crate::words::RejectedWord;
use serde::Serialize;
use std::path::Path;

/// Serializable view of a puzzle for renderers outside this crate
#[derive(Debug, Serialize)]
pub struct PuzzleDocument<'a> {
    /// Grid side length
    pub size: usize,
    /// Grid rows as strings of letters
    pub grid: Vec<String>,
    /// Answer key rows, letters where a word lies and the empty marker elsewhere
    pub key: Vec<String>,
    /// Placed words with their cells
    pub placements: &'a [Placement],
    /// Words that found no room
    pub skipped: &'a [String],
    /// Inputs excluded before placement
    pub rejected: &'a [RejectedWord],
}

impl<'a> PuzzleDocument<'a> {
    /// Build the document view of a result
    pub fn new(result: &'a PuzzleResult) -> Self {
        let grid = result
            .grid
            .rows(KEY_EMPTY_MARKER)
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let key = render_key(&result.grid, &result.answer_key)
            .lines()
            .map(|line| line.split(' ').collect())
            .collect();

        Self {
            size: result.size,
            grid,
            key,
            placements: &result.placements,
            skipped: &result.skipped,
            rejected: &result.rejected,
        }
    }
}

/// Pretty-printed JSON document of a result
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn puzzle_to_json(result: &PuzzleResult, path: &Path) -> Result<String> {
    serde_json::to_string_pretty(&PuzzleDocument::new(result)).map_err(|e| {
        WordSearchError::Serialization {
            path: path.to_path_buf(),
            source: e,
        }
    })
}

/// Write the printable text report
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file cannot be written
pub fn export_text(result: &PuzzleResult, path: &Path) -> Result<()> {
    write_file(path, &render_puzzle(result))
}

/// Write the JSON document
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn export_json(result: &PuzzleResult, path: &Path) -> Result<()> {
    let json = puzzle_to_json(result, path)?;
    write_file(path, &json)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }
    std::fs::write(path, contents).map_err(|e| file_system_error(path, "write", e))
}
