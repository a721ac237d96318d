//! Word list files: one entry per line, or separated by commas or semicolons

use crate::io::error::{Result, WordSearchError};
use std::path::Path;

/// Marks a line as a comment when it is the first non-blank character
pub const COMMENT_PREFIX: char = '#';

/// Split word list text into raw entries
///
/// Comment lines and blank entries are dropped. Entries are trimmed but
/// otherwise untouched; normalization happens during generation.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .flat_map(|line| line.split([',', ';']))
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Read and split a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| WordSearchError::WordListLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_word_list(&text))
}
