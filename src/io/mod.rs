//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types for file-facing operations
pub mod error;
/// Text and JSON export of finished puzzles
pub mod export;
/// PNG export of the answer key
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Progress bars for batch processing
pub mod progress;
/// Plain-text rendering of grids and answer keys
pub mod render;
/// Word list file parsing
pub mod wordlist;
