//! Generation constants and runtime configuration defaults

// Grid dimensions accepted by the generator; anything outside is clamped
/// Smallest supported grid side length
pub const MIN_GRID_SIZE: usize = 8;
/// Largest supported grid side length
pub const MAX_GRID_SIZE: usize = 30;
/// Grid side length used when none is requested
pub const DEFAULT_GRID_SIZE: usize = 15;

/// Shortest word kept after normalization
pub const MIN_WORD_LENGTH: usize = 3;

/// Random start positions tried per direction before giving up on that direction
pub const DEFAULT_RETRY_BUDGET: usize = 250;

/// Letters used to fill cells not covered by any word
pub const FILL_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Progress display settings
/// Largest batch in which every finished list prints a summary line
pub const MAX_REPORTED_LISTS: usize = 5;

// Output settings
/// Extension of word list files picked up from a directory
pub const WORD_LIST_EXTENSION: &str = "txt";
/// Suffix added to puzzle output filenames
pub const OUTPUT_SUFFIX: &str = "_puzzle";
/// Suffix added to answer key image filenames
pub const KEY_IMAGE_SUFFIX: &str = "_key";
/// Side length of one grid cell in exported images
pub const CELL_PIXELS: u32 = 24;
/// Placeholder drawn for unmarked cells in the text answer key
pub const KEY_EMPTY_MARKER: char = '.';
