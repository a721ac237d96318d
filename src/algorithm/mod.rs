/// Generation run orchestration and options
pub mod executor;
/// Randomized line search for a single word
pub mod placement;
/// Placement and puzzle result records
pub mod puzzle;

pub use executor::{GenerationOptions, WordOutcome, WordSearchExecutor, generate, generate_seeded};
pub use puzzle::{Placement, PuzzleResult};
