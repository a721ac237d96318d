use crate::{
    algorithm::placement::try_place_word,
    algorithm::puzzle::{Placement, PuzzleResult},
    io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_RETRY_BUDGET},
    spatial::grid::clamp_size,
    spatial::{AnswerKey, DirectionSet, LetterGrid},
    words::selection::select_words,
    words::{Charset, RejectedWord, WordEntry},
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Parameters controlling grid size, allowed directions and search effort
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Requested grid side length, clamped to the supported range
    pub size: usize,
    /// Whether words may run diagonally
    pub allow_diagonal: bool,
    /// Whether words may read right-to-left or bottom-to-top
    pub allow_backwards: bool,
    /// Keep at most this many words, longest first
    pub max_words: Option<usize>,
    /// Random start cells tried per direction for each word
    pub retry_budget: usize,
    /// Characters kept by word normalization
    pub charset: Charset,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            allow_diagonal: true,
            allow_backwards: true,
            max_words: None,
            retry_budget: DEFAULT_RETRY_BUDGET,
            charset: Charset::default(),
        }
    }
}

/// Result of processing one word from the queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordOutcome {
    /// The word was committed to the grid
    Placed(Placement),
    /// No legal line was found within the retry budget
    Skipped(String),
}

/// Step-by-step word search generation
///
/// Owns the grid for the duration of one run. Words are taken from the queue
/// in selection order; each is either placed or skipped and never revisited.
pub struct WordSearchExecutor<R> {
    grid: LetterGrid,
    directions: DirectionSet,
    queue: VecDeque<WordEntry>,
    retry_budget: usize,
    placements: Vec<Placement>,
    skipped: Vec<String>,
    rejected: Vec<RejectedWord>,
    rng: R,
}

impl<R: Rng> WordSearchExecutor<R> {
    /// Prepare a run: clamp the size, select words and build the direction set
    pub fn new<I>(words: I, options: &GenerationOptions, rng: R) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let size = clamp_size(options.size);
        if size != options.size {
            warn!(
                requested = options.size,
                used = size,
                "grid size outside supported range, clamped"
            );
        }

        let selection = select_words(words, size, options.max_words, options.charset);
        debug!(
            accepted = selection.accepted.len(),
            rejected = selection.rejected.len(),
            "word list prepared"
        );

        Self {
            grid: LetterGrid::new(size),
            directions: DirectionSet::new(options.allow_diagonal, options.allow_backwards),
            queue: selection.accepted.into(),
            retry_budget: options.retry_budget,
            placements: Vec::new(),
            skipped: Vec::new(),
            rejected: selection.rejected,
            rng,
        }
    }

    /// Grid side length
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Grid in its current, possibly partially filled, state
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Words still waiting for placement
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Words placed or skipped so far
    pub const fn processed(&self) -> usize {
        self.placements.len() + self.skipped.len()
    }

    /// Total words that reach placement in this run
    pub fn total(&self) -> usize {
        self.processed() + self.remaining()
    }

    /// Attempt the next queued word, `None` once the queue is exhausted
    pub fn place_next(&mut self) -> Option<WordOutcome> {
        let entry = self.queue.pop_front()?;

        match try_place_word(
            &mut self.grid,
            &entry,
            &self.directions,
            self.retry_budget,
            &mut self.rng,
        ) {
            Some(placement) => {
                debug!(
                    word = %placement.word,
                    x = placement.start.x,
                    y = placement.start.y,
                    direction = %placement.direction,
                    "placed"
                );
                self.placements.push(placement.clone());
                Some(WordOutcome::Placed(placement))
            }
            None => {
                debug!(word = %entry.normalized, "no room, skipped");
                self.skipped.push(entry.normalized.clone());
                Some(WordOutcome::Skipped(entry.normalized))
            }
        }
    }

    /// Process any remaining words, fill empty cells and derive the answer key
    pub fn finish(mut self) -> PuzzleResult {
        while self.place_next().is_some() {}

        self.grid.fill_empty(&mut self.rng);
        let size = self.grid.size();
        let answer_key = AnswerKey::from_placements(size, &self.placements);

        PuzzleResult {
            size,
            grid: self.grid,
            placements: self.placements,
            skipped: self.skipped,
            rejected: self.rejected,
            answer_key,
        }
    }
}

/// Generate a complete puzzle using the supplied random source
///
/// Never fails: unusable words end up in `rejected`, unplaceable ones in
/// `skipped`, and an empty word list still yields a fully filled grid.
pub fn generate<I, R>(words: I, options: &GenerationOptions, rng: &mut R) -> PuzzleResult
where
    I: IntoIterator,
    I::Item: ToString,
    R: Rng + ?Sized,
{
    WordSearchExecutor::new(words, options, rng).finish()
}

/// Generate a reproducible puzzle from a fixed seed
pub fn generate_seeded<I>(words: I, options: &GenerationOptions, seed: u64) -> PuzzleResult
where
    I: IntoIterator,
    I::Item: ToString,
{
    WordSearchExecutor::new(words, options, StdRng::seed_from_u64(seed)).finish()
}
