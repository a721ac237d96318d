use crate::algorithm::puzzle::Placement;
use crate::spatial::{Direction, DirectionSet, LetterGrid, Position};
use crate::words::WordEntry;
use rand::Rng;

/// Cells the word would cover from `start` along `direction`
///
/// Returns `None` when the word runs off the grid or would overwrite a
/// different letter. A cell already holding the same letter is accepted,
/// which is how words cross.
pub fn candidate_cells(
    grid: &LetterGrid,
    word: &[u8],
    start: Position,
    direction: Direction,
) -> Option<Vec<Position>> {
    let size = grid.size();
    // End cell first: most rejections on a dense grid happen here
    start.offset(direction, word.len().checked_sub(1)?, size)?;

    let mut cells = Vec::with_capacity(word.len());
    for (step, &letter) in word.iter().enumerate() {
        let cell = start.offset(direction, step, size)?;
        if !grid.accepts(cell, letter) {
            return None;
        }
        cells.push(cell);
    }
    Some(cells)
}

/// Search for a legal line for `entry` and commit it to the grid
///
/// Directions are tried in a fresh random order; each gets `retry_budget`
/// uniformly random start cells. The first legal candidate is written into
/// the grid. When nothing fits the grid is left untouched.
pub fn try_place_word<R: Rng + ?Sized>(
    grid: &mut LetterGrid,
    entry: &WordEntry,
    directions: &DirectionSet,
    retry_budget: usize,
    rng: &mut R,
) -> Option<Placement> {
    let word = entry.normalized.as_bytes();
    let size = grid.size();
    if word.is_empty() || word.len() > size {
        return None;
    }

    for direction in directions.shuffled(rng) {
        for _ in 0..retry_budget {
            let start = Position::new(rng.random_range(0..size), rng.random_range(0..size));
            if let Some(cells) = candidate_cells(grid, word, start, direction) {
                for (&cell, &letter) in cells.iter().zip(word) {
                    grid.set(cell, letter);
                }
                return Some(Placement {
                    word: entry.normalized.clone(),
                    display: entry.display.clone(),
                    start,
                    direction,
                    cells,
                });
            }
        }
    }

    None
}
