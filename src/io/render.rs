//! Plain-text rendering of a finished puzzle

use crate::algorithm::PuzzleResult;
use crate::io::configuration::KEY_EMPTY_MARKER;
use crate::spatial::{AnswerKey, LetterGrid, Position};
use std::fmt::Write;

/// Grid rows with letters separated by spaces, one line per row
pub fn render_grid(grid: &LetterGrid) -> String {
    join_rows(grid.rows(KEY_EMPTY_MARKER))
}

/// Answer key: the grid letter where a word lies, the empty marker elsewhere
pub fn render_key(grid: &LetterGrid, key: &AnswerKey) -> String {
    let rows = (0..grid.size())
        .map(|y| {
            (0..grid.size())
                .map(|x| {
                    let position = Position::new(x, y);
                    if key.is_marked(position) {
                        grid.letter_at(position).unwrap_or(KEY_EMPTY_MARKER)
                    } else {
                        KEY_EMPTY_MARKER
                    }
                })
                .collect()
        })
        .collect();
    join_rows(rows)
}

fn join_rows(rows: Vec<Vec<char>>) -> String {
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full printable report: word list, puzzle, answer key and word accounting
pub fn render_puzzle(result: &PuzzleResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "WORDS: {}", result.word_list().join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", render_grid(&result.grid));
    let _ = writeln!(out);
    let _ = writeln!(out, "ANSWER KEY");
    let _ = writeln!(out, "{}", render_key(&result.grid, &result.answer_key));

    if !result.skipped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "SKIPPED (no room): {}", result.skipped.join(", "));
    }

    if !result.rejected.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "REJECTED");
        for rejected in &result.rejected {
            let _ = writeln!(out, "  {} ({:?})", rejected.input, rejected.reason);
        }
    }

    out
}
