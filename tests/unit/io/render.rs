//! Tests for plain-text rendering

#[cfg(test)]
mod tests {
    use wordseek::algorithm::executor::{GenerationOptions, generate_seeded};
    use wordseek::io::configuration::KEY_EMPTY_MARKER;
    use wordseek::io::render::{render_grid, render_key, render_puzzle};
    use wordseek::spatial::{AnswerKey, LetterGrid, Position};

    // Tests rows are space-joined and newline-separated
    #[test]
    fn test_render_grid_layout() {
        let mut grid = LetterGrid::new(8);
        for x in 0..8 {
            grid.set(Position::new(x, 0), b'A' + x as u8);
        }

        let text = render_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines.first().copied(), Some("A B C D E F G H"));
        assert_eq!(lines.get(1).copied(), Some(". . . . . . . ."));
    }

    // Tests the key shows letters only on marked cells
    #[test]
    fn test_render_key_marks_only_covered_cells() {
        let mut grid = LetterGrid::new(8);
        grid.set(Position::new(0, 0), b'Q');
        grid.set(Position::new(1, 0), b'R');
        let mut key = AnswerKey::new(8);
        key.mark(Position::new(1, 0));

        let text = render_key(&grid, &key);
        assert_eq!(text.lines().next(), Some(". R . . . . . ."));
    }

    // Tests the number of visible key letters equals the marked cell count
    #[test]
    fn test_render_key_matches_answer_key() {
        let result = generate_seeded(
            ["puzzle", "grid", "letter", "answer"],
            &GenerationOptions::default(),
            21,
        );

        let text = render_key(&result.grid, &result.answer_key);
        let visible = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != KEY_EMPTY_MARKER)
            .count();
        assert_eq!(visible, result.answer_key.marked_count());
    }

    // Tests the full report lists words, sections and skipped words
    #[test]
    fn test_render_puzzle_sections() {
        let options = GenerationOptions {
            size: 8,
            ..GenerationOptions::default()
        };
        let result = generate_seeded(["Apple", "Pear", "ab", "watermelon"], &options, 6);

        let report = render_puzzle(&result);
        assert!(report.starts_with("WORDS: "));
        assert!(report.contains("Apple"));
        assert!(report.contains("ANSWER KEY"));
        assert!(report.contains("REJECTED"));
        assert!(report.contains("ab (TooShort)"));
        assert!(report.contains("watermelon (TooLong)"));
        assert!(!report.contains("SKIPPED"));
    }
}
