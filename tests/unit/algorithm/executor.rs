//! Tests for generation runs and the public generation entry points

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use wordseek::algorithm::executor::{
        GenerationOptions, WordOutcome, WordSearchExecutor, generate, generate_seeded,
    };
    use wordseek::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_RETRY_BUDGET, MAX_GRID_SIZE};
    use wordseek::spatial::Position;
    use wordseek::words::{Charset, RejectReason};

    const ANIMALS: [&str; 8] = [
        "cat", "dog", "horse", "zebra", "giraffe", "lion", "tiger", "monkey",
    ];

    // Tests default options match the documented defaults
    #[test]
    fn test_generation_options_default() {
        let options = GenerationOptions::default();
        assert_eq!(options.size, DEFAULT_GRID_SIZE);
        assert!(options.allow_diagonal);
        assert!(options.allow_backwards);
        assert_eq!(options.max_words, None);
        assert_eq!(options.retry_budget, DEFAULT_RETRY_BUDGET);
        assert_eq!(options.charset, Charset::Alphanumeric);
    }

    // Tests the executor processes words one at a time, longest first
    #[test]
    fn test_executor_steps_through_queue() {
        let options = GenerationOptions {
            size: 12,
            ..GenerationOptions::default()
        };
        let mut executor =
            WordSearchExecutor::new(["cat", "giraffe", "lion"], &options, StdRng::seed_from_u64(1));

        assert_eq!(executor.size(), 12);
        assert_eq!(executor.total(), 3);
        assert_eq!(executor.remaining(), 3);
        assert_eq!(executor.processed(), 0);

        let first = executor.place_next();
        let Some(WordOutcome::Placed(placement)) = first else {
            unreachable!("the first word always fits on an empty grid");
        };
        assert_eq!(placement.word, "GIRAFFE");
        assert_eq!(executor.processed(), 1);
        assert_eq!(executor.remaining(), 2);
        assert_eq!(executor.grid().empty_count(), 144 - 7);

        assert!(executor.place_next().is_some());
        assert!(executor.place_next().is_some());
        assert!(executor.place_next().is_none());
        assert_eq!(executor.processed(), 3);

        let result = executor.finish();
        assert!(result.grid.is_complete());
        assert_eq!(result.placements.len() + result.skipped.len(), 3);
    }

    // Tests finish completes a run that was never stepped
    #[test]
    fn test_finish_without_stepping() {
        let executor =
            WordSearchExecutor::new(ANIMALS, &GenerationOptions::default(), StdRng::seed_from_u64(9));
        let result = executor.finish();

        assert_eq!(result.placements.len() + result.skipped.len(), ANIMALS.len());
        assert!(result.grid.is_complete());
    }

    // Tests the same seed reproduces the same puzzle
    #[test]
    fn test_generate_seeded_is_deterministic() {
        let options = GenerationOptions::default();
        let first = generate_seeded(ANIMALS, &options, 1234);
        let second = generate_seeded(ANIMALS, &options, 1234);

        assert_eq!(first.grid, second.grid);
        assert_eq!(first.placements, second.placements);
        assert_eq!(first.skipped, second.skipped);
        assert_eq!(first.answer_key, second.answer_key);
    }

    // Tests generate with an injected generator matches generate_seeded
    #[test]
    fn test_generate_matches_seeded_entry_point() {
        let options = GenerationOptions::default();
        let mut rng = StdRng::seed_from_u64(77);
        let injected = generate(ANIMALS, &options, &mut rng);
        let seeded = generate_seeded(ANIMALS, &options, 77);

        assert_eq!(injected.grid, seeded.grid);
        assert_eq!(injected.placements, seeded.placements);
    }

    // Tests sizes outside the supported range are clamped
    #[test]
    fn test_generate_clamps_size() {
        let small = generate_seeded(
            ["cat"],
            &GenerationOptions {
                size: 2,
                ..GenerationOptions::default()
            },
            1,
        );
        assert_eq!(small.size, 8);
        assert_eq!(small.grid.size(), 8);

        let large = generate_seeded(
            ["cat"],
            &GenerationOptions {
                size: 500,
                ..GenerationOptions::default()
            },
            1,
        );
        assert_eq!(large.size, MAX_GRID_SIZE);
        assert_eq!(large.answer_key.size(), MAX_GRID_SIZE);
    }

    // Tests an empty word list still yields a complete grid
    #[test]
    fn test_generate_empty_input() {
        let words: [&str; 0] = [];
        let result = generate_seeded(words, &GenerationOptions::default(), 5);

        assert!(result.placements.is_empty());
        assert!(result.skipped.is_empty());
        assert!(result.rejected.is_empty());
        assert!(result.grid.is_complete());
        assert_eq!(result.answer_key.marked_count(), 0);
    }

    // Tests numbers are coerced to text and normalized like words
    #[test]
    fn test_generate_coerces_non_string_input() {
        let result = generate_seeded([2024, 42], &GenerationOptions::default(), 8);

        assert_eq!(result.placements.len(), 1);
        assert_eq!(
            result.placements.first().map(|p| p.word.as_str()),
            Some("2024")
        );
        assert_eq!(
            result.rejected.first().map(|r| r.reason),
            Some(RejectReason::TooShort)
        );
    }

    // Tests the letters-only charset keeps digits off the grid
    #[test]
    fn test_generate_letters_only_charset() {
        let options = GenerationOptions {
            charset: Charset::Letters,
            ..GenerationOptions::default()
        };
        let result = generate_seeded(["route66", "A1B2C3D"], &options, 3);

        let words: Vec<&str> = result.placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, vec!["ROUTE", "ABCD"]);
        for y in 0..result.size {
            for x in 0..result.size {
                let letter = result.grid.letter_at(Position::new(x, y));
                assert!(letter.is_some_and(|c| c.is_ascii_uppercase()));
            }
        }
    }

    // Tests an impossible budget skips words instead of failing
    #[test]
    fn test_generate_zero_budget_skips_everything() {
        let options = GenerationOptions {
            retry_budget: 0,
            ..GenerationOptions::default()
        };
        let result = generate_seeded(["cat", "dog"], &options, 2);

        assert!(result.placements.is_empty());
        assert_eq!(result.skipped, vec!["CAT".to_string(), "DOG".to_string()]);
        assert!(result.grid.is_complete());
        assert_eq!(result.answer_key.marked_count(), 0);
    }
}
