//! Tests for text and JSON export

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use wordseek::algorithm::executor::{GenerationOptions, generate_seeded};
    use wordseek::io::export::{PuzzleDocument, export_json, export_text};

    fn sample() -> wordseek::PuzzleResult {
        let options = GenerationOptions {
            size: 10,
            ..GenerationOptions::default()
        };
        generate_seeded(["rocket", "planet", "comet", "x"], &options, 17)
    }

    // Tests the document view mirrors the result
    #[test]
    fn test_puzzle_document_rows() {
        let result = sample();
        let document = PuzzleDocument::new(&result);

        assert_eq!(document.size, 10);
        assert_eq!(document.grid.len(), 10);
        assert!(document.grid.iter().all(|row| row.chars().count() == 10));
        assert_eq!(document.key.len(), 10);
        assert!(document.key.iter().all(|row| row.chars().count() == 10));
        assert_eq!(document.placements.len(), result.placements.len());
    }

    // Tests the text report is written, creating missing directories
    #[test]
    fn test_export_text_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("space_puzzle.txt");

        export_text(&sample(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("ANSWER KEY"));
    }

    // Tests the JSON document carries placements and rejections
    #[test]
    fn test_export_json_structure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("space_puzzle.json");
        let result = sample();

        export_json(&result, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["size"], 10);
        assert_eq!(value["grid"].as_array().map(Vec::len), Some(10));
        assert_eq!(
            value["placements"].as_array().map(Vec::len),
            Some(result.placements.len())
        );
        assert_eq!(value["rejected"][0]["input"], "x");
        assert_eq!(value["rejected"][0]["normalized"], "X");
        assert_eq!(value["rejected"][0]["reason"], "too_short");

        let first = &value["placements"][0];
        assert!(first["word"].is_string());
        assert!(first["start"]["x"].is_u64());
        assert!(first["direction"]["dx"].is_i64());
        assert!(first["cells"].is_array());
    }
}
