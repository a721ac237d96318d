//! Command-line interface for batch generation of word search puzzles

use crate::algorithm::{GenerationOptions, WordSearchExecutor};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_RETRY_BUDGET, KEY_IMAGE_SUFFIX, OUTPUT_SUFFIX, WORD_LIST_EXTENSION,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::export::{export_json, export_text};
use crate::io::image::export_key_as_png;
use crate::io::progress::ProgressManager;
use crate::io::wordlist::load_word_list;
use crate::words::Charset;
use clap::{ArgAction, Parser};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "wordseek")]
#[command(
    author,
    version,
    about = "Generate word search puzzles and answer keys from word lists"
)]
/// Command-line arguments for the puzzle generation tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Word list file (.txt) or directory of word lists to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible puzzles (drawn at random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Grid side length, clamped to the supported range
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Keep words on rows and columns only
    #[arg(long)]
    pub no_diagonal: bool,

    /// Only place words reading left-to-right and top-to-bottom
    #[arg(long)]
    pub no_backwards: bool,

    /// Keep at most this many words, longest first
    #[arg(short, long)]
    pub max_words: Option<usize>,

    /// Random start positions tried per direction for each word
    #[arg(short, long, default_value_t = DEFAULT_RETRY_BUDGET)]
    pub retries: usize,

    /// Drop digits from words, keeping letters only
    #[arg(short, long)]
    pub letters_only: bool,

    /// Also write the puzzle as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Also write the answer key as a PNG image
    #[arg(short, long)]
    pub key_image: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process word lists even if output exists
    #[arg(long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generation options selected on the command line
    pub const fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            size: self.size,
            allow_diagonal: !self.no_diagonal,
            allow_backwards: !self.no_backwards,
            max_words: self.max_words,
            retry_budget: self.retries,
            charset: if self.letters_only {
                Charset::Letters
            } else {
                Charset::Alphanumeric
            },
        }
    }
}

/// Orchestrates batch processing of word lists with progress tracking
pub struct FileProcessor {
    cli: Cli,
    seed: u64,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        let seed = cli.seed.unwrap_or_else(rand::random);

        Self {
            cli,
            seed,
            progress_manager,
        }
    }

    /// Base seed; the word list at sorted position `i` in the target uses `seed + i`
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Process word lists according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, target validation, reading a
    /// word list or writing an output fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.retries == 0 {
            return Err(invalid_parameter(
                "retries",
                &self.cli.retries,
                &"at least one attempt per direction is required",
            ));
        }

        // Seed index is the position among all word lists, skipped ones included
        let pending: Vec<(usize, PathBuf)> = self
            .collect_word_lists()?
            .into_iter()
            .enumerate()
            .filter(|(_, path)| self.should_process_file(path))
            .collect();

        if pending.is_empty() {
            info!("nothing to do");
            return Ok(());
        }

        info!(seed = self.seed, lists = pending.len(), "generating puzzles");

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(pending.len());
        }

        for (index, file) in &pending {
            self.process_file(file, *index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Seed used for the word list at `index` among all lists of the target
    pub const fn list_seed(&self, index: usize) -> u64 {
        self.seed.wrapping_add(index as u64)
    }

    fn collect_word_lists(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if Self::is_word_list(target) {
                Ok(vec![target.clone()])
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a .txt word list",
                ))
            }
        } else if target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(target).map_err(|e| file_system_error(target, "read directory", e))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| file_system_error(target, "read directory", e))?
                    .path();
                if path.is_file() && Self::is_word_list(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a .txt word list or a directory",
            ))
        }
    }

    /// Test whether a path names a word list rather than a generated report
    pub fn is_word_list(path: &Path) -> bool {
        let is_generated = path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
        path.extension().and_then(|s| s.to_str()) == Some(WORD_LIST_EXTENSION) && !is_generated
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!(list = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let words = load_word_list(input_path)?;
        let options = self.cli.generation_options();
        let rng = StdRng::seed_from_u64(self.list_seed(index));
        let executor = WordSearchExecutor::new(words, &options, rng);

        if let Some(ref pm) = self.progress_manager {
            pm.start_list(input_path, executor.total());
        }

        let result = executor.finish();

        if !result.skipped.is_empty() {
            warn!(
                list = %input_path.display(),
                skipped = %result.skipped.join(", "),
                "some words found no room; try a larger grid"
            );
        }

        export_text(&result, &Self::get_output_path(input_path))?;

        if self.cli.json {
            export_json(&result, &Self::get_json_path(input_path))?;
        }

        if self.cli.key_image {
            export_key_as_png(&result.answer_key, &Self::get_key_image_path(input_path))?;
        }

        info!(
            list = %input_path.display(),
            placed = result.placements.len(),
            skipped = result.skipped.len(),
            rejected = result.rejected.len(),
            "puzzle written"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_list(input_path, result.placements.len(), result.total_words());
        }

        Ok(())
    }

    fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(name)
        } else {
            PathBuf::from(name)
        }
    }

    /// Path of the text report written for a word list
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, OUTPUT_SUFFIX, "txt")
    }

    /// Path of the JSON document written for a word list
    pub fn get_json_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, OUTPUT_SUFFIX, "json")
    }

    /// Path of the answer key image written for a word list
    pub fn get_key_image_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, KEY_IMAGE_SUFFIX, "png")
    }
}
