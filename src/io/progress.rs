//! Progress display for batches of word lists
//!
//! Generating one puzzle takes well under a frame, so the display advances
//! once per list: a single bar counts finished lists and names the current
//! one. Small batches additionally print a summary line per finished list.

use crate::io::configuration::MAX_REPORTED_LISTS;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LIST_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lists {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks finished word lists for one batch run
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    summarize_each: bool,
    completed: usize,
}

impl ProgressManager {
    /// Create a manager with no batch started
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a batch of `list_count` word lists
    pub fn initialize(&mut self, list_count: usize) {
        let bar = ProgressBar::new(list_count as u64);
        bar.set_style(LIST_STYLE.clone());
        self.bar = Some(bar);
        self.summarize_each = list_count <= MAX_REPORTED_LISTS;
        self.completed = 0;
    }

    /// Show which list is being generated
    pub fn start_list(&self, path: &Path, word_count: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("{} ({word_count} words)", display_name(path)));
        }
    }

    /// Count a finished list, printing its summary in small batches
    pub fn complete_list(&mut self, path: &Path, placed: usize, word_count: usize) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.inc(1);
            if self.summarize_each {
                bar.println(format!(
                    "✓ {}: {placed}/{word_count} words placed",
                    display_name(path)
                ));
            }
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Lists finished since the batch started
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Lists in the current batch, zero before `initialize`
    pub fn batch_len(&self) -> u64 {
        self.bar
            .as_ref()
            .and_then(ProgressBar::length)
            .unwrap_or_default()
    }

    /// Test whether per-list summaries are suppressed for a large batch
    pub const fn is_batched(&self) -> bool {
        self.bar.is_some() && !self.summarize_each
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
