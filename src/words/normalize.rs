//! Canonical word forms used for placement and duplicate detection

use serde::Serialize;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Characters a normalized word may keep
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    /// Uppercase A-Z and digits 0-9
    #[default]
    Alphanumeric,
    /// Uppercase A-Z only
    Letters,
}

impl Charset {
    /// Test whether an already uppercased, decomposed character survives normalization
    pub const fn keeps(self, c: char) -> bool {
        match self {
            Self::Alphanumeric => c.is_ascii_uppercase() || c.is_ascii_digit(),
            Self::Letters => c.is_ascii_uppercase(),
        }
    }
}

/// A word with its canonical form and the text it was derived from
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    /// Uppercase, accent-free form placed on the grid
    pub normalized: String,
    /// Trimmed input as the user wrote it
    pub display: String,
}

impl WordEntry {
    /// Number of grid cells the word occupies
    pub const fn len(&self) -> usize {
        self.normalized.len()
    }

    /// Test whether the canonical form is empty
    pub const fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Reduce a raw token to its canonical uppercase form
///
/// Diacritics are removed by canonical decomposition, so "Café" and "CAFE"
/// share the form `CAFE`. Every character rejected by `charset` is dropped,
/// which may leave an empty string.
pub fn normalize_word(raw: &str, charset: Charset) -> String {
    raw.trim()
        .to_uppercase()
        .nfd()
        .filter(|&c| !c.is_whitespace() && !is_combining_mark(c))
        .filter(|&c| charset.keeps(c))
        .collect()
}

/// Outcome of de-duplicating a raw word list
#[derive(Debug, Default)]
pub struct Deduplicated {
    /// First occurrence of each distinct canonical form, in input order
    pub unique: Vec<WordEntry>,
    /// Inputs that normalized to nothing
    pub empty: Vec<String>,
    /// Later repeats of an already seen canonical form
    pub duplicates: Vec<WordEntry>,
}

/// Normalize every entry and drop empties and repeated canonical forms
pub fn dedupe<I>(words: I, charset: Charset) -> Deduplicated
where
    I: IntoIterator,
    I::Item: ToString,
{
    let mut seen = HashSet::new();
    let mut result = Deduplicated::default();

    for raw in words {
        let raw = raw.to_string();
        let normalized = normalize_word(&raw, charset);
        if normalized.is_empty() {
            result.empty.push(raw);
            continue;
        }

        let entry = WordEntry {
            display: raw.trim().to_string(),
            normalized,
        };
        if seen.insert(entry.normalized.clone()) {
            result.unique.push(entry);
        } else {
            result.duplicates.push(entry);
        }
    }

    result
}
