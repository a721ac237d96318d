//! Length filtering, ordering and truncation of the word list

use crate::io::configuration::MIN_WORD_LENGTH;
use crate::words::normalize::{Charset, WordEntry, dedupe};
use serde::Serialize;
use std::cmp::Reverse;

/// Why an input word never reached placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Nothing remained after normalization
    Empty,
    /// Same canonical form as an earlier word
    Duplicate,
    /// Fewer than three characters
    TooShort,
    /// Longer than the grid side, so no direction can hold it
    TooLong,
    /// Cut by the configured word limit
    OverLimit,
}

/// An input word excluded before placement, with the reason
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RejectedWord {
    /// Input text as received (trimmed)
    pub input: String,
    /// Canonical form, empty when normalization removed everything
    pub normalized: String,
    /// Why the word was excluded
    pub reason: RejectReason,
}

impl RejectedWord {
    fn from_entry(entry: WordEntry, reason: RejectReason) -> Self {
        Self {
            input: entry.display,
            normalized: entry.normalized,
            reason,
        }
    }
}

/// Words ready for placement plus everything filtered away
#[derive(Debug, Default)]
pub struct WordSelection {
    /// Placement order: longest first, input order among equal lengths
    pub accepted: Vec<WordEntry>,
    /// Excluded inputs grouped by stage: empty, duplicate, too short or too
    /// long, then over the limit; input order within the first three groups,
    /// placement order within the last
    pub rejected: Vec<RejectedWord>,
}

/// Build the placement queue for a grid of side `size`
///
/// Longer words have fewer legal positions, so they go first while the grid is
/// still empty. The sort is stable; `max_words` keeps the longest words.
pub fn select_words<I>(
    words: I,
    size: usize,
    max_words: Option<usize>,
    charset: Charset,
) -> WordSelection
where
    I: IntoIterator,
    I::Item: ToString,
{
    let deduplicated = dedupe(words, charset);
    let mut rejected: Vec<RejectedWord> = deduplicated
        .empty
        .into_iter()
        .map(|input| RejectedWord {
            input: input.trim().to_string(),
            normalized: String::new(),
            reason: RejectReason::Empty,
        })
        .chain(
            deduplicated
                .duplicates
                .into_iter()
                .map(|entry| RejectedWord::from_entry(entry, RejectReason::Duplicate)),
        )
        .collect();

    let mut accepted = Vec::with_capacity(deduplicated.unique.len());
    for entry in deduplicated.unique {
        if entry.len() < MIN_WORD_LENGTH {
            rejected.push(RejectedWord::from_entry(entry, RejectReason::TooShort));
        } else if entry.len() > size {
            rejected.push(RejectedWord::from_entry(entry, RejectReason::TooLong));
        } else {
            accepted.push(entry);
        }
    }

    accepted.sort_by_key(|entry| Reverse(entry.len()));

    if let Some(limit) = max_words.filter(|&limit| limit < accepted.len()) {
        rejected.extend(
            accepted
                .split_off(limit)
                .into_iter()
                .map(|entry| RejectedWord::from_entry(entry, RejectReason::OverLimit)),
        );
    }

    WordSelection { accepted, rejected }
}
