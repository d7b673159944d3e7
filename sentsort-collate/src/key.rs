//! Comparison key derivation
//!
//! A [`SortKey`] is the transient, fully-ordered form of one sentence under
//! a given [`CollationConfig`]. The primary component is a lowercase fold of
//! the cleaned sentence; the secondary component encodes per-character case
//! so that tie-breaking between case-variants reduces to plain lexicographic
//! comparison of the key. The emitted sentence text is never touched.

use crate::config::{CasePriority, CollationConfig};
use std::cmp::Ordering;

/// Quotation marks invisible to the key when `ignore_quotes` is set.
/// Straight and typographic, single and double.
const QUOTE_CHARS: [char; 6] = ['"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Derived comparison key for one sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    /// Lowercase fold of the cleaned sentence; primary ordering component
    folded: String,
    /// Per-character case rank over the cleaned sentence; empty when the
    /// configured priority is `CaseInsensitive`
    case_ranks: Vec<u8>,
}

impl SortKey {
    /// Derive the key for `sentence` under `config`
    pub fn derive(sentence: &str, config: &CollationConfig) -> Self {
        let cleaned = clean(sentence, config);
        let folded = cleaned.to_lowercase();
        let case_ranks = match config.case_priority {
            CasePriority::CaseInsensitive => Vec::new(),
            priority => cleaned.chars().map(|ch| case_rank(ch, priority)).collect(),
        };
        Self { folded, case_ranks }
    }

    /// The folded primary component (visible for tests and diagnostics)
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded
            .cmp(&other.folded)
            .then_with(|| self.case_ranks.cmp(&other.case_ranks))
    }
}

/// Produce the cleaned working copy of a sentence per config toggles
fn clean(sentence: &str, config: &CollationConfig) -> String {
    let mut cleaned: String = if config.ignore_quotes {
        sentence.chars().filter(|ch| !QUOTE_CHARS.contains(ch)).collect()
    } else {
        sentence.to_string()
    };

    if config.ignore_leading_nonalpha {
        let start = cleaned
            .char_indices()
            .find(|(_, ch)| ch.is_alphabetic())
            .map(|(idx, _)| idx)
            .unwrap_or(cleaned.len());
        cleaned.drain(..start);
    }

    cleaned
}

/// Rank a character's case under the given priority. Lower rank sorts first.
/// Characters without case (digits, punctuation) rank 0; when two folds are
/// equal those positions hold identical characters, so the rank never
/// decides between them.
fn case_rank(ch: char, priority: CasePriority) -> u8 {
    match priority {
        CasePriority::LowerFirst => u8::from(ch.is_uppercase()),
        CasePriority::UpperFirst => u8::from(ch.is_lowercase()),
        CasePriority::CaseInsensitive => 0,
    }
}
