//! Tokenizer adapter
//!
//! Wraps the boundary scanner behind the sentence-sequence contract the
//! sorter consumes: divider lines are stripped, each detected sentence is
//! trimmed, and accidental empties are filtered out. Construction fails
//! when the language's rule asset cannot be loaded; tokenization itself
//! never fails.

use std::sync::Arc;

use crate::error::Result;
use crate::loader;
use crate::rules::SegmentRules;
use crate::scanner;

/// Sentence tokenizer for one language
#[derive(Debug, Clone)]
pub struct Tokenizer {
    rules: Arc<SegmentRules>,
}

impl Tokenizer {
    /// Create a tokenizer with the default language (English)
    pub fn new() -> Result<Self> {
        Self::with_language("en")
    }

    /// Create a tokenizer for a specific language code
    pub fn with_language(code: &str) -> Result<Self> {
        let rules = loader::get_rules(code)?;
        Ok(Self { rules })
    }

    /// Language code this tokenizer was built for
    pub fn language(&self) -> &str {
        self.rules.code()
    }

    /// Split raw text into trimmed, non-empty sentences in document order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = self.rules.strip_dividers(text);
        scanner::scan(&cleaned, &self.rules)
            .into_iter()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect()
    }
}
