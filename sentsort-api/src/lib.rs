//! Public API for sentence tokenization and collation-aware sorting
//!
//! A [`SentenceSorter`] splits raw text into sentences and reorders them
//! alphabetically under a configurable collation policy. Construction
//! validates the language rule assets and the collation configuration;
//! after that, sorting is a pure, infallible transform of its input.
//!
//! ```
//! use sentsort_api::SentenceSorter;
//!
//! let sorter = SentenceSorter::new().unwrap();
//! let sorted = sorter.sort_text("banana. Apple. cherry.");
//! assert_eq!(sorted, vec!["Apple.", "banana.", "cherry."]);
//! ```

#![warn(missing_docs)]

pub mod error;

use sentsort_collate as collate;
use sentsort_segment::Tokenizer;

// Re-export key types
pub use error::{ApiError, Result};
pub use sentsort_collate::{CasePriority, CollationConfig, CollationConfigBuilder};

/// Main entry point: tokenize text into sentences, then sort them
///
/// Holds a tokenizer for one language and an immutable collation policy.
/// Identical input text always yields identical output ordering.
#[derive(Debug, Clone)]
pub struct SentenceSorter {
    tokenizer: Tokenizer,
    config: CollationConfig,
}

impl SentenceSorter {
    /// Create a sorter with the default language and collation policy
    /// (English, lowercase-first, quotes ignored)
    pub fn new() -> Result<Self> {
        Self::with_config(CollationConfig::default())
    }

    /// Create a sorter with a custom collation policy and default language
    pub fn with_config(config: CollationConfig) -> Result<Self> {
        let tokenizer = Tokenizer::new()?;
        Ok(Self { tokenizer, config })
    }

    /// Create a builder
    pub fn builder() -> SentenceSorterBuilder {
        SentenceSorterBuilder::default()
    }

    /// Split raw text into trimmed sentences in document order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }

    /// Sort an already-tokenized sentence sequence under this policy
    pub fn sort(&self, sentences: Vec<String>) -> Vec<String> {
        collate::sort(sentences, &self.config)
    }

    /// Tokenize `text` and return its sentences in sorted order
    pub fn sort_text(&self, text: &str) -> Vec<String> {
        let sentences = self.tokenize(text);
        log::debug!(
            "tokenized {} bytes into {} sentences",
            text.len(),
            sentences.len()
        );
        let sorted = self.sort(sentences);
        log::debug!("sorted with {:?}", self.config.case_priority);
        sorted
    }

    /// The collation policy in effect
    pub fn config(&self) -> &CollationConfig {
        &self.config
    }

    /// The language code the tokenizer was built for
    pub fn language(&self) -> &str {
        self.tokenizer.language()
    }
}

/// Builder for [`SentenceSorter`]
#[derive(Debug, Default)]
pub struct SentenceSorterBuilder {
    language: Option<String>,
    config: CollationConfigBuilder,
}

impl SentenceSorterBuilder {
    /// Set the tokenizer language code (default "en")
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the case priority
    pub fn case_priority(mut self, priority: CasePriority) -> Self {
        self.config = self.config.case_priority(priority);
        self
    }

    /// Set the case priority from its configuration name, validating it
    pub fn case_priority_name(mut self, name: &str) -> Result<Self> {
        self.config = self.config.case_priority_name(name)?;
        Ok(self)
    }

    /// Strip quotation marks from comparison keys
    pub fn ignore_quotes(mut self, ignore: bool) -> Self {
        self.config = self.config.ignore_quotes(ignore);
        self
    }

    /// Skip leading non-alphabetic characters in comparison keys
    pub fn ignore_leading_nonalpha(mut self, ignore: bool) -> Self {
        self.config = self.config.ignore_leading_nonalpha(ignore);
        self
    }

    /// Invert the sort order
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.config = self.config.reverse(reverse);
        self
    }

    /// Build the sorter, loading rule assets for the configured language
    pub fn build(self) -> Result<SentenceSorter> {
        let tokenizer = match self.language {
            Some(code) => Tokenizer::with_language(&code)?,
            None => Tokenizer::new()?,
        };
        Ok(SentenceSorter {
            tokenizer,
            config: self.config.build(),
        })
    }
}

// Convenience functions

/// Tokenize and sort `text` with the default configuration
pub fn sort_text(text: &str) -> Result<Vec<String>> {
    Ok(SentenceSorter::new()?.sort_text(text))
}

/// Tokenize `text` with the default configuration, without sorting
pub fn tokenize(text: &str) -> Result<Vec<String>> {
    Ok(SentenceSorter::new()?.tokenize(text))
}
