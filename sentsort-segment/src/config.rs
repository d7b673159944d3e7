//! Language rule asset schema
//!
//! Defines the TOML layout of the per-language rule files under
//! `configs/languages/`, plus the validation run before a config is
//! compiled into runtime [`SegmentRules`](crate::rules::SegmentRules).

use std::collections::HashMap;

use serde::Deserialize;

/// Root language configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageConfig {
    /// Language identity
    pub metadata: Metadata,
    /// Sentence-terminator characters
    pub terminators: Terminators,
    /// Enclosure pairs whose closers may trail a terminator
    #[serde(default)]
    pub enclosures: Enclosures,
    /// Divider-line patterns stripped before segmentation
    #[serde(default)]
    pub dividers: Dividers,
    /// Abbreviations that suppress a period boundary, by category
    #[serde(default)]
    pub abbreviations: Abbreviations,
}

/// Language metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    /// Short language code ("en")
    pub code: String,
    /// Human-readable name
    pub name: String,
}

/// Terminator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Terminators {
    /// Characters that may end a sentence
    pub chars: Vec<char>,
}

/// Enclosure configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Enclosures {
    /// Open/close pairs
    #[serde(default)]
    pub pairs: Vec<EnclosurePair>,
}

/// One enclosure pair
#[derive(Debug, Clone, Deserialize)]
pub struct EnclosurePair {
    /// Opening character
    pub open: char,
    /// Closing character
    pub close: char,
    /// Same character opens and closes (straight quotes)
    #[serde(default)]
    pub symmetric: bool,
}

/// Divider configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dividers {
    /// Regex patterns for separator lines removed before segmentation
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Abbreviation configuration; category names are informational
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Abbreviations {
    /// Abbreviations grouped by category
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl LanguageConfig {
    /// Validate the configuration before compiling runtime rules
    pub(crate) fn validate(&self) -> std::result::Result<(), String> {
        if self.metadata.code.is_empty() {
            return Err("empty language code".to_string());
        }

        if self.terminators.chars.is_empty() {
            return Err("no terminator characters defined".to_string());
        }

        for pair in &self.enclosures.pairs {
            if pair.symmetric && pair.open != pair.close {
                return Err(format!(
                    "symmetric enclosure with distinct open '{}' and close '{}'",
                    pair.open, pair.close
                ));
            }
        }

        Ok(())
    }
}
