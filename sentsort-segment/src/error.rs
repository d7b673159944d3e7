//! Segmentation error types
//!
//! Rule-asset failures are cached by the loader and re-surfaced on every
//! call, so the variants are `Clone`.

use thiserror::Error;

/// Errors raised while loading or validating language rule assets
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// No rule asset exists for the requested language code
    #[error("language '{code}' is not supported")]
    UnsupportedLanguage {
        /// The language code requested by the caller
        code: String,
    },

    /// The embedded rule asset failed to parse
    #[error("failed to parse rules for '{code}': {reason}")]
    RulesParse {
        /// The language code whose asset failed
        code: String,
        /// The underlying TOML error, stringified
        reason: String,
    },

    /// The rule asset parsed but is not usable
    #[error("invalid rules for '{code}': {reason}")]
    RulesInvalid {
        /// The language code whose asset failed
        code: String,
        /// Which validation check failed
        reason: String,
    },
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;
