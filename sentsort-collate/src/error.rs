//! Collation error types

use thiserror::Error;

/// Errors raised while validating collation configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollateError {
    /// Unrecognized case-priority name
    #[error("unknown case priority '{value}' (expected one of: {expected})")]
    UnknownCasePriority {
        /// The value that failed to parse
        value: String,
        /// Comma-separated list of accepted names
        expected: &'static str,
    },
}

/// Result type for collation operations
pub type Result<T> = std::result::Result<T, CollateError>;
