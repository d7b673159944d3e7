//! API error types
//!
//! The two fatal conditions callers can branch on: the sentence tokenizer
//! (or its rule assets) is unavailable, or the collation configuration is
//! invalid. Both are detected eagerly, before any text is processed.

use sentsort_collate::CollateError;
use sentsort_segment::SegmentError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The sentence-boundary capability could not be set up
    #[error("tokenizer unavailable: {0}")]
    TokenizerUnavailable(#[from] SegmentError),

    /// The collation configuration is not usable
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] CollateError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
