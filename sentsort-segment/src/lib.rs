//! Rule-based sentence boundary detection backend
//!
//! This crate turns raw text into an ordered sequence of trimmed sentence
//! strings. Boundary decisions come from per-language rule assets (TOML,
//! embedded at compile time and loaded once per process); the public
//! [`Tokenizer`] adapts those decisions into the sentence values the rest
//! of the system consumes.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod loader;
pub mod rules;
pub mod scanner;
pub mod tokenizer;

// Re-export key types
pub use config::LanguageConfig;
pub use error::{Result, SegmentError};
pub use loader::{ensure_loaded, get_rules};
pub use rules::SegmentRules;
pub use tokenizer::Tokenizer;
