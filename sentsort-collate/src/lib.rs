//! Collation key derivation and stable sentence sorting
//!
//! This crate defines the comparison policy for alphabetical sentence
//! ordering: case priority, quote handling, and the key extraction that
//! drives a stable sort. It has no opinion about where sentences come from.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod key;
pub mod sorter;

// Re-export key types
pub use config::{CasePriority, CollationConfig, CollationConfigBuilder};
pub use error::{CollateError, Result};
pub use key::SortKey;
pub use sorter::sort;
