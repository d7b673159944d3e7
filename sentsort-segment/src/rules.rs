//! Runtime rule tables
//!
//! [`SegmentRules`] is the compiled, lookup-oriented form of a
//! [`LanguageConfig`]: hash tables for terminator/closer checks, a
//! lowercased abbreviation set, and pre-compiled divider regexes.

use std::borrow::Cow;
use std::collections::HashSet;

use regex::Regex;

use crate::config::LanguageConfig;
use crate::error::{Result, SegmentError};

/// Compiled segmentation rules for one language
#[derive(Debug)]
pub struct SegmentRules {
    code: String,
    terminators: HashSet<char>,
    closers: HashSet<char>,
    abbreviations: HashSet<String>,
    dividers: Vec<Regex>,
}

impl SegmentRules {
    /// Compile rules from a validated configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        let code = config.metadata.code.clone();
        let invalid = |reason: String| SegmentError::RulesInvalid {
            code: code.clone(),
            reason,
        };

        config.validate().map_err(&invalid)?;

        let terminators: HashSet<char> = config.terminators.chars.iter().copied().collect();

        // Both halves of a symmetric pair close; otherwise only the closer.
        let closers: HashSet<char> = config
            .enclosures
            .pairs
            .iter()
            .flat_map(|pair| {
                if pair.symmetric {
                    vec![pair.open]
                } else {
                    vec![pair.close]
                }
            })
            .collect();

        let abbreviations: HashSet<String> = config
            .abbreviations
            .categories
            .values()
            .flatten()
            .map(|abbr| abbr.trim_end_matches('.').to_lowercase())
            .collect();

        let mut dividers = Vec::with_capacity(config.dividers.patterns.len());
        for pattern in &config.dividers.patterns {
            let regex = Regex::new(pattern).map_err(|e| {
                invalid(format!("bad divider pattern '{pattern}': {e}"))
            })?;
            dividers.push(regex);
        }

        Ok(Self {
            code,
            terminators,
            closers,
            abbreviations,
            dividers,
        })
    }

    /// Language code these rules were compiled for
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether `ch` may terminate a sentence
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// Whether `ch` is a closing enclosure that may trail a terminator
    #[inline]
    pub fn is_closer(&self, ch: char) -> bool {
        self.closers.contains(&ch)
    }

    /// Whether the token before a period is a known abbreviation.
    ///
    /// Matching is case-insensitive and ignores the trailing period that
    /// triggered the check. Two token shapes count without being listed:
    /// single alphabetic characters (initials, "J. Smith") and tokens with
    /// internal periods ("U.S.A").
    pub fn is_abbreviation(&self, token: &str) -> bool {
        let token = token.trim_end_matches('.');
        if token.is_empty() {
            return false;
        }

        let mut chars = token.chars();
        if let (Some(first), None) = (chars.next(), chars.next()) {
            if first.is_alphabetic() {
                return true;
            }
        }

        if token.contains('.') {
            return true;
        }

        self.abbreviations.contains(&token.to_lowercase())
    }

    /// Remove divider lines before segmentation
    pub fn strip_dividers<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut result = Cow::Borrowed(text);
        for regex in &self.dividers {
            if regex.is_match(&result) {
                result = Cow::Owned(regex.replace_all(&result, "").into_owned());
            }
        }
        result
    }
}
