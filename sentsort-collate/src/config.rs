//! Collation configuration
//!
//! A `CollationConfig` is an immutable value describing how sentences
//! compare: which case sorts first on a tie, and which characters are
//! invisible to the comparison key. Dynamic input (e.g. a mode name read
//! from user-facing configuration) is validated at this boundary so that
//! sorting itself never fails.

use crate::error::{CollateError, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tie-break rule for sentences that are equal ignoring case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CasePriority {
    /// Lowercase letters sort before their uppercase counterparts
    #[default]
    LowerFirst,
    /// Uppercase letters sort before their lowercase counterparts
    UpperFirst,
    /// No tie-break; input order is preserved among case-variants
    CaseInsensitive,
}

const CASE_PRIORITY_NAMES: &str = "lower-first, upper-first, case-insensitive";

impl CasePriority {
    /// Canonical name used in configuration surfaces
    pub fn as_str(&self) -> &'static str {
        match self {
            CasePriority::LowerFirst => "lower-first",
            CasePriority::UpperFirst => "upper-first",
            CasePriority::CaseInsensitive => "case-insensitive",
        }
    }
}

impl fmt::Display for CasePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasePriority {
    type Err = CollateError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lower-first" => Ok(CasePriority::LowerFirst),
            "upper-first" => Ok(CasePriority::UpperFirst),
            "case-insensitive" => Ok(CasePriority::CaseInsensitive),
            other => Err(CollateError::UnknownCasePriority {
                value: other.to_string(),
                expected: CASE_PRIORITY_NAMES,
            }),
        }
    }
}

/// Immutable collation policy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollationConfig {
    /// Tie-break rule for case-insensitive duplicates
    pub case_priority: CasePriority,
    /// Strip quotation marks (straight and typographic) from the key
    pub ignore_quotes: bool,
    /// Skip leading non-alphabetic characters when deriving the key
    pub ignore_leading_nonalpha: bool,
    /// Invert the ordering; key-equal elements keep input order
    pub reverse: bool,
}

impl Default for CollationConfig {
    fn default() -> Self {
        Self {
            case_priority: CasePriority::LowerFirst,
            ignore_quotes: true,
            ignore_leading_nonalpha: false,
            reverse: false,
        }
    }
}

impl CollationConfig {
    /// Create a builder
    pub fn builder() -> CollationConfigBuilder {
        CollationConfigBuilder::default()
    }
}

/// Builder for [`CollationConfig`]
#[derive(Debug, Default)]
pub struct CollationConfigBuilder {
    config: CollationConfig,
}

impl CollationConfigBuilder {
    /// Set the case priority
    pub fn case_priority(mut self, priority: CasePriority) -> Self {
        self.config.case_priority = priority;
        self
    }

    /// Set the case priority from its configuration name, validating it
    pub fn case_priority_name(mut self, name: &str) -> Result<Self> {
        self.config.case_priority = name.parse()?;
        Ok(self)
    }

    /// Strip quotation marks from comparison keys
    pub fn ignore_quotes(mut self, ignore: bool) -> Self {
        self.config.ignore_quotes = ignore;
        self
    }

    /// Skip leading non-alphabetic characters in comparison keys
    pub fn ignore_leading_nonalpha(mut self, ignore: bool) -> Self {
        self.config.ignore_leading_nonalpha = ignore;
        self
    }

    /// Invert the sort order
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.config.reverse = reverse;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CollationConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_case_priority_names() {
        assert_eq!(
            "lower-first".parse::<CasePriority>().unwrap(),
            CasePriority::LowerFirst
        );
        assert_eq!(
            "upper-first".parse::<CasePriority>().unwrap(),
            CasePriority::UpperFirst
        );
        assert_eq!(
            "case-insensitive".parse::<CasePriority>().unwrap(),
            CasePriority::CaseInsensitive
        );
    }

    #[test]
    fn rejects_unknown_case_priority() {
        let err = "alphabetical".parse::<CasePriority>().unwrap_err();
        match err {
            CollateError::UnknownCasePriority { value, .. } => {
                assert_eq!(value, "alphabetical");
            }
        }
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for priority in [
            CasePriority::LowerFirst,
            CasePriority::UpperFirst,
            CasePriority::CaseInsensitive,
        ] {
            assert_eq!(priority.as_str().parse::<CasePriority>().unwrap(), priority);
        }
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let config = CollationConfig::default();
        assert_eq!(config.case_priority, CasePriority::LowerFirst);
        assert!(config.ignore_quotes);
        assert!(!config.ignore_leading_nonalpha);
        assert!(!config.reverse);
    }

    #[test]
    fn builder_validates_priority_name() {
        let config = CollationConfig::builder()
            .case_priority_name("upper-first")
            .unwrap()
            .ignore_quotes(false)
            .reverse(true)
            .build();
        assert_eq!(config.case_priority, CasePriority::UpperFirst);
        assert!(!config.ignore_quotes);
        assert!(config.reverse);

        assert!(CollationConfig::builder()
            .case_priority_name("loudest-first")
            .is_err());
    }
}
