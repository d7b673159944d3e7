//! Language rule loading
//!
//! Rule assets are embedded at compile time and compiled into runtime
//! tables exactly once per process. A failed load is cached and re-surfaced
//! on every later call instead of being retried or silently downgraded.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::config::LanguageConfig;
use crate::error::{Result, SegmentError};
use crate::rules::SegmentRules;

/// Embedded rule assets, keyed by every code they answer to
const EMBEDDED: &[(&[&str], &str)] = &[(
    &["en", "english"],
    include_str!("../configs/languages/english.toml"),
)];

type RulesMap = HashMap<&'static str, Arc<SegmentRules>>;

static LOADED: OnceLock<std::result::Result<RulesMap, SegmentError>> = OnceLock::new();

/// Fetch compiled rules for a language code.
///
/// The first call compiles every embedded asset; later calls are lookups.
pub fn get_rules(code: &str) -> Result<Arc<SegmentRules>> {
    let loaded = LOADED.get_or_init(load_embedded);
    let map = loaded.as_ref().map_err(Clone::clone)?;
    map.get(code)
        .cloned()
        .ok_or_else(|| SegmentError::UnsupportedLanguage {
            code: code.to_string(),
        })
}

/// Explicit idempotent initialization check for a language.
///
/// Callers that want to fail fast before handling any text can invoke this
/// once; it performs the same load as [`get_rules`] and discards the rules.
pub fn ensure_loaded(code: &str) -> Result<()> {
    get_rules(code).map(|_| ())
}

fn load_embedded() -> std::result::Result<RulesMap, SegmentError> {
    let mut map = RulesMap::new();
    for (codes, asset) in EMBEDDED {
        let primary = codes[0];
        let config: LanguageConfig =
            toml::from_str(asset).map_err(|e| SegmentError::RulesParse {
                code: primary.to_string(),
                reason: e.to_string(),
            })?;
        let rules = Arc::new(SegmentRules::from_config(&config)?);
        for &code in *codes {
            map.insert(code, Arc::clone(&rules));
        }
    }
    Ok(map)
}
