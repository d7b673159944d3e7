//! Stable collation-aware sorting
//!
//! Decorate-sort-undecorate over [`SortKey`]: keys are derived once per
//! sentence, the pairs are sorted with the standard library's stable sort,
//! and the original sentence values are emitted unchanged.

use crate::config::CollationConfig;
use crate::key::SortKey;

/// Sort sentences under the given collation policy.
///
/// The output is a permutation of the input: stripping and case folding
/// apply only to the derived keys. Key-equal sentences keep their input
/// order, including under `reverse`.
pub fn sort(sentences: Vec<String>, config: &CollationConfig) -> Vec<String> {
    let mut keyed: Vec<(SortKey, String)> = sentences
        .into_iter()
        .map(|sentence| (SortKey::derive(&sentence, config), sentence))
        .collect();

    if config.reverse {
        // Comparator inversion on the key only; Vec::sort_by is stable, so
        // equal keys are left in input order rather than flipped.
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
    }

    keyed.into_iter().map(|(_, sentence)| sentence).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CasePriority, CollationConfig};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_and_singleton_inputs() {
        let config = CollationConfig::default();
        assert!(sort(Vec::new(), &config).is_empty());
        assert_eq!(sort(strings(&["hello"]), &config), strings(&["hello"]));
    }

    #[test]
    fn lower_first_groups_case_variants_lowercase_leading() {
        let config = CollationConfig::default();
        let input = strings(&["Banana", "banana", "Apple", "apple", "Cherry", "cherry"]);
        let expected = strings(&["apple", "Apple", "banana", "Banana", "cherry", "Cherry"]);
        assert_eq!(sort(input, &config), expected);
    }

    #[test]
    fn upper_first_groups_case_variants_uppercase_leading() {
        let config = CollationConfig::builder()
            .case_priority(CasePriority::UpperFirst)
            .build();
        let input = strings(&["banana", "Banana", "apple", "Apple"]);
        let expected = strings(&["Apple", "apple", "Banana", "banana"]);
        assert_eq!(sort(input, &config), expected);
    }

    #[test]
    fn case_insensitive_preserves_input_order_among_variants() {
        let config = CollationConfig::builder()
            .case_priority(CasePriority::CaseInsensitive)
            .build();
        let input = strings(&["Apple", "banana", "apple", "Banana", "CHERRY"]);
        let expected = strings(&["Apple", "apple", "banana", "Banana", "CHERRY"]);
        assert_eq!(sort(input, &config), expected);
    }

    #[test]
    fn tie_break_scenario_both_directions() {
        let lower = CollationConfig::default();
        assert_eq!(
            sort(strings(&["apple.", "Apple."]), &lower),
            strings(&["apple.", "Apple."])
        );

        let upper = CollationConfig::builder()
            .case_priority(CasePriority::UpperFirst)
            .build();
        assert_eq!(
            sort(strings(&["apple.", "Apple."]), &upper),
            strings(&["Apple.", "apple."])
        );
    }

    #[test]
    fn quoted_sentences_group_with_unquoted_equals() {
        let config = CollationConfig::builder()
            .case_priority(CasePriority::UpperFirst)
            .ignore_quotes(true)
            .build();
        let input = strings(&["'Cherry'", "\"Apple\"", "banana", "'apple'"]);
        let expected = strings(&["\"Apple\"", "'apple'", "banana", "'Cherry'"]);
        assert_eq!(sort(input, &config), expected);
    }

    #[test]
    fn quote_characters_count_when_not_ignored() {
        let config = CollationConfig::builder().ignore_quotes(false).build();
        // '"' (0x22) folds to itself and precedes any letter, so the quoted
        // variant leads despite identical letters.
        let output = sort(strings(&["apple", "\"apple\""]), &config);
        assert_eq!(output, strings(&["\"apple\"", "apple"]));
    }

    #[test]
    fn reverse_inverts_order_but_not_tie_stability() {
        let config = CollationConfig::builder()
            .case_priority(CasePriority::CaseInsensitive)
            .reverse(true)
            .build();
        let input = strings(&["Cherry", "Apple", "banana", "APPLE"]);
        // "Apple" and "APPLE" share a key; reverse must not swap them.
        let expected = strings(&["Cherry", "banana", "Apple", "APPLE"]);
        assert_eq!(sort(input, &config), expected);
    }

    #[test]
    fn duplicates_are_preserved_exactly() {
        let config = CollationConfig::default();
        let input = strings(&["b.", "a.", "b.", "a."]);
        assert_eq!(sort(input, &config), strings(&["a.", "a.", "b.", "b."]));
    }

    #[test]
    fn idempotent_under_fixed_config() {
        let config = CollationConfig::default();
        let input = strings(&["Cherry!", "'apple'", "Banana?", "apple", "banana"]);
        let once = sort(input, &config);
        let twice = sort(once.clone(), &config);
        assert_eq!(once, twice);
    }
}
