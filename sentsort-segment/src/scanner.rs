//! Boundary scanning
//!
//! Single forward pass over the text. A terminator run opens a boundary
//! candidate; the candidate is accepted only when, after any trailing
//! closing enclosures, the next character is whitespace or end of text,
//! and the token before a lone period is not an abbreviation.

use crate::rules::SegmentRules;

/// Split `text` into sentence slices in document order.
///
/// Slices are not trimmed here; the tokenizer adapter owns trimming and
/// empty filtering. Text without any accepted boundary comes back as a
/// single slice.
pub fn scan<'t>(text: &'t str, rules: &SegmentRules) -> Vec<&'t str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        if !rules.is_terminator(chars[i].1) {
            i += 1;
            continue;
        }

        // Collapse a run of terminators (ellipses, "?!") into one candidate.
        let mut run_end = i;
        while run_end + 1 < chars.len() && rules.is_terminator(chars[run_end + 1].1) {
            run_end += 1;
        }

        let lone_period = run_end == i && chars[i].1 == '.';
        if lone_period && rules.is_abbreviation(&token_before(&chars, i)) {
            i = run_end + 1;
            continue;
        }

        // Closing quotes and brackets after the run belong to this sentence.
        let mut after = run_end + 1;
        while after < chars.len() && rules.is_closer(chars[after].1) {
            after += 1;
        }

        let at_break = after >= chars.len() || chars[after].1.is_whitespace();
        if !at_break {
            // Mid-token period ("9a.m", "3.5") or terminator glued to the
            // next word; not a boundary.
            i = run_end + 1;
            continue;
        }

        let end = if after < chars.len() {
            chars[after].0
        } else {
            text.len()
        };
        sentences.push(&text[start..end]);

        while after < chars.len() && chars[after].1.is_whitespace() {
            after += 1;
        }
        start = if after < chars.len() {
            chars[after].0
        } else {
            text.len()
        };
        i = after;
    }

    if start < text.len() && !text[start..].trim().is_empty() {
        sentences.push(&text[start..]);
    }

    sentences
}

/// The token immediately before position `i`, for abbreviation checks.
///
/// Walks back over alphanumerics and internal periods; anything else
/// (whitespace, quotes, start of text) ends the token.
fn token_before(chars: &[(usize, char)], i: usize) -> String {
    let mut collected = Vec::new();
    let mut j = i;
    while j > 0 {
        let ch = chars[j - 1].1;
        if ch.is_alphanumeric() || ch == '.' {
            collected.push(ch);
            j -= 1;
        } else {
            break;
        }
    }
    collected.into_iter().rev().collect()
}
