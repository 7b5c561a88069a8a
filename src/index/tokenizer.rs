// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text to terms.
//!
//! Indexed text and query terms must go through the same normalization or
//! nothing matches. Both end up here: split on anything that isn't
//! alphanumeric, fold case and diacritics, drop stop words.

use std::collections::HashSet;
use std::sync::LazyLock;
#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Words too common to be worth a posting list.
const STOP_WORDS: &[&str] = &[
    "a", "able", "about", "across", "after", "all", "almost", "also", "am", "among", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot", "could",
    "dear", "did", "do", "does", "either", "else", "ever", "every", "for", "from", "get", "got",
    "had", "has", "have", "he", "her", "hers", "him", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "just", "least", "let", "like", "likely", "may", "me", "might",
    "most", "must", "my", "neither", "no", "nor", "not", "of", "off", "often", "on", "only", "or",
    "other", "our", "own", "rather", "said", "say", "says", "she", "should", "since", "so",
    "some", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "tis", "to", "too", "twas", "us", "wants", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "yet", "you", "your",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Lowercase, strip diacritics, collapse whitespace.
///
/// - "café" → "cafe"
/// - "naïve" → "naive"
/// - "  Two   Words " → "two words"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Without `unicode-normalization` only case and whitespace are folded.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Nonspacing marks left over after NFD decomposition.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

fn split_words(text: &str, keep: fn(char) -> bool) -> impl Iterator<Item = String> + '_ {
    text.split(move |c: char| !keep(c))
        .filter(|word| !word.is_empty())
        .map(normalize)
        .filter(|word| !word.is_empty())
}

/// Split text into index terms, in order of appearance. Duplicates are kept;
/// the caller counts them.
pub fn tokenize(text: &str) -> Vec<String> {
    split_words(text, char::is_alphanumeric)
        .filter(|word| !is_stop_word(word))
        .collect()
}

/// Split one query term at the same boundaries as [`tokenize`], keeping `*`
/// inside the pieces. Stop words are left in; the parser decides.
///
/// - "node.js*" → ["node", "js*"]
/// - "Rust's" → ["rust", "s"]
/// - "c++*" → ["c*"]
pub fn split_query_term(term: &str) -> Vec<String> {
    let mut pieces: Vec<String> = Vec::new();
    for piece in split_words(term, |c| c.is_alphanumeric() || c == '*') {
        match pieces.last_mut() {
            // A stranded wildcard belongs to the piece before it
            Some(last) if piece.chars().all(|c| c == '*') => {
                if !last.ends_with('*') {
                    last.push('*');
                }
            }
            _ => pieces.push(piece),
        }
    }
    pieces
}
