// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Clause term → vocabulary terms.
//!
//! A clause names one term but can match many: `guid*` matches `guide` and
//! `guides`, `rust~1` matches `rest` and `bust`. Expansion walks the sorted
//! vocabulary and returns every term the clause accepts.
//!
//! Trailing-only wildcards are the hot path (the widget appends `*` to every
//! keystroke), so they get a range scan instead of a full pass.

use crate::query::Clause;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Vocabulary terms matched by a clause, in sorted order.
pub fn expand<'v, T>(clause: &Clause, vocabulary: &'v BTreeMap<String, T>) -> Vec<&'v str> {
    let term = clause.term.as_str();

    if clause.has_wildcard() {
        let body = term.trim_end_matches('*');
        if !body.contains('*') {
            return prefix_scan(body, vocabulary);
        }
        return vocabulary
            .keys()
            .filter(|candidate| glob_match(term, candidate))
            .map(String::as_str)
            .collect();
    }

    if clause.edit_distance > 0 {
        return vocabulary
            .keys()
            .filter(|candidate| within_edits(term, candidate, clause.edit_distance))
            .map(String::as_str)
            .collect();
    }

    vocabulary
        .get_key_value(term)
        .map(|(key, _)| vec![key.as_str()])
        .unwrap_or_default()
}

fn prefix_scan<'v, T>(prefix: &str, vocabulary: &'v BTreeMap<String, T>) -> Vec<&'v str> {
    vocabulary
        .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .map(|(key, _)| key.as_str())
        .take_while(|key| key.starts_with(prefix))
        .collect()
}

/// `*` matches any run of characters, including none. No other metacharacters.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0, 0);
    // Position of the last '*' and the text position it was tried against
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        if p < pattern.len() && pattern[p] == '*' {
            backtrack = Some((p, t));
            p += 1;
        } else if p < pattern.len() && pattern[p] == text[t] {
            p += 1;
            t += 1;
        } else if let Some((star, tried)) = backtrack {
            p = star + 1;
            t = tried + 1;
            backtrack = Some((star, tried + 1));
        } else {
            return false;
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}

/// Are `a` and `b` within `max` edits of each other?
///
/// Bounded Levenshtein over chars. The length difference is a lower bound on
/// the distance, so most candidates are rejected before the DP runs; the DP
/// itself gives up as soon as a whole row exceeds `max`.
pub fn within_edits(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return false;
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(substitution);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return false;
        }
    }

    row[b.len()] <= max
}
