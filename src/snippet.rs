// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Preview snippets for the results dropdown.
//!
//! This is windowing, not highlighting. Find where the query first shows up in
//! the page text; if that is far enough in that the reader wouldn't see it in a
//! plain leading preview, cut a window around it. Otherwise show the start of
//! the page.
//!
//! All offsets are in `char`s, never bytes, so a window can't split a UTF-8
//! sequence.

use crate::config::SnippetConfig;

pub const ELLIPSIS: &str = "...";

/// Case-insensitive position of the first occurrence of `needle`, in chars.
///
/// Each char is folded to the first char of its lowercase mapping, which keeps
/// folded and original text the same length (`İ` lowercases to two chars;
/// we keep only the `i`). An empty needle matches at 0.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let hay: Vec<char> = haystack.chars().map(fold).collect();
    let pin: Vec<char> = needle.chars().map(fold).collect();

    if pin.is_empty() {
        return Some(0);
    }
    if pin.len() > hay.len() {
        return None;
    }
    hay.windows(pin.len()).position(|window| window == pin.as_slice())
}

#[inline]
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Build the preview shown under a result title.
pub fn extract(content: &str, query: &str, config: &SnippetConfig) -> String {
    let chars: Vec<char> = content.chars().collect();

    if let Some(at) = find_case_insensitive(content, query) {
        if at > config.lead_threshold {
            let start = at.saturating_sub(config.context_before);
            let end = (at + config.context_after).min(chars.len());
            let window: String = chars[start..end].iter().collect();
            return format!("{ELLIPSIS}{window}{ELLIPSIS}");
        }
    }

    if chars.len() > config.preview_chars {
        let lead: String = chars[..config.preview_chars].iter().collect();
        return format!("{lead}{ELLIPSIS}");
    }

    content.to_string()
}
