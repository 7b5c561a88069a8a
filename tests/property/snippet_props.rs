//! Snippet window properties.

use proptest::prelude::*;
use searchbox::snippet::{extract, find_case_insensitive, ELLIPSIS};
use searchbox::SnippetConfig;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Mixed-script text, including multi-byte characters.
fn content_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,éüßçπ日本語]{0,400}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zé]{1,8}").unwrap()
}

fn strip_ellipses(snippet: &str) -> &str {
    let snippet = snippet.strip_prefix(ELLIPSIS).unwrap_or(snippet);
    snippet.strip_suffix(ELLIPSIS).unwrap_or(snippet)
}

proptest! {
    /// Never panics, and never longer than the widest window plus ellipses.
    #[test]
    fn prop_snippet_is_bounded(content in content_strategy(), query in query_strategy()) {
        let config = SnippetConfig::default();
        let snippet = extract(&content, &query, &config);
        let widest = (config.context_before + config.context_after).max(config.preview_chars);
        prop_assert!(snippet.chars().count() <= widest + 2 * ELLIPSIS.len());
    }

    /// The body of every snippet is a contiguous run of the content.
    #[test]
    fn prop_snippet_is_a_substring(content in content_strategy(), query in query_strategy()) {
        let snippet = extract(&content, &query, &SnippetConfig::default());
        prop_assert!(content.contains(strip_ellipses(&snippet)));
    }

    /// Short content that never matches comes back untouched.
    #[test]
    fn prop_short_content_unchanged(content in "[0-9 ]{0,150}", query in query_strategy()) {
        let snippet = extract(&content, &query, &SnippetConfig::default());
        prop_assert_eq!(snippet, content);
    }

    /// A match deep in the content always lands inside the window.
    #[test]
    fn prop_deep_match_is_visible(
        lead in 51usize..300,
        query in "[a-z]{2,8}",
        tail in "[0-9]{0,200}",
    ) {
        let content = format!("{}{}{}", "-".repeat(lead), query, tail);
        let snippet = extract(&content, &query, &SnippetConfig::default());
        prop_assert!(snippet.starts_with(ELLIPSIS));
        prop_assert!(snippet.contains(&query));
    }

    /// Case-folding search agrees with plain search on lowercase ASCII.
    #[test]
    fn prop_find_agrees_with_ascii(content in "[a-z ]{0,80}", needle in "[a-z]{1,4}") {
        let expected = content.find(&needle);
        prop_assert_eq!(find_case_insensitive(&content, &needle), expected);
        prop_assert_eq!(find_case_insensitive(&content.to_uppercase(), &needle), expected);
    }
}
