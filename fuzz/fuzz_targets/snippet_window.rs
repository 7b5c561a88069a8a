// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.
//!
//! Content and query are arbitrary Unicode, the window parameters arbitrary
//! small numbers. Extraction must never slice through a character and must
//! stay within its length bound.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use searchbox::snippet::{extract, ELLIPSIS};
use searchbox::SnippetConfig;

#[derive(Debug, Arbitrary)]
struct Input {
    content: String,
    query: String,
    lead_threshold: u8,
    context_before: u8,
    context_after: u8,
    preview_chars: u8,
}

fuzz_target!(|input: Input| {
    let config = SnippetConfig {
        lead_threshold: usize::from(input.lead_threshold),
        context_before: usize::from(input.context_before),
        context_after: usize::from(input.context_after),
        preview_chars: usize::from(input.preview_chars),
    };

    let snippet = extract(&input.content, &input.query, &config);

    let widest = (config.context_before + config.context_after).max(config.preview_chars);
    assert!(
        snippet.chars().count() <= widest + 2 * ELLIPSIS.len(),
        "snippet of {} chars exceeds bound {}",
        snippet.chars().count(),
        widest
    );
});
