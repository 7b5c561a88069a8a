// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget configuration.
//!
//! Every knob has a default that reproduces the stock widget, so an empty
//! options object (or no options at all) is the common case. In the browser
//! the options come from JavaScript through `serde-wasm-bindgen`; the CLI reads
//! them from a JSON file.

use serde::{Deserialize, Serialize};

/// Snippet windowing parameters, in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetConfig {
    /// A match must start past this offset before we window around it.
    pub lead_threshold: usize,
    /// Characters kept before the match start.
    pub context_before: usize,
    /// Characters kept after the match start.
    pub context_after: usize,
    /// Length of the leading preview when we don't window.
    pub preview_chars: usize,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        Self {
            lead_threshold: 50,
            context_before: 30,
            context_after: 120,
            preview_chars: 150,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Element id of the search `<input>`.
    pub input_id: String,
    /// Element id of the results container.
    pub results_id: String,
    /// Class toggled on the results container when it is open.
    pub active_class: String,
    /// File name appended to the page directory to locate the corpus.
    pub index_file: String,
    /// Trimmed queries shorter than this close the panel.
    pub min_query_chars: usize,
    /// Rendered results cap.
    pub max_results: usize,
    pub title_boost: f64,
    pub content_boost: f64,
    pub loading_message: String,
    pub empty_message: String,
    /// Keystroke debounce in milliseconds. 0 handles every keystroke inline.
    pub debounce_ms: u32,
    /// `log` level for the browser console logger.
    pub log_level: String,
    pub snippet: SnippetConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            input_id: "search-input".to_string(),
            results_id: "search-results".to_string(),
            active_class: "active".to_string(),
            index_file: "search.json".to_string(),
            min_query_chars: 2,
            max_results: 8,
            title_boost: 10.0,
            content_boost: 1.0,
            loading_message: "Loading search...".to_string(),
            empty_message: "No results found".to_string(),
            debounce_ms: 0,
            log_level: "info".to_string(),
            snippet: SnippetConfig::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON options object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// `log_level` as a filter, falling back to `Info` on garbage.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
