// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the results panel shows.
//!
//! The controller decides *what* to show as a [`ResultsView`]; this module
//! turns that into markup. Keeping the two apart lets tests assert on the view
//! without string-matching HTML, and lets the CLI print the same view to a
//! terminal.
//!
//! Every document-derived string is escaped. Titles and snippets are plain
//! text from the corpus and may contain `<`.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

/// One rendered hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultItem {
    pub url: String,
    pub title: String,
    pub snippet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "camelCase")]
pub enum ResultsView {
    /// Panel closed and emptied.
    Cleared,
    /// Query arrived before the index was ready.
    Loading,
    /// The index answered with nothing.
    NoResults,
    /// Ranked hits, already capped. May be empty if every lookup missed.
    Results(Vec<ResultItem>),
}

impl ResultsView {
    /// Whether the panel is open while showing this view.
    pub fn is_visible(&self) -> bool {
        !matches!(self, ResultsView::Cleared)
    }

    pub fn items(&self) -> &[ResultItem] {
        match self {
            ResultsView::Results(items) => items,
            _ => &[],
        }
    }
}

/// Fixed texts for the two placeholder views.
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    pub loading: &'a str,
    pub empty: &'a str,
}

const MESSAGE_STYLE: &str = "padding: 1rem; color: #666;";

fn message_html(text: &str) -> String {
    format!(
        r#"<div class="search-message" style="{MESSAGE_STYLE}">{}</div>"#,
        encode_text(text)
    )
}

fn item_html(item: &ResultItem) -> String {
    format!(
        concat!(
            r#"<a href="{}">"#,
            r#"<div class="result-title">{}</div>"#,
            r#"<div class="result-preview">{}</div>"#,
            "</a>"
        ),
        encode_double_quoted_attribute(&item.url),
        encode_text(&item.title),
        encode_text(&item.snippet),
    )
}

/// Markup for the results container's `innerHTML`.
pub fn to_html(view: &ResultsView, messages: Messages<'_>) -> String {
    match view {
        ResultsView::Cleared => String::new(),
        ResultsView::Loading => message_html(messages.loading),
        ResultsView::NoResults => message_html(messages.empty),
        ResultsView::Results(items) => items.iter().map(item_html).collect(),
    }
}
