// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The documents a site publishes for search.
//!
//! A corpus is whatever the site generator wrote to `search.json`: an ordered
//! array of `{url, title, content}` objects. Order matters - it is the
//! tie-breaker when two pages score the same - so we keep the `Vec` and build
//! a url lookup on the side instead of collecting into a map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One indexed page.
///
/// `url` doubles as the index reference: matches come back as urls and are
/// resolved here. Extra fields in the JSON (dates, tags, whatever the theme
/// emits) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub title: String,
    /// Plain text. Snippets are cut from this verbatim.
    pub content: String,
}

impl Document {
    pub fn new(url: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// The loaded document set, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
    by_url: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus, indexing documents by url.
    ///
    /// With duplicate urls the first document keeps the lookup slot; later
    /// ones stay in the ordered list (and in the index) but can never be
    /// rendered. The widget shows each url at most once.
    pub fn new(docs: Vec<Document>) -> Self {
        let mut by_url = HashMap::with_capacity(docs.len());
        for (position, doc) in docs.iter().enumerate() {
            if by_url.contains_key(&doc.url) {
                log::warn!("duplicate url in search corpus: {}", doc.url);
                continue;
            }
            by_url.insert(doc.url.clone(), position);
        }
        Self { docs, by_url }
    }

    /// Parse the `search.json` payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let docs: Vec<Document> = serde_json::from_str(json)?;
        Ok(Self::new(docs))
    }

    pub fn get(&self, url: &str) -> Option<&Document> {
        self.by_url.get(url).map(|&position| &self.docs[position])
    }

    /// Corpus position of the document with this url.
    pub fn position(&self, url: &str) -> Option<usize> {
        self.by_url.get(url).copied()
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
