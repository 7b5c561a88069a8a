// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding and fetching the corpus.
//!
//! The corpus lives next to the page: take the page path, drop its last
//! segment, append `search.json`. Fetching is the widget's one suspending
//! operation. In the browser it is an HTTP GET; natively it reads a file from
//! a site directory. Both go through [`CorpusSource`].
//!
//! There is no retry and no timeout. A failed load is reported once and the
//! widget stays in its loading state.

use crate::corpus::Corpus;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} is not a valid search corpus: {source}")]
    Parse {
        url: String,
        source: serde_json::Error,
    },
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the corpus lives relative to a page.
///
/// ```
/// use searchbox::loader::search_index_url;
///
/// assert_eq!(search_index_url("/docs/guide/intro.html", "search.json"), "/docs/guide/search.json");
/// assert_eq!(search_index_url("/docs/guide/", "search.json"), "/docs/guide/search.json");
/// assert_eq!(search_index_url("/", "search.json"), "/search.json");
/// ```
///
/// A path with no `/` at all is kept whole, matching what a browser would do
/// with the same rule.
pub fn search_index_url(page_path: &str, index_file: &str) -> String {
    let directory = match page_path.rfind('/') {
        Some(at) => &page_path[..at],
        None => page_path,
    };
    format!("{directory}/{index_file}")
}

/// Fetches the raw corpus text for a resolved URL.
pub trait CorpusSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, LoadError>>;
}

/// Resolve, fetch and parse the corpus for the page at `page_path`.
pub async fn fetch_corpus<S: CorpusSource>(
    source: &S,
    page_path: &str,
    index_file: &str,
) -> Result<Corpus, LoadError> {
    let url = search_index_url(page_path, index_file);
    log::debug!("fetching search corpus from {url}");
    let body = source.fetch(&url).await?;
    Corpus::from_json(&body).map_err(|source| LoadError::Parse { url, source })
}

/// Serves URLs out of a directory on disk, the way a static file server
/// would: `/docs/search.json` → `<root>/docs/search.json`.
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, url: &str) -> PathBuf {
        self.root.join(url.trim_start_matches('/'))
    }
}

impl CorpusSource for FileSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, LoadError>> {
        let path = self.resolve(url);
        async move { std::fs::read_to_string(&path).map_err(|source| LoadError::Io { path, source }) }
    }
}
