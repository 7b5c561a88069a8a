// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search box for static sites.
//!
//! A site generator writes `search.json` next to its pages: an array of
//! `{url, title, content}` records. This crate turns that file into a live
//! search-as-you-type dropdown. It loads the corpus once, builds an
//! in-memory full-text index, runs a prefix query on every keystroke, and
//! renders the top matches with a preview snippet cut around the first
//! occurrence of the query.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐   ┌───────────┐   ┌──────────────────────────────┐
//! │  loader   │──▶│  corpus   │──▶│ index (IndexBuilder/Searchable)│
//! │ (fetch)   │   │ (records) │   │  query · tokenizer · scoring  │
//! └───────────┘   └───────────┘   └──────────────────────────────┘
//!                                            │ Vec<Match>
//!                                            ▼
//! ┌───────────┐   ┌───────────┐   ┌──────────────────────────────┐
//! │  runtime  │◀─▶│  widget   │──▶│ snippet · render (ResultsView)│
//! │ (browser) │   │ (events)  │   └──────────────────────────────┘
//! └───────────┘   └───────────┘
//!       ▲               ▲
//!       │               └── headless (CLI, tests)
//!       └── web-sys elements, gloo-net fetch
//! ```
//!
//! # Usage
//!
//! ```
//! use searchbox::{Corpus, Document, FullTextBuilder, IndexBuilder, rank};
//!
//! let corpus = Corpus::new(vec![
//!     Document::new("/rust/", "Rust", "Ownership and borrowing."),
//!     Document::new("/go/", "Go", "Goroutines and channels."),
//! ]);
//! let index = FullTextBuilder::default().build(&corpus);
//!
//! let matches = rank(&index, "own");
//! assert_eq!(matches[0].reference, "/rust/");
//! ```
//!
//! In the browser, build with the `wasm` feature and call `mountSearchBox()`
//! from JavaScript; see [`runtime`].

pub mod config;
pub mod corpus;
pub mod headless;
pub mod index;
pub mod loader;
pub mod query;
pub mod render;
pub mod runtime;
pub mod snippet;
pub mod types;
pub mod widget;

#[doc(hidden)]
pub mod testing;

pub use config::{SnippetConfig, WidgetConfig};
pub use corpus::{Corpus, Document};
pub use index::{FullTextBuilder, FullTextIndex, IndexBuilder, Searchable};
pub use loader::{fetch_corpus, search_index_url, CorpusSource, FileSource, LoadError};
pub use query::{Query, QuerySyntaxError};
pub use render::{ResultItem, ResultsView};
pub use types::{Field, IndexSchema, Match};
pub use widget::{rank, IndexPhase, PanelState, SearchWidget};
