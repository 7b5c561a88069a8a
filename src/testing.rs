// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::corpus::{Corpus, Document};
use crate::index::{IndexBuilder, Searchable};
use crate::loader::{CorpusSource, LoadError};
use crate::query::QuerySyntaxError;
use crate::types::Match;
use std::cell::{Cell, RefCell};
use std::future::{ready, Future};
use std::rc::Rc;

/// A document at `/doc/{id}/`.
pub fn make_doc(id: usize, title: &str, content: &str) -> Document {
    Document::new(format!("/doc/{}/", id), title, content)
}

/// A corpus of `(title, content)` pairs, numbered from 0.
pub fn corpus_of(pages: &[(&str, &str)]) -> Corpus {
    Corpus::new(
        pages
            .iter()
            .enumerate()
            .map(|(id, (title, content))| make_doc(id, title, content))
            .collect(),
    )
}

/// Serialize documents the way a site generator would write `search.json`.
pub fn corpus_json(docs: &[Document]) -> String {
    serde_json::to_string(docs).unwrap_or_else(|_| "[]".to_string())
}

/// Serves one fixed response for every URL and counts requests.
#[derive(Debug, Default)]
pub struct StaticSource {
    response: Option<String>,
    fetches: Cell<usize>,
    urls: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            response: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn of(docs: &[Document]) -> Self {
        Self::new(corpus_json(docs))
    }

    /// Answers every request with HTTP 404.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

impl CorpusSource for StaticSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, LoadError>> {
        self.fetches.set(self.fetches.get() + 1);
        self.urls.borrow_mut().push(url.to_string());
        ready(match &self.response {
            Some(body) => Ok(body.clone()),
            None => Err(LoadError::Status {
                url: url.to_string(),
                status: 404,
            }),
        })
    }
}

/// A [`Searchable`] with canned answers that records every parse attempt.
///
/// Inputs ending in `*` count as prefix queries.
#[derive(Debug, Clone, Default)]
pub struct ScriptedIndex {
    pub reject_prefixed: bool,
    pub reject_plain: bool,
    pub matches: Vec<Match>,
    pub parses: Rc<RefCell<Vec<String>>>,
}

impl ScriptedIndex {
    pub fn returning(references: &[&str]) -> Self {
        Self {
            matches: references
                .iter()
                .enumerate()
                .map(|(rank, reference)| Match::new(*reference, (references.len() - rank) as f64))
                .collect(),
            ..Self::default()
        }
    }

    pub fn parsed(&self) -> Vec<String> {
        self.parses.borrow().clone()
    }
}

impl Searchable for ScriptedIndex {
    type Query = String;

    fn parse(&self, input: &str) -> Result<String, QuerySyntaxError> {
        self.parses.borrow_mut().push(input.to_string());
        let rejected = if input.ends_with('*') {
            self.reject_prefixed
        } else {
            self.reject_plain
        };
        if rejected {
            Err(QuerySyntaxError::UnrecognisedField {
                field: input.to_string(),
                known: "title, content".to_string(),
            })
        } else {
            Ok(input.to_string())
        }
    }

    fn execute(&self, _query: &String) -> Vec<Match> {
        self.matches.clone()
    }
}

/// Hands out clones of one [`ScriptedIndex`]; the parse log is shared.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBuilder(pub ScriptedIndex);

impl IndexBuilder for ScriptedBuilder {
    type Index = ScriptedIndex;

    fn build(&self, _corpus: &Corpus) -> ScriptedIndex {
        self.0.clone()
    }
}
