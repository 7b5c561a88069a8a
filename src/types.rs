// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared vocabulary between the index, the query parser and the widget.
//!
//! The index is declared, not coded: a reference field plus the searchable
//! fields with their relative weights. The widget's schema says "title counts
//! ten times as much as body text"; nothing else in the crate hardcodes that.
//!
//! # Invariants
//!
//! - **IndexSchema**: `fields` is non-empty and never lists a field twice.
//! - **FieldSpec**: `boost > 0`. A zero boost would make a field searchable
//!   but unable to contribute to the score.

use crate::corpus::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document field the index knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Url,
    Title,
    Content,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Title => "title",
            Field::Content => "content",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "url" => Some(Field::Url),
            "title" => Some(Field::Title),
            "content" => Some(Field::Content),
            _ => None,
        }
    }

    /// Borrow this field's text from a document.
    pub fn read(self, doc: &Document) -> &str {
        match self {
            Field::Url => &doc.url,
            Field::Title => &doc.title,
            Field::Content => &doc.content,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A searchable field and its weight relative to the others.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub field: Field,
    pub boost: f64,
}

impl FieldSpec {
    pub fn new(field: Field, boost: f64) -> Self {
        Self { field, boost }
    }
}

/// Declarative description of an index: which field identifies a document and
/// which fields are searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexSchema {
    pub reference: Field,
    pub fields: Vec<FieldSpec>,
}

impl IndexSchema {
    /// `url` as reference; title and content searched with the given boosts.
    pub fn site(title_boost: f64, content_boost: f64) -> Self {
        Self {
            reference: Field::Url,
            fields: vec![
                FieldSpec::new(Field::Title, title_boost),
                FieldSpec::new(Field::Content, content_boost),
            ],
        }
    }

    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }

    /// Resolve a field name from a query. Only searchable fields count.
    pub fn lookup(&self, name: &str) -> Option<Field> {
        Field::from_name(name).filter(|&field| self.spec(field).is_some())
    }

    /// Searchable field names, for error messages.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|spec| spec.field.name()).collect()
    }
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self::site(10.0, 1.0)
    }
}

/// One ranked hit: the reference of the matching document and its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub reference: String,
    pub score: f64,
}

impl Match {
    pub fn new(reference: impl Into<String>, score: f64) -> Self {
        Self {
            reference: reference.into(),
            score,
        }
    }
}
