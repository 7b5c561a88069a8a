// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.
//!
//! A query string either parses into a [`Query`] or is rejected with a
//! [`QuerySyntaxError`]. Callers decide what a rejection means; the widget
//! retries without its trailing wildcard and, failing that, shows no results.
//!
//! # Grammar
//!
//! ```text
//! query    := clause*
//! clause   := presence? (field ':')? term modifier*
//! presence := '+' | '-'
//! modifier := '^' number | '~' integer
//! term     := chars, '*' allowed anywhere
//! ```
//!
//! Terms are split at the same boundaries as indexed text and go through the
//! same normalization (lowercase, diacritics stripped), so `node.js` becomes
//! the two clauses `node` and `js`, each keeping the field, presence and
//! modifiers written on the original term. A piece that is a stop word
//! without wildcards is dropped rather than rejected.

mod lexer;

pub use lexer::{lex, Lexeme};

use crate::index::tokenizer::{is_stop_word, split_query_term};
use crate::types::{Field, IndexSchema};
use thiserror::Error;

/// Why a query string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuerySyntaxError {
    #[error("unrecognised field '{field}', possible fields: {known}")]
    UnrecognisedField { field: String, known: String },
    #[error("expecting a field name before ':'")]
    MissingFieldName,
    #[error("expecting term after field '{0}', found nothing")]
    MissingTerm(String),
    #[error("expecting term after presence marker '{0}'")]
    DanglingPresence(char),
    #[error("'{0}' must follow a term")]
    UnexpectedModifier(char),
    #[error("boost must be numeric, found '{0}'")]
    InvalidBoost(String),
    #[error("edit distance must be a non-negative integer, found '{0}'")]
    InvalidEditDistance(String),
}

/// Whether a clause must, may, or must not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    #[default]
    Optional,
    Required,
    Prohibited,
}

/// One term of a parsed query.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Normalized term, `*` wildcards preserved.
    pub term: String,
    /// Restrict to one field; `None` searches every schema field.
    pub field: Option<Field>,
    pub presence: Presence,
    pub boost: f64,
    pub edit_distance: usize,
}

impl Clause {
    pub fn has_wildcard(&self) -> bool {
        self.term.contains('*')
    }
}

/// A query that passed syntax checking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    pub fn parse(input: &str, schema: &IndexSchema) -> Result<Self, QuerySyntaxError> {
        Parser {
            lexemes: lex(input),
            position: 0,
            schema,
        }
        .parse()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

struct Parser<'a> {
    lexemes: Vec<Lexeme>,
    position: usize,
    schema: &'a IndexSchema,
}

impl Parser<'_> {
    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.position).cloned();
        self.position += 1;
        lexeme
    }

    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.position)
    }

    fn parse(mut self) -> Result<Query, QuerySyntaxError> {
        let mut clauses = Vec::new();
        while self.peek().is_some() {
            clauses.extend(self.parse_clause()?);
        }
        Ok(Query { clauses })
    }

    fn parse_clause(&mut self) -> Result<Vec<Clause>, QuerySyntaxError> {
        let mut presence = Presence::Optional;
        let mut field = None;

        let mut lexeme = self.next();

        if let Some(Lexeme::Presence(marker)) = lexeme {
            presence = if marker == '+' {
                Presence::Required
            } else {
                Presence::Prohibited
            };
            lexeme = self.next();
            if !matches!(lexeme, Some(Lexeme::Term(_)) | Some(Lexeme::Field(_))) {
                return Err(QuerySyntaxError::DanglingPresence(marker));
            }
        }

        if let Some(Lexeme::Field(name)) = lexeme {
            if name.is_empty() {
                return Err(QuerySyntaxError::MissingFieldName);
            }
            field = Some(self.schema.lookup(&name).ok_or_else(|| {
                QuerySyntaxError::UnrecognisedField {
                    field: name.clone(),
                    known: self.schema.field_names().join(", "),
                }
            })?);
            lexeme = self.next();
            if !matches!(lexeme, Some(Lexeme::Term(_))) {
                return Err(QuerySyntaxError::MissingTerm(name));
            }
        }

        let raw = match lexeme {
            Some(Lexeme::Term(raw)) => raw,
            Some(Lexeme::Boost(_)) => return Err(QuerySyntaxError::UnexpectedModifier('^')),
            Some(Lexeme::EditDistance(_)) => {
                return Err(QuerySyntaxError::UnexpectedModifier('~'))
            }
            // Presence and Field are consumed above
            _ => return Ok(Vec::new()),
        };

        let mut boost = 1.0;
        let mut edit_distance = 0;
        loop {
            match self.peek() {
                Some(Lexeme::Boost(value)) => {
                    boost = value
                        .parse::<f64>()
                        .ok()
                        .filter(|b| b.is_finite())
                        .ok_or_else(|| QuerySyntaxError::InvalidBoost(value.clone()))?;
                }
                Some(Lexeme::EditDistance(value)) => {
                    edit_distance = value
                        .parse::<usize>()
                        .map_err(|_| QuerySyntaxError::InvalidEditDistance(value.clone()))?;
                }
                _ => break,
            }
            self.position += 1;
        }

        Ok(split_query_term(&raw)
            .into_iter()
            .filter(|term| term.contains('*') || !is_stop_word(term))
            .map(|term| Clause {
                term,
                field,
                presence,
                boost,
                edit_distance,
            })
            .collect())
    }
}
