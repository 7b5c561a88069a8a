// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text index over a site corpus.
//!
//! The widget only needs three things from an index: build it from the
//! corpus, parse a query string (or reject it), and run a parsed query to get
//! ranked references. Those are the [`IndexBuilder`] and [`Searchable`] traits.
//! [`FullTextIndex`] is the implementation we ship; tests swap in scripted
//! fakes through the same traits.
//!
//! # Layout
//!
//! ```text
//! vocabulary: BTreeMap<term, TermEntry>      sorted, so prefix queries are range scans
//!   TermEntry { doc_freq, postings: [Posting { doc, field, term_freq }] }
//! field_lengths[field][doc]                   token counts, for BM25 length normalization
//! references[doc]                             document ordinal → url
//! ```
//!
//! # Invariants
//!
//! 1. **POSTINGS_SORTED**: each posting list is sorted by `(doc, field)`.
//! 2. **DOC_FREQ_CORRECT**: `doc_freq` is the number of distinct docs in the list.
//! 3. **NON_EMPTY**: every vocabulary term has at least one posting.

pub mod expand;
pub mod scoring;
pub mod tokenizer;

use crate::corpus::Corpus;
use crate::query::{Clause, Presence, Query, QuerySyntaxError};
use crate::types::{IndexSchema, Match};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Something that can be asked for ranked matches.
///
/// Parsing and execution are split so a caller can tell "this query is
/// malformed" apart from "this query matched nothing" without running it.
pub trait Searchable {
    type Query;

    fn parse(&self, input: &str) -> Result<Self::Query, QuerySyntaxError>;

    fn execute(&self, query: &Self::Query) -> Vec<Match>;

    /// Parse and execute in one step.
    fn search(&self, input: &str) -> Result<Vec<Match>, QuerySyntaxError> {
        let query = self.parse(input)?;
        Ok(self.execute(&query))
    }
}

/// Builds a [`Searchable`] from a loaded corpus. Called once per page load.
pub trait IndexBuilder {
    type Index: Searchable;

    fn build(&self, corpus: &Corpus) -> Self::Index;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Posting {
    pub doc: u32,
    /// Position of the field in `IndexSchema::fields`.
    pub field: u16,
    pub term_freq: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TermEntry {
    pub doc_freq: usize,
    pub postings: Vec<Posting>,
}

/// Size summary, for `searchbox inspect`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStats {
    pub documents: usize,
    pub terms: usize,
    pub postings: usize,
    /// `(field name, average token count)` in schema order.
    pub average_field_lengths: Vec<(&'static str, f64)>,
}

#[derive(Debug, Clone)]
pub struct FullTextIndex {
    schema: IndexSchema,
    references: Vec<String>,
    vocabulary: BTreeMap<String, TermEntry>,
    field_lengths: Vec<Vec<u32>>,
    average_field_lengths: Vec<f64>,
}

impl FullTextIndex {
    pub fn build(corpus: &Corpus, schema: IndexSchema) -> Self {
        let doc_count = corpus.len();
        let mut vocabulary: BTreeMap<String, TermEntry> = BTreeMap::new();
        let mut field_lengths = vec![vec![0u32; doc_count]; schema.fields.len()];
        let mut references = Vec::with_capacity(doc_count);

        for (doc, document) in corpus.docs().iter().enumerate() {
            references.push(schema.reference.read(document).to_string());

            for (field, spec) in schema.fields.iter().enumerate() {
                let tokens = tokenizer::tokenize(spec.field.read(document));
                field_lengths[field][doc] = tokens.len() as u32;

                let mut counts: HashMap<String, u32> = HashMap::new();
                for token in tokens {
                    *counts.entry(token).or_default() += 1;
                }
                for (term, term_freq) in counts {
                    vocabulary.entry(term).or_default().postings.push(Posting {
                        doc: doc as u32,
                        field: field as u16,
                        term_freq,
                    });
                }
            }
        }

        // INVARIANT: POSTINGS_SORTED, DOC_FREQ_CORRECT
        for entry in vocabulary.values_mut() {
            entry.postings.sort_unstable();
            let mut docs: Vec<u32> = entry.postings.iter().map(|p| p.doc).collect();
            docs.dedup();
            entry.doc_freq = docs.len();
        }

        let average_field_lengths = field_lengths
            .iter()
            .map(|lengths| {
                if lengths.is_empty() {
                    0.0
                } else {
                    lengths.iter().map(|&l| f64::from(l)).sum::<f64>() / lengths.len() as f64
                }
            })
            .collect();

        log::debug!(
            "built search index: {} documents, {} terms",
            doc_count,
            vocabulary.len()
        );

        Self {
            schema,
            references,
            vocabulary,
            field_lengths,
            average_field_lengths,
        }
    }

    pub fn schema(&self) -> &IndexSchema {
        &self.schema
    }

    pub fn doc_count(&self) -> usize {
        self.references.len()
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, TermEntry> {
        &self.vocabulary
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.doc_count(),
            terms: self.vocabulary.len(),
            postings: self.vocabulary.values().map(|e| e.postings.len()).sum(),
            average_field_lengths: self
                .schema
                .fields
                .iter()
                .zip(&self.average_field_lengths)
                .map(|(spec, &avg)| (spec.field.name(), avg))
                .collect(),
        }
    }

    /// Score every document a single clause touches.
    fn score_clause(&self, clause: &Clause) -> HashMap<u32, f64> {
        let mut scores: HashMap<u32, f64> = HashMap::new();
        let doc_count = self.doc_count();

        for term in expand::expand(clause, &self.vocabulary) {
            let Some(entry) = self.vocabulary.get(term) else {
                continue;
            };
            let idf = scoring::idf(entry.doc_freq, doc_count);

            for posting in &entry.postings {
                let field = usize::from(posting.field);
                let spec = &self.schema.fields[field];
                if clause.field.is_some_and(|wanted| wanted != spec.field) {
                    continue;
                }
                let score = scoring::bm25(
                    posting.term_freq,
                    idf,
                    self.field_lengths[field][posting.doc as usize],
                    self.average_field_lengths[field],
                ) * spec.boost
                    * clause.boost;
                *scores.entry(posting.doc).or_default() += score;
            }
        }

        scores
    }
}

impl Searchable for FullTextIndex {
    type Query = Query;

    fn parse(&self, input: &str) -> Result<Query, QuerySyntaxError> {
        Query::parse(input, &self.schema)
    }

    fn execute(&self, query: &Query) -> Vec<Match> {
        if query.is_empty() {
            return Vec::new();
        }

        let mut required: Option<HashSet<u32>> = None;
        let mut prohibited: HashSet<u32> = HashSet::new();
        let mut optional: HashSet<u32> = HashSet::new();
        let mut totals: HashMap<u32, f64> = HashMap::new();

        for clause in &query.clauses {
            let scores = self.score_clause(clause);

            match clause.presence {
                Presence::Prohibited => {
                    prohibited.extend(scores.keys().copied());
                    continue;
                }
                Presence::Required => {
                    let docs: HashSet<u32> = scores.keys().copied().collect();
                    required = Some(match required {
                        Some(previous) => previous.intersection(&docs).copied().collect(),
                        None => docs,
                    });
                }
                Presence::Optional => optional.extend(scores.keys().copied()),
            }

            for (doc, score) in scores {
                *totals.entry(doc).or_default() += score;
            }
        }

        let only_prohibited = query
            .clauses
            .iter()
            .all(|clause| clause.presence == Presence::Prohibited);

        let candidates: HashSet<u32> = match required {
            Some(required) => required,
            None if only_prohibited => (0..self.doc_count() as u32).collect(),
            None => optional,
        };

        let mut ranked: Vec<(u32, f64)> = candidates
            .into_iter()
            .filter(|doc| !prohibited.contains(doc))
            .map(|doc| (doc, totals.get(&doc).copied().unwrap_or(0.0)))
            .collect();

        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        ranked
            .into_iter()
            .map(|(doc, score)| Match::new(self.references[doc as usize].clone(), score))
            .collect()
    }
}

/// Builds a [`FullTextIndex`] with a fixed schema.
#[derive(Debug, Clone, Default)]
pub struct FullTextBuilder {
    pub schema: IndexSchema,
}

impl FullTextBuilder {
    pub fn new(schema: IndexSchema) -> Self {
        Self { schema }
    }
}

impl IndexBuilder for FullTextBuilder {
    type Index = FullTextIndex;

    fn build(&self, corpus: &Corpus) -> FullTextIndex {
        FullTextIndex::build(corpus, self.schema.clone())
    }
}
