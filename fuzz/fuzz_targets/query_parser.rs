// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query parser.
//!
//! Whatever the user types, parsing either succeeds or returns a syntax
//! error. It never panics, and a successful parse only ever produces
//! well-formed clauses.

#![no_main]

use libfuzzer_sys::fuzz_target;
use searchbox::{IndexSchema, Query};

fuzz_target!(|input: &str| {
    let input: String = input.chars().take(200).collect();
    let schema = IndexSchema::default();

    for candidate in [input.clone(), format!("{}*", input)] {
        let Ok(query) = Query::parse(&candidate, &schema) else {
            continue;
        };

        for clause in &query.clauses {
            // INVARIANT: empty terms are dropped, never emitted
            assert!(!clause.term.is_empty(), "empty clause from {:?}", candidate);
            // INVARIANT: boosts are finite
            assert!(clause.boost.is_finite(), "boost {} from {:?}", clause.boost, candidate);
        }
    }
});
