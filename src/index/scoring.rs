// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25, per field.
//!
//! Each (term, field, document) hit scores independently and the field boost
//! multiplies it. With the site schema a title hit carries a 10x multiplier,
//! which is enough for a page titled after the query to outrank pages that
//! merely mention it.
//!
//! # Constants
//!
//! | Name | Value | Meaning |
//! |------|-------|---------|
//! | `K1` | 1.2   | Term frequency saturation |
//! | `B`  | 0.75  | Field length normalization |

/// Term frequency saturation.
pub const K1: f64 = 1.2;

/// Length normalization strength.
pub const B: f64 = 0.75;

/// Inverse document frequency. Always positive, even for a term that appears
/// in every document.
pub fn idf(doc_freq: usize, doc_count: usize) -> f64 {
    let df = doc_freq as f64;
    let n = doc_count as f64;
    (1.0 + ((n - df + 0.5) / (df + 0.5)).abs()).ln()
}

/// BM25 contribution of one term in one field of one document.
pub fn bm25(term_freq: u32, idf: f64, field_len: u32, avg_field_len: f64) -> f64 {
    if term_freq == 0 {
        return 0.0;
    }
    let tf = f64::from(term_freq);
    let relative_len = if avg_field_len > 0.0 {
        f64::from(field_len) / avg_field_len
    } else {
        1.0
    };
    idf * (tf * (K1 + 1.0)) / (tf + K1 * (1.0 - B + B * relative_len))
}
