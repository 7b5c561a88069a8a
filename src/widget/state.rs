// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Widget state, two independent axes.
//!
//! ```text
//! index:  Uninitialized ──begin_loading──▶ Loading ──install Ok──▶ Ready
//!                                             └──────install Err──▶ Unavailable
//! panel:  Hidden ◀──────▶ Visible
//! ```
//!
//! `Unavailable` is terminal: there is no retry, and it renders exactly like
//! `Loading`.

use crate::corpus::Corpus;

pub enum IndexState<X> {
    Uninitialized,
    Loading,
    Ready { corpus: Corpus, index: X },
    Unavailable,
}

impl<X> IndexState<X> {
    pub fn phase(&self) -> IndexPhase {
        match self {
            IndexState::Uninitialized => IndexPhase::Uninitialized,
            IndexState::Loading => IndexPhase::Loading,
            IndexState::Ready { .. } => IndexPhase::Ready,
            IndexState::Unavailable => IndexPhase::Unavailable,
        }
    }
}

/// [`IndexState`] without its payload, for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexPhase {
    Uninitialized,
    Loading,
    Ready,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Hidden,
    Visible,
}
