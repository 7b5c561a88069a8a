// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two page elements the widget touches.
//!
//! The controller never sees `web_sys` types. The browser runtime implements
//! these traits over real elements; [`crate::headless`] implements them in
//! memory for the CLI and tests.

/// Anything that can tell whether an event target lies inside it.
pub trait Element {
    /// What a click event points at.
    type Node;

    fn contains(&self, node: &Self::Node) -> bool;
}

/// The search `<input>`.
pub trait SearchInput: Element {
    /// Drop keyboard focus.
    fn blur(&mut self);
}

/// The results container under the input.
pub trait ResultsPanel: Element {
    /// Replace the panel's markup.
    fn set_content(&mut self, html: &str);

    /// Toggle the class that makes the panel visible.
    fn set_open(&mut self, open: bool);
}
