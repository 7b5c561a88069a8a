// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory page elements.
//!
//! Lets the controller run without a browser: the CLI drives it this way, and
//! so do the tests. The panel just records the last markup and open flag it
//! was given.

use crate::config::WidgetConfig;
use crate::index::IndexBuilder;
use crate::loader::{fetch_corpus, CorpusSource};
use crate::widget::{Element, ResultsPanel, SearchInput, SearchWidget};
use futures::executor::block_on;

pub type HeadlessWidget<B> = SearchWidget<HeadlessInput, HeadlessPanel, B>;

/// Where a simulated click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessNode {
    Input,
    Results,
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessInput {
    pub focused: bool,
    pub blur_count: usize,
}

impl Default for HeadlessInput {
    /// Starts focused, as if the user had clicked into it.
    fn default() -> Self {
        Self {
            focused: true,
            blur_count: 0,
        }
    }
}

impl Element for HeadlessInput {
    type Node = HeadlessNode;

    fn contains(&self, node: &HeadlessNode) -> bool {
        *node == HeadlessNode::Input
    }
}

impl SearchInput for HeadlessInput {
    fn blur(&mut self) {
        self.focused = false;
        self.blur_count += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessPanel {
    pub html: String,
    pub open: bool,
    /// How many times content was replaced.
    pub writes: usize,
}

impl Element for HeadlessPanel {
    type Node = HeadlessNode;

    fn contains(&self, node: &HeadlessNode) -> bool {
        *node == HeadlessNode::Results
    }
}

impl ResultsPanel for HeadlessPanel {
    fn set_content(&mut self, html: &str) {
        self.html = html.to_string();
        self.writes += 1;
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// A widget mounted on fresh in-memory elements.
pub fn mount<B: IndexBuilder>(builder: B, config: WidgetConfig) -> HeadlessWidget<B> {
    SearchWidget::mount(
        Some(HeadlessInput::default()),
        Some(HeadlessPanel::default()),
        builder,
        config,
    )
}

/// Run the one corpus load to completion on the current thread.
///
/// Does nothing if the widget already started (or can never start) a load.
pub fn load_blocking<I, R, B, S>(widget: &mut SearchWidget<I, R, B>, source: &S, page_path: &str)
where
    I: SearchInput,
    R: ResultsPanel<Node = I::Node>,
    B: IndexBuilder,
    S: CorpusSource,
{
    if !widget.begin_loading() {
        return;
    }
    let index_file = widget.config().index_file.clone();
    let loaded = block_on(fetch_corpus(source, page_path, &index_file));
    widget.install_corpus(loaded);
}
