// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full keystroke path.
//!
//! Arbitrary input values go through the controller exactly as the browser
//! delivers them: gate, prefix query, plain fallback, ranking, snippets,
//! markup. No panics, never more than the result cap, and the panel flag
//! always agrees with the view.

#![no_main]

use libfuzzer_sys::fuzz_target;
use searchbox::headless::{self, HeadlessWidget};
use searchbox::testing::{corpus_of, StaticSource};
use searchbox::{FullTextBuilder, PanelState, WidgetConfig};
use std::cell::RefCell;

thread_local! {
    static WIDGET: RefCell<HeadlessWidget<FullTextBuilder>> = RefCell::new(ready_widget());
}

fn ready_widget() -> HeadlessWidget<FullTextBuilder> {
    let corpus = corpus_of(&[
        ("Getting Started", "Install the toolchain and create your first project."),
        ("Configuration", "Every option lives in config.toml: theme, base URL, search."),
        ("Templates", "Templates use the Tera engine. Pages render with a page template."),
        ("Café Ünïcödé", "Diacritics, 日本語, emoji 🦀 and other multi-byte text."),
        ("Deployment", "Deploy the public directory to any static host."),
    ]);
    let source = StaticSource::of(corpus.docs());
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    headless::load_blocking(&mut widget, &source, "/index.html");
    widget
}

fuzz_target!(|input: &str| {
    let input: String = input.chars().take(200).collect();

    WIDGET.with(|widget| {
        let mut widget = widget.borrow_mut();
        widget.on_input(&input);

        let visible = widget.view().is_visible();
        assert_eq!(widget.panel() == PanelState::Visible, visible);
        assert!(widget.view().items().len() <= widget.config().max_results);
    });
});
