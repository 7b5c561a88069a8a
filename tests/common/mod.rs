//! Shared test utilities and fixtures.

#![allow(dead_code)]

use searchbox::headless::{self, HeadlessPanel, HeadlessWidget};
use searchbox::index::{FullTextBuilder, IndexBuilder};
use searchbox::{Corpus, Document, WidgetConfig};
use std::fs;
use std::path::Path;

use searchbox::testing::{corpus_json, make_doc, StaticSource};

// ============================================================================
// FIXTURES
// ============================================================================

/// A small documentation site, ten pages.
pub const SITE_FIXTURE: &str = "tests/fixtures/search.json";

pub fn site_json() -> String {
    fs::read_to_string(SITE_FIXTURE).expect("Failed to read fixture")
}

pub fn site_corpus() -> Corpus {
    Corpus::from_json(&site_json()).expect("Invalid fixture JSON")
}

/// Lay `docs` out as `<dir>/search.json`.
pub fn write_site(dir: &Path, docs: &[Document]) {
    fs::write(dir.join("search.json"), corpus_json(docs)).expect("Failed to write corpus");
}

// ============================================================================
// WIDGETS
// ============================================================================

/// Mounted and loaded from `source`, default config.
pub fn loaded_widget_with<B: IndexBuilder>(
    builder: B,
    config: WidgetConfig,
    source: &StaticSource,
) -> HeadlessWidget<B> {
    let mut widget = headless::mount(builder, config);
    headless::load_blocking(&mut widget, source, "/index.html");
    widget
}

/// The shipped index over `docs`, loaded and ready.
pub fn ready_widget(docs: &[Document]) -> HeadlessWidget<FullTextBuilder> {
    loaded_widget_with(
        FullTextBuilder::default(),
        WidgetConfig::default(),
        &StaticSource::of(docs),
    )
}

/// Mounted, still waiting on its corpus.
pub fn loading_widget() -> HeadlessWidget<FullTextBuilder> {
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    assert!(widget.begin_loading());
    widget
}

pub fn panel<B: IndexBuilder>(widget: &HeadlessWidget<B>) -> &HeadlessPanel {
    widget.elements().expect("widget is inert").1
}

pub fn urls<B: IndexBuilder>(widget: &HeadlessWidget<B>) -> Vec<String> {
    widget.view().items().iter().map(|item| item.url.clone()).collect()
}

/// `count` pages that all contain `term`, titled "Page 0", "Page 1", ...
pub fn pages_with(term: &str, count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| make_doc(i, &format!("Page {}", i), &format!("{} number {}", term, i)))
        .collect()
}
