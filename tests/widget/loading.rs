//! Corpus loading: one fetch, placeholder while waiting, no recovery.

use super::common::{loading_widget, panel, pages_with, site_json};
use searchbox::testing::StaticSource;
use searchbox::headless;
use searchbox::index::FullTextBuilder;
use searchbox::{Corpus, IndexPhase, LoadError, PanelState, ResultsView, WidgetConfig};

const LOADING_HTML: &str =
    r#"<div class="search-message" style="padding: 1rem; color: #666;">Loading search...</div>"#;

#[test]
fn test_query_before_ready_shows_placeholder() {
    let mut widget = loading_widget();
    widget.on_input("search");

    assert_eq!(widget.view(), &ResultsView::Loading);
    assert_eq!(widget.panel(), PanelState::Visible);
    let panel = panel(&widget);
    assert_eq!(panel.html, LOADING_HTML);
    assert!(panel.open);
}

#[test]
fn test_query_before_load_starts_shows_placeholder() {
    // Not even started
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    widget.on_input("search");
    assert_eq!(panel(&widget).html, LOADING_HTML);
}

#[test]
fn test_results_once_corpus_arrives() {
    let mut widget = loading_widget();
    widget.on_input("number");
    assert_eq!(widget.view(), &ResultsView::Loading);

    widget.install_corpus(Ok(Corpus::new(pages_with("number", 3))));
    assert_eq!(widget.phase(), IndexPhase::Ready);

    // Nothing re-renders until the next keystroke
    assert_eq!(widget.view(), &ResultsView::Loading);
    widget.on_input("number");
    assert_eq!(widget.view().items().len(), 3);
}

#[test]
fn test_fetches_exactly_once() {
    let source = StaticSource::new(site_json());
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());

    headless::load_blocking(&mut widget, &source, "/index.html");
    headless::load_blocking(&mut widget, &source, "/index.html");
    widget.on_input("search");
    widget.on_input("templates");

    assert_eq!(source.fetches(), 1);
    assert_eq!(widget.phase(), IndexPhase::Ready);
}

#[test]
fn test_corpus_url_is_relative_to_page() {
    let source = StaticSource::new("[]");
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    headless::load_blocking(&mut widget, &source, "/docs/guide/intro.html");
    assert_eq!(source.urls(), vec!["/docs/guide/search.json"]);
}

#[test]
fn test_custom_index_file() {
    let source = StaticSource::new("[]");
    let config = WidgetConfig {
        index_file: "pages.json".to_string(),
        ..WidgetConfig::default()
    };
    let mut widget = headless::mount(FullTextBuilder::default(), config);
    headless::load_blocking(&mut widget, &source, "/blog/");
    assert_eq!(source.urls(), vec!["/blog/pages.json"]);
}

#[test]
fn test_failed_load_keeps_placeholder() {
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    headless::load_blocking(&mut widget, &StaticSource::missing(), "/index.html");
    assert_eq!(widget.phase(), IndexPhase::Unavailable);

    for query in ["search", "templates", "zz"] {
        widget.on_input(query);
        assert_eq!(widget.view(), &ResultsView::Loading);
        assert_eq!(panel(&widget).html, LOADING_HTML);
    }
}

#[test]
fn test_malformed_corpus_is_unavailable() {
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    headless::load_blocking(&mut widget, &StaticSource::new("{\"not\": \"an array\"}"), "/");
    assert_eq!(widget.phase(), IndexPhase::Unavailable);
}

#[test]
fn test_no_retry_after_failure() {
    let mut widget = loading_widget();
    widget.install_corpus(Err(LoadError::Status {
        url: "/search.json".to_string(),
        status: 500,
    }));
    assert!(!widget.begin_loading());
    assert_eq!(widget.phase(), IndexPhase::Unavailable);
}

#[test]
fn test_empty_corpus_answers_no_results() {
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    headless::load_blocking(&mut widget, &StaticSource::new("[]"), "/");
    widget.on_input("anything");
    assert_eq!(widget.view(), &ResultsView::NoResults);
}
