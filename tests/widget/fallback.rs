//! Prefix query first, plain query when the prefix form is rejected.

use super::common::{loaded_widget_with, ready_widget, site_corpus, urls};
use searchbox::testing::{ScriptedBuilder, ScriptedIndex, StaticSource};
use searchbox::{rank, Document, FullTextBuilder, IndexBuilder, ResultsView, WidgetConfig};

fn docs() -> Vec<Document> {
    vec![Document::new("/a", "Alpha", "a:b appears here")]
}

#[test]
fn test_prefix_query_is_tried_first() {
    let index = ScriptedIndex::returning(&["/a"]);
    let mut widget = loaded_widget_with(
        ScriptedBuilder(index.clone()),
        WidgetConfig::default(),
        &StaticSource::of(&docs()),
    );

    widget.on_input("alpha");
    assert_eq!(index.parsed(), vec!["alpha*"]);
    assert_eq!(urls(&widget), vec!["/a"]);
}

#[test]
fn test_rejected_prefix_falls_back_to_plain() {
    let index = ScriptedIndex {
        reject_prefixed: true,
        ..ScriptedIndex::returning(&["/a"])
    };
    let mut widget = loaded_widget_with(
        ScriptedBuilder(index.clone()),
        WidgetConfig::default(),
        &StaticSource::of(&docs()),
    );

    widget.on_input("a:b");

    assert_eq!(index.parsed(), vec!["a:b*", "a:b"]);
    assert_eq!(urls(&widget), vec!["/a"]);
}

#[test]
fn test_both_rejected_shows_no_results() {
    let index = ScriptedIndex {
        reject_prefixed: true,
        reject_plain: true,
        ..ScriptedIndex::returning(&["/a"])
    };
    let mut widget = loaded_widget_with(
        ScriptedBuilder(index.clone()),
        WidgetConfig::default(),
        &StaticSource::of(&docs()),
    );

    widget.on_input("a:b");

    assert_eq!(index.parsed().len(), 2);
    assert_eq!(widget.view(), &ResultsView::NoResults);
}

#[test]
fn test_unknown_field_with_shipped_index() {
    let mut widget = ready_widget(&docs());
    widget.on_input("a:b");
    assert_eq!(widget.view(), &ResultsView::NoResults);
}

#[test]
fn test_boost_recovers_through_plain_query() {
    // "templates^2*" has a malformed boost; "templates^2" is fine
    let mut widget = ready_widget(site_corpus().docs());
    widget.on_input("templates^2");
    assert_eq!(urls(&widget)[0], "/docs/templates/");
}

#[test]
fn test_fuzzy_recovers_through_plain_query() {
    let mut widget = ready_widget(site_corpus().docs());
    widget.on_input("tempaltes~2");
    assert!(urls(&widget).contains(&"/docs/templates/".to_string()));
}

#[test]
fn test_field_prefix_query() {
    let index = FullTextBuilder::default().build(&site_corpus());
    let matches = rank(&index, "title:temp");
    let references: Vec<&str> = matches.iter().map(|m| m.reference.as_str()).collect();
    assert_eq!(references, vec!["/docs/templates/"]);
}
