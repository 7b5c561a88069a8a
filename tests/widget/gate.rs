//! Minimum query length.
//!
//! Below two characters (after trimming) the panel is emptied and hidden,
//! whatever state the index is in.

use super::common::{loading_widget, panel, ready_widget, site_corpus};
use searchbox::testing::StaticSource;
use searchbox::headless::{self, HeadlessWidget};
use searchbox::index::FullTextBuilder;
use searchbox::{IndexPhase, PanelState, ResultsView, WidgetConfig};

fn assert_cleared(widget: &HeadlessWidget<FullTextBuilder>) {
    assert_eq!(widget.view(), &ResultsView::Cleared);
    assert_eq!(widget.panel(), PanelState::Hidden);
    let panel = panel(widget);
    assert_eq!(panel.html, "");
    assert!(!panel.open);
}

#[test]
fn test_short_query_before_loading() {
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    widget.on_input("s");
    assert_cleared(&widget);
    assert_eq!(widget.phase(), IndexPhase::Uninitialized);
}

#[test]
fn test_short_query_while_loading() {
    let mut widget = loading_widget();
    widget.on_input("s");
    assert_cleared(&widget);
}

#[test]
fn test_short_query_when_ready() {
    let mut widget = ready_widget(site_corpus().docs());
    widget.on_input("search");
    assert_eq!(widget.panel(), PanelState::Visible);

    widget.on_input("s");
    assert_cleared(&widget);
}

#[test]
fn test_short_query_after_failed_load() {
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    headless::load_blocking(&mut widget, &StaticSource::missing(), "/");
    assert_eq!(widget.phase(), IndexPhase::Unavailable);

    widget.on_input("x");
    assert_cleared(&widget);
}

#[test]
fn test_whitespace_is_trimmed_before_counting() {
    let mut widget = ready_widget(site_corpus().docs());
    widget.on_input("   a   ");
    assert_cleared(&widget);
    assert_eq!(widget.query(), "a");

    widget.on_input("    ");
    assert_cleared(&widget);
    assert_eq!(widget.query(), "");
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let mut widget = loading_widget();

    // one char, two bytes
    widget.on_input("é");
    assert_cleared(&widget);

    widget.on_input("éa");
    assert_eq!(widget.view(), &ResultsView::Loading);
}

#[test]
fn test_two_characters_pass_the_gate() {
    let mut widget = ready_widget(site_corpus().docs());
    widget.on_input("se");
    assert_eq!(widget.panel(), PanelState::Visible);
}

#[test]
fn test_custom_minimum() {
    let config = WidgetConfig {
        min_query_chars: 4,
        ..WidgetConfig::default()
    };
    let mut widget = headless::mount(FullTextBuilder::default(), config);
    assert!(widget.begin_loading());

    widget.on_input("sea");
    assert_eq!(widget.view(), &ResultsView::Cleared);
    widget.on_input("sear");
    assert_eq!(widget.view(), &ResultsView::Loading);
}
