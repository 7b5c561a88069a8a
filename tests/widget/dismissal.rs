//! Closing the panel: outside clicks, Escape, and inert widgets.

use super::common::{panel, ready_widget, site_json, urls};
use searchbox::testing::StaticSource;
use searchbox::headless::{self, HeadlessInput, HeadlessNode, HeadlessPanel, HeadlessWidget};
use searchbox::index::FullTextBuilder;
use searchbox::{Corpus, PanelState, ResultsView, SearchWidget, WidgetConfig};

fn site_widget() -> HeadlessWidget<FullTextBuilder> {
    ready_widget(Corpus::from_json(&site_json()).unwrap().docs())
}

#[test]
fn test_click_outside_hides_but_keeps_content() {
    let mut widget = site_widget();
    widget.on_input("search");
    let before = panel(&widget).clone();

    widget.on_document_click(&HeadlessNode::Outside);

    assert_eq!(widget.panel(), PanelState::Hidden);
    assert!(!panel(&widget).open);
    assert_eq!(panel(&widget).html, before.html);
    assert_eq!(panel(&widget).writes, before.writes);
    assert!(widget.corpus().is_some());
}

#[test]
fn test_click_inside_keeps_panel_open() {
    let mut widget = site_widget();
    widget.on_input("search");

    widget.on_document_click(&HeadlessNode::Input);
    widget.on_document_click(&HeadlessNode::Results);
    assert_eq!(widget.panel(), PanelState::Visible);
    assert!(panel(&widget).open);
}

#[test]
fn test_requery_after_dismissal_does_not_refetch() {
    let source = StaticSource::new(site_json());
    let mut widget = headless::mount(FullTextBuilder::default(), WidgetConfig::default());
    headless::load_blocking(&mut widget, &source, "/index.html");

    widget.on_input("search");
    widget.on_document_click(&HeadlessNode::Outside);
    widget.on_input("templates");

    assert_eq!(source.fetches(), 1);
    assert_eq!(widget.panel(), PanelState::Visible);
    assert_eq!(urls(&widget)[0], "/docs/templates/");
}

#[test]
fn test_escape_hides_and_blurs() {
    let mut widget = site_widget();
    widget.on_input("search");

    widget.on_keydown("Escape");

    assert_eq!(widget.panel(), PanelState::Hidden);
    let (input, panel) = widget.elements().unwrap();
    assert!(!panel.open);
    assert!(!input.focused);
    assert_eq!(input.blur_count, 1);
}

#[test]
fn test_other_keys_are_ignored() {
    let mut widget = site_widget();
    widget.on_input("search");

    for key in ["Enter", "ArrowDown", "Tab", "escape", "Esc"] {
        widget.on_keydown(key);
    }

    assert_eq!(widget.panel(), PanelState::Visible);
    assert_eq!(widget.elements().unwrap().0.blur_count, 0);
}

#[test]
fn test_typing_after_escape_reopens() {
    let mut widget = site_widget();
    widget.on_input("search");
    widget.on_keydown("Escape");

    widget.on_input("themes");
    assert_eq!(widget.panel(), PanelState::Visible);
    assert_eq!(urls(&widget)[0], "/docs/themes/");
}

#[test]
fn test_escape_on_hidden_panel_still_blurs() {
    let mut widget = site_widget();
    widget.on_keydown("Escape");
    assert_eq!(widget.panel(), PanelState::Hidden);
    assert_eq!(widget.elements().unwrap().0.blur_count, 1);
}

#[test]
fn test_inert_widget_ignores_everything() {
    let mut widget: HeadlessWidget<FullTextBuilder> = SearchWidget::mount(
        None::<HeadlessInput>,
        Some(HeadlessPanel::default()),
        FullTextBuilder::default(),
        WidgetConfig::default(),
    );
    assert!(!widget.is_active());
    assert!(widget.elements().is_none());

    let source = StaticSource::new(site_json());
    headless::load_blocking(&mut widget, &source, "/");
    widget.on_input("search");
    widget.on_keydown("Escape");
    widget.on_document_click(&HeadlessNode::Outside);

    assert_eq!(source.fetches(), 0);
    assert_eq!(widget.view(), &ResultsView::Cleared);
    assert_eq!(widget.panel(), PanelState::Hidden);
}

#[test]
fn test_inert_without_results_container() {
    let widget: HeadlessWidget<FullTextBuilder> = SearchWidget::mount(
        Some(HeadlessInput::default()),
        None,
        FullTextBuilder::default(),
        WidgetConfig::default(),
    );
    assert!(!widget.is_active());
}
