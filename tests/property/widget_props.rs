//! Controller properties over arbitrary keystrokes.

use super::common::{loading_widget, pages_with, panel, ready_widget};
use proptest::prelude::*;
use searchbox::{PanelState, ResultsView};

/// Raw input values whose trimmed form is under two characters.
fn short_input() -> impl Strategy<Value = String> {
    (" {0,3}", "[a-zé:*^~+-]?", " {0,3}").prop_map(|(l, c, r)| format!("{}{}{}", l, c, r))
}

/// Anything a user might type, special characters included.
fn any_input() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 :*^~+\\-\\\\é]{0,16}").unwrap()
}

proptest! {
    #[test]
    fn prop_short_input_always_clears(input in short_input(), ready in any::<bool>()) {
        let mut widget = if ready {
            ready_widget(&pages_with("widget", 3))
        } else {
            loading_widget()
        };
        widget.on_input(&input);

        prop_assert_eq!(widget.view(), &ResultsView::Cleared);
        prop_assert_eq!(panel(&widget).html.as_str(), "");
        prop_assert!(!panel(&widget).open);
    }

    #[test]
    fn prop_loading_shows_only_placeholder(input in "[a-z]{2,12}") {
        let mut widget = loading_widget();
        widget.on_input(&input);
        prop_assert_eq!(widget.view(), &ResultsView::Loading);
    }

    /// Any keystroke sequence leaves the widget in a consistent state: the
    /// panel is open exactly when the view says it should be, and at most
    /// eight results are listed.
    #[test]
    fn prop_any_input_is_handled(inputs in prop::collection::vec(any_input(), 1..6)) {
        let mut widget = ready_widget(&pages_with("widget", 12));
        for input in &inputs {
            widget.on_input(input);
            let visible = widget.view().is_visible();
            prop_assert_eq!(widget.panel() == PanelState::Visible, visible);
            prop_assert_eq!(panel(&widget).open, visible);
            prop_assert!(widget.view().items().len() <= 8);
        }
    }
}
