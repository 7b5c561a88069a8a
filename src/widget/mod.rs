// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search widget controller.
//!
//! One [`SearchWidget`] per page. It owns the corpus and index once they
//! arrive, and the two page elements it was mounted on. Every event handler is
//! synchronous and infallible: the worst any of them can do is show "No
//! results found" or the loading placeholder.
//!
//! # Event flow
//!
//! ```text
//! keystroke ─▶ on_input ─┬─ trimmed < min_query_chars ─▶ Cleared (hidden)
//!                        ├─ index not ready ───────────▶ Loading
//!                        └─ rank(query*) / rank(query) ─▶ render ─▶ NoResults | Results
//! click ─────▶ on_document_click ─ outside both ─▶ hide (content kept)
//! keydown ───▶ on_keydown ─ "Escape" ─▶ hide + blur
//! ```

mod dom;
mod state;

pub use dom::{Element, ResultsPanel, SearchInput};
pub use state::{IndexPhase, IndexState, PanelState};

use crate::config::WidgetConfig;
use crate::corpus::Corpus;
use crate::index::{IndexBuilder, Searchable};
use crate::loader::LoadError;
use crate::render::{self, Messages, ResultItem, ResultsView};
use crate::snippet;
use crate::types::Match;
use std::collections::HashSet;

/// Whether the widget found its elements.
pub enum Mode<I, R> {
    /// An element was missing at mount time. Every handler is a no-op.
    Inert,
    Active { input: I, results: R },
}

pub struct SearchWidget<I, R, B: IndexBuilder> {
    mode: Mode<I, R>,
    builder: B,
    config: WidgetConfig,
    index: IndexState<B::Index>,
    panel: PanelState,
    query: String,
    view: ResultsView,
}

impl<I, R, B> SearchWidget<I, R, B>
where
    I: SearchInput,
    R: ResultsPanel<Node = I::Node>,
    B: IndexBuilder,
{
    /// Attach to the page. Missing elements leave the widget inert.
    pub fn mount(input: Option<I>, results: Option<R>, builder: B, config: WidgetConfig) -> Self {
        let mode = match (input, results) {
            (Some(input), Some(results)) => Mode::Active { input, results },
            _ => {
                log::debug!(
                    "search widget inert: #{} or #{} not found",
                    config.input_id,
                    config.results_id
                );
                Mode::Inert
            }
        };

        Self {
            mode,
            builder,
            config,
            index: IndexState::Uninitialized,
            panel: PanelState::Hidden,
            query: String::new(),
            view: ResultsView::Cleared,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.mode, Mode::Active { .. })
    }

    pub fn phase(&self) -> IndexPhase {
        self.index.phase()
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// The view most recently pushed to the panel.
    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    /// The last trimmed query seen by `on_input`.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn corpus(&self) -> Option<&Corpus> {
        match &self.index {
            IndexState::Ready { corpus, .. } => Some(corpus),
            _ => None,
        }
    }

    /// The mounted elements, if any.
    pub fn elements(&self) -> Option<(&I, &R)> {
        match &self.mode {
            Mode::Active { input, results } => Some((input, results)),
            Mode::Inert => None,
        }
    }

    /// Move to `Loading`. Returns `true` exactly once, on an active widget:
    /// that is the caller's cue to start the one and only corpus fetch.
    pub fn begin_loading(&mut self) -> bool {
        if !self.is_active() || !matches!(self.index, IndexState::Uninitialized) {
            return false;
        }
        self.index = IndexState::Loading;
        true
    }

    /// Hand over the result of the corpus fetch.
    ///
    /// On success the index is built right here, synchronously. On failure the
    /// widget stays not-ready for the rest of the page's life. Only accepted
    /// after [`begin_loading`](Self::begin_loading), and only once.
    pub fn install_corpus(&mut self, loaded: Result<Corpus, LoadError>) {
        if !self.is_active() {
            return;
        }
        if !matches!(self.index, IndexState::Loading) {
            log::warn!("search corpus delivered outside a load ({:?}); ignoring", self.phase());
            return;
        }

        self.index = match loaded {
            Ok(corpus) => {
                let index = self.builder.build(&corpus);
                log::info!("search ready: {} documents", corpus.len());
                IndexState::Ready { corpus, index }
            }
            Err(err) => {
                log::warn!("Search index not available: {err}");
                IndexState::Unavailable
            }
        };
    }

    /// Keystroke handler. `raw` is the input's current value.
    pub fn on_input(&mut self, raw: &str) {
        if !self.is_active() {
            return;
        }

        let query = raw.trim();
        self.query = query.to_string();

        if query.chars().count() < self.config.min_query_chars {
            self.show(ResultsView::Cleared);
            return;
        }

        let matches = match &self.index {
            IndexState::Ready { index, .. } => rank(index, query),
            _ => {
                self.show(ResultsView::Loading);
                return;
            }
        };

        self.render(&matches, query);
    }

    /// Turn ranked matches into the panel's contents and open it.
    pub fn render(&mut self, matches: &[Match], query: &str) {
        if !self.is_active() {
            return;
        }
        let view = self.build_view(matches, query);
        self.show(view);
    }

    /// Click anywhere on the page.
    pub fn on_document_click(&mut self, target: &I::Node) {
        let Mode::Active { input, results } = &mut self.mode else {
            return;
        };
        if input.contains(target) || results.contains(target) {
            return;
        }
        results.set_open(false);
        self.panel = PanelState::Hidden;
    }

    /// Key pressed while the input has focus.
    pub fn on_keydown(&mut self, key: &str) {
        if key != "Escape" {
            return;
        }
        let Mode::Active { input, results } = &mut self.mode else {
            return;
        };
        results.set_open(false);
        input.blur();
        self.panel = PanelState::Hidden;
    }

    fn build_view(&self, matches: &[Match], query: &str) -> ResultsView {
        if matches.is_empty() {
            return ResultsView::NoResults;
        }

        let corpus = self.corpus();
        // A duplicated url resolves to the same document every time
        let mut seen = HashSet::new();
        let items = matches
            .iter()
            .filter(|hit| seen.insert(hit.reference.as_str()))
            .take(self.config.max_results)
            .filter_map(|hit| corpus.and_then(|c| c.get(&hit.reference)))
            .map(|doc| ResultItem {
                url: doc.url.clone(),
                title: doc.title.clone(),
                snippet: snippet::extract(&doc.content, query, &self.config.snippet),
            })
            .collect();

        ResultsView::Results(items)
    }

    fn show(&mut self, view: ResultsView) {
        let Mode::Active { results, .. } = &mut self.mode else {
            return;
        };
        let html = render::to_html(
            &view,
            Messages {
                loading: &self.config.loading_message,
                empty: &self.config.empty_message,
            },
        );
        results.set_content(&html);
        results.set_open(view.is_visible());
        self.panel = if view.is_visible() {
            PanelState::Visible
        } else {
            PanelState::Hidden
        };
        self.view = view;
    }
}

/// Prefix query first, plain query if the prefix form is rejected, nothing if
/// both are.
pub fn rank<X: Searchable>(index: &X, query: &str) -> Vec<Match> {
    let prefixed = format!("{query}*");
    let parsed = index.parse(&prefixed).or_else(|err| {
        log::debug!("prefix query {prefixed:?} rejected ({err}); retrying plain");
        index.parse(query)
    });

    match parsed {
        Ok(parsed) => index.execute(&parsed),
        Err(err) => {
            log::debug!("query {query:?} rejected: {err}");
            Vec::new()
        }
    }
}
