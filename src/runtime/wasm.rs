// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings: put the widget on a real page.
//!
//! This is the browser-facing API, and it is one function. `mountSearchBox`
//! finds the two elements, wires three event listeners, and starts the corpus
//! fetch. Everything after that happens in the controller.
//!
//! ```js
//! import init, { mountSearchBox } from "./searchbox.js";
//!
//! await init();
//! mountSearchBox();                        // stock ids, no debounce
//! mountSearchBox({ debounceMs: 120 });     // or tune it
//! ```
//!
//! The controller sits in an `Rc<RefCell<_>>` shared by the listeners and the
//! load task. Handlers borrow it for the duration of one synchronous call; the
//! load task only borrows after its `.await` completes.

use super::console;
use crate::config::WidgetConfig;
use crate::index::FullTextBuilder;
use crate::loader::{fetch_corpus, CorpusSource, LoadError};
use crate::types::IndexSchema;
use crate::widget::{Element, ResultsPanel, SearchInput, SearchWidget};
use gloo_net::http::Request;
use js_sys::Function;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, KeyboardEvent, Node, Window};

/// The page's search `<input>`.
struct PageInput(HtmlInputElement);

impl Element for PageInput {
    type Node = Node;

    fn contains(&self, node: &Node) -> bool {
        self.0.contains(Some(node))
    }
}

impl SearchInput for PageInput {
    fn blur(&mut self) {
        if let Err(err) = self.0.blur() {
            log::debug!("blur failed: {err:?}");
        }
    }
}

/// The results container.
struct PagePanel {
    element: web_sys::Element,
    active_class: String,
}

impl Element for PagePanel {
    type Node = Node;

    fn contains(&self, node: &Node) -> bool {
        self.element.contains(Some(node))
    }
}

impl ResultsPanel for PagePanel {
    fn set_content(&mut self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn set_open(&mut self, open: bool) {
        let classes = self.element.class_list();
        let toggled = if open {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(err) = toggled {
            log::debug!("class toggle failed: {err:?}");
        }
    }
}

/// Same-origin HTTP GET.
struct HttpSource;

impl CorpusSource for HttpSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, LoadError>> {
        let url = url.to_string();
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| LoadError::Network {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            if !response.ok() {
                return Err(LoadError::Status {
                    url,
                    status: response.status(),
                });
            }

            response.text().await.map_err(|e| LoadError::Network {
                url,
                message: e.to_string(),
            })
        }
    }
}

type PageWidget = SearchWidget<PageInput, PagePanel, FullTextBuilder>;

/// Mount the search box on the current page.
///
/// `options` is an optional object; see `WidgetConfig` for the keys
/// (`inputId`, `resultsId`, `maxResults`, `debounceMs`, ...). If either
/// element is missing this returns `Ok` and does nothing.
#[wasm_bindgen(js_name = "mountSearchBox")]
pub fn mount_search_box(options: JsValue) -> Result<(), JsValue> {
    let config: WidgetConfig = if options.is_undefined() || options.is_null() {
        WidgetConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
    };
    console::init(config.level_filter());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let input_element = document
        .get_element_by_id(&config.input_id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());
    let results = document
        .get_element_by_id(&config.results_id)
        .map(|element| PagePanel {
            element,
            active_class: config.active_class.clone(),
        });

    let page_path = window.location().pathname()?;
    let index_file = config.index_file.clone();
    let debounce_ms = config.debounce_ms;
    let builder = FullTextBuilder::new(IndexSchema::site(config.title_boost, config.content_boost));

    let widget: Rc<RefCell<PageWidget>> = Rc::new(RefCell::new(SearchWidget::mount(
        input_element.clone().map(PageInput),
        results,
        builder,
        config,
    )));

    let Some(input_element) = input_element else {
        return Ok(());
    };
    if !widget.borrow().is_active() {
        return Ok(());
    }

    listen_input(&window, &input_element, &widget, debounce_ms)?;
    listen_keydown(&input_element, &widget)?;
    listen_click(&document, &widget)?;

    if widget.borrow_mut().begin_loading() {
        let widget = Rc::clone(&widget);
        wasm_bindgen_futures::spawn_local(async move {
            let loaded = fetch_corpus(&HttpSource, &page_path, &index_file).await;
            widget.borrow_mut().install_corpus(loaded);
        });
    }

    Ok(())
}

fn listen_input(
    window: &Window,
    input: &HtmlInputElement,
    widget: &Rc<RefCell<PageWidget>>,
    debounce_ms: u32,
) -> Result<(), JsValue> {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let window = window.clone();
    let target = input.clone();
    let widget = Rc::clone(widget);

    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let value = target.value();

        if debounce_ms == 0 {
            widget.borrow_mut().on_input(&value);
            return;
        }

        if let Some(handle) = pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        let delayed_widget = Rc::clone(&widget);
        let delayed_pending = Rc::clone(&pending);
        let callback = Closure::once_into_js(move || {
            delayed_pending.set(None);
            delayed_widget.borrow_mut().on_input(&value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<Function>(),
            debounce_ms as i32,
        ) {
            Ok(handle) => pending.set(Some(handle)),
            Err(err) => log::warn!("could not schedule search: {err:?}"),
        }
    });

    input.add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    handler.forget();
    Ok(())
}

fn listen_keydown(
    input: &HtmlInputElement,
    widget: &Rc<RefCell<PageWidget>>,
) -> Result<(), JsValue> {
    let widget = Rc::clone(widget);
    let handler = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        widget.borrow_mut().on_keydown(&event.key());
    });
    input.add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

fn listen_click(
    document: &web_sys::Document,
    widget: &Rc<RefCell<PageWidget>>,
) -> Result<(), JsValue> {
    let widget = Rc::clone(widget);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(node) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        widget.borrow_mut().on_document_click(&node);
    });
    document.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
