//! Browser binding for WASM environments.
//!
//! This module provides [`WebDom`], the `web-sys` implementation of the
//! [`Dom`] facade, and the wasm entry point that wires the page together:
//! read the location query string, parse it, initialize the page, and toggle
//! full screen on double-click.
//!
//! # Feature Flag
//!
//! This module is only available with the `web` feature enabled:
//!
//! ```toml
//! [dependencies]
//! bigmoji = { version = "0.1", features = ["web"] }
//! ```
//!
//! The host page only needs the container element:
//!
//! ```html
//! <body><div id="emoji-wrapper"></div></body>
//! ```

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleSheet, Document, Element, HtmlStyleElement};

use crate::dom::{Dom, PageError};
use crate::page::{self, CONTAINER_ID};
use crate::params::parse_query;

// ============================================================================
// WebDom
// ============================================================================

/// [`Dom`] implementation over the live browser document.
///
/// Cheap to clone: it only holds JS handles.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
    container: Element,
}

impl WebDom {
    /// Binds to the given document, looking up the container element by id.
    pub fn new(document: Document, container_id: &str) -> Result<Self, PageError> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PageError::MissingContainer(container_id.to_string()))?;

        Ok(Self {
            document,
            container,
        })
    }

    /// Returns the container element rendered emoji go into.
    pub fn container(&self) -> &Element {
        &self.container
    }

    fn try_insert_style_rule(&self, rule: &str) -> Result<(), JsValue> {
        let style: HtmlStyleElement = self.document.create_element("style")?.dyn_into()?;
        self.document
            .head()
            .ok_or_else(|| JsValue::from_str("document has no head"))?
            .append_child(&style)?;

        let sheet: CssStyleSheet = style
            .sheet()
            .ok_or_else(|| JsValue::from_str("style element has no sheet"))?
            .dyn_into()?;
        sheet.insert_rule_with_index(rule, 0)?;
        Ok(())
    }
}

impl Dom for WebDom {
    fn set_container_html(&mut self, html: &str) {
        self.container.set_inner_html(html);
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_background_color(&mut self, color: &str) {
        let Some(body) = self.document.body() else {
            warn!("document has no body, background color not applied");
            return;
        };
        if let Err(err) = body.style().set_property("background-color", color) {
            warn!("could not set background color {color:?}: {err:?}");
        }
    }

    fn insert_style_rule(&mut self, rule: &str) {
        if let Err(err) = self.try_insert_style_rule(rule) {
            warn!("could not insert style rule {rule:?}: {err:?}");
        }
    }

    fn supports_fullscreen(&self) -> bool {
        self.document.fullscreen_enabled()
    }

    fn fullscreen_active(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    fn enter_fullscreen(&mut self) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if let Err(err) = root.request_fullscreen() {
            warn!("full-screen request rejected: {err:?}");
        }
    }

    fn exit_fullscreen(&mut self) {
        self.document.exit_fullscreen();
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Initializes the page. Runs automatically when the wasm module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;

    let search = window.location().search().unwrap_or_default();
    let query = search.strip_prefix('?').unwrap_or(&search);
    let params = parse_query(query);

    let mut dom = WebDom::new(document, CONTAINER_ID)?;
    page::init(&mut dom, &params);

    // Toggle full screen on double click.
    let mut toggle_dom = dom.clone();
    let on_dblclick = Closure::<dyn FnMut()>::new(move || {
        page::toggle_fullscreen(&mut toggle_dom);
    });
    dom.container()
        .add_event_listener_with_callback("dblclick", on_dblclick.as_ref().unchecked_ref())
        .map_err(|_| JsError::new("could not register dblclick listener"))?;
    // The listener lives for the rest of the page.
    on_dblclick.forget();

    Ok(())
}
