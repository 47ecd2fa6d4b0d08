//! `ActionDom` over the live browser document.
//!
//! This module is the only place that touches `web_sys` elements. Lookups go
//! straight to `getElementsByClassName` / `getElementById` on every call.
//! Click listeners are leaked with `Closure::forget` so they live as long as
//! the element they are attached to; errors from a listener are thrown back
//! to the browser's event dispatch.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, Element, Event, HtmlElement, SvgElement};

use crate::consts::{CLICK_EVENT, DISPLAY_PROPERTY};
use crate::display::Display;
use crate::dom::{ActionDom, ClickHandler};
use crate::error::ActionError;

/// Handle to the page's `document`.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The current window's document, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }
}

/// The element's inline style declaration. HTML and SVG elements have one;
/// other namespaces (MathML) do not.
fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

impl ActionDom for WebDom {
    type Element = Element;

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn element_id(&self, element: &Element) -> String {
        element.id()
    }

    fn display(&self, element: &Element) -> String {
        inline_style(element)
            .map(|style| style.get_property_value(DISPLAY_PROPERTY).unwrap_or_default())
            .unwrap_or_default()
    }

    fn set_display(&self, element: &Element, display: Display) -> Result<(), ActionError> {
        let Some(style) = inline_style(element) else {
            return Err(ActionError::Style {
                id: element.id(),
                message: "element has no inline style".to_owned(),
            });
        };
        style
            .set_property(DISPLAY_PROPERTY, display.as_css())
            .map_err(|e| ActionError::Style { id: element.id(), message: describe(&e) })
    }

    fn on_click(&self, element: &Element, handler: ClickHandler) -> Result<(), ActionError> {
        let mut handler = handler;
        let cb = Closure::wrap(Box::new(move |_event: Event| -> Result<(), JsValue> {
            handler().map_err(JsValue::from)
        }) as Box<dyn FnMut(Event) -> Result<(), JsValue>>);

        element
            .add_event_listener_with_callback(CLICK_EVENT, cb.as_ref().unchecked_ref())
            .map_err(|e| ActionError::Listener(describe(&e)))?;
        cb.forget();
        Ok(())
    }
}
