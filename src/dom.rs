//! The DOM seam the controller runs against.
//!
//! `ActionDom` covers exactly what the controller needs from a document:
//! live lookups by class and by id, reading and writing the inline
//! `display` style, and attaching click listeners. [`crate::web::WebDom`]
//! implements it over `web_sys::Document`; [`crate::memory::MemoryDom`]
//! implements it in memory so the controller can be tested natively.

use crate::display::Display;
use crate::error::ActionError;

/// Listener body attached to a trigger. Runs once per click.
pub type ClickHandler = Box<dyn FnMut() -> Result<(), ActionError>>;

/// Document operations used by [`crate::controller::ActionController`].
///
/// Every lookup must read the live document; implementations must not cache
/// element sets between calls.
pub trait ActionDom {
    /// Handle to a single element.
    type Element;

    /// All elements currently carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// The first element whose id is `id`, if any.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The element's id attribute (empty when unset).
    fn element_id(&self, element: &Self::Element) -> String;

    /// The element's raw inline `display` value (empty when unset).
    fn display(&self, element: &Self::Element) -> String;

    /// Write the element's inline `display` value.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::Style` if the host rejects the write.
    fn set_display(&self, element: &Self::Element, display: Display) -> Result<(), ActionError>;

    /// Attach `handler` as a click listener for the lifetime of `element`.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::Listener` if the host rejects the registration.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), ActionError>;
}
