//! In-memory document for running the controller without a browser.
//!
//! `MemoryDom` holds a flat list of elements in document order, each with an
//! id, a class list, an inline `display` value, and its click listeners.
//! Cloning shares the same document, the way every browser `Document`
//! handle refers to the one page. Like the browser it is single-threaded
//! (`Rc<RefCell<_>>`), and listeners are dispatched with the document
//! unborrowed so they can call back into it.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::consts::ACTION_CLASS;
use crate::display::Display;
use crate::dom::{ActionDom, ClickHandler};
use crate::error::ActionError;

/// Stable handle to an element inserted into a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey(u64);

struct Node {
    key: NodeKey,
    id: String,
    classes: Vec<String>,
    display: String,
    styled: bool,
    listeners: Vec<ClickHandler>,
}

#[derive(Default)]
struct Inner {
    next_key: u64,
    nodes: Vec<Node>,
}

impl Inner {
    fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.iter().find(|n| n.key == key)
    }

    fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.key == key)
    }

    fn key_by_id(&self, id: &str) -> Option<NodeKey> {
        if id.is_empty() {
            return None;
        }
        self.nodes.iter().find(|n| n.id == id).map(|n| n.key)
    }
}

/// Shared in-memory document.
#[derive(Clone, Default)]
pub struct MemoryDom {
    inner: Rc<RefCell<Inner>>,
}

impl std::fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDom")
            .field("elements", &self.inner.borrow().nodes.len())
            .finish()
    }
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Page side ---

    /// Append an element. An empty `display` means no inline style.
    pub fn insert(&self, id: &str, classes: &[&str], display: &str) -> NodeKey {
        let mut inner = self.inner.borrow_mut();
        let key = NodeKey(inner.next_key);
        inner.next_key += 1;
        inner.nodes.push(Node {
            key,
            id: id.to_owned(),
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            display: display.to_owned(),
            styled: true,
            listeners: Vec::new(),
        });
        key
    }

    /// Append an element with no inline style declaration, like a MathML
    /// node. Style writes to it fail.
    pub fn insert_unstyled(&self, id: &str, classes: &[&str]) -> NodeKey {
        let key = self.insert(id, classes, "");
        if let Some(node) = self.inner.borrow_mut().node_mut(key) {
            node.styled = false;
        }
        key
    }

    /// Append a panel in the default `action` group.
    pub fn insert_action(&self, id: &str, display: &str) -> NodeKey {
        self.insert(id, &[ACTION_CLASS], display)
    }

    /// Append a trigger with no classes and no inline style.
    pub fn insert_button(&self, id: &str) -> NodeKey {
        self.insert(id, &[], "")
    }

    /// Remove an element along with its listeners. Returns whether it existed.
    pub fn remove(&self, key: NodeKey) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.nodes.len();
        inner.nodes.retain(|n| n.key != key);
        inner.nodes.len() != before
    }

    /// Overwrite an element's inline `display`, as page script might.
    pub fn set_raw_display(&self, key: NodeKey, display: &str) {
        if let Some(node) = self.inner.borrow_mut().node_mut(key) {
            display.clone_into(&mut node.display);
        }
    }

    // --- Inspection ---

    /// Inline `display` of the first element with id `id`.
    #[must_use]
    pub fn display_of(&self, id: &str) -> Option<String> {
        let inner = self.inner.borrow();
        let key = inner.key_by_id(id)?;
        inner.node(key).map(|n| n.display.clone())
    }

    /// Whether the first element with id `id` is shown (`display: block`).
    #[must_use]
    pub fn is_shown(&self, id: &str) -> bool {
        self.display_of(id).is_some_and(|d| Display::is_shown(&d))
    }

    /// Number of click listeners on the first element with id `id`.
    #[must_use]
    pub fn listener_count(&self, id: &str) -> usize {
        let inner = self.inner.borrow();
        inner
            .key_by_id(id)
            .and_then(|key| inner.node(key))
            .map_or(0, |n| n.listeners.len())
    }

    /// Number of elements in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // --- Events ---

    /// Dispatch a click to the first element with id `id`.
    ///
    /// Returns one result per listener, in registration order. A failing
    /// listener does not stop the ones after it. Clicking an id that matches
    /// nothing dispatches nothing.
    pub fn click(&self, id: &str) -> Vec<Result<(), ActionError>> {
        let key = self.inner.borrow().key_by_id(id);
        key.map_or_else(Vec::new, |key| self.click_node(key))
    }

    /// Dispatch a click to the element `key`.
    pub fn click_node(&self, key: NodeKey) -> Vec<Result<(), ActionError>> {
        let mut listeners = match self.inner.borrow_mut().node_mut(key) {
            Some(node) => std::mem::take(&mut node.listeners),
            None => return Vec::new(),
        };

        let results: Vec<_> = listeners.iter_mut().map(|listener| listener()).collect();

        // Listeners added during dispatch stay after the ones that ran.
        if let Some(node) = self.inner.borrow_mut().node_mut(key) {
            listeners.append(&mut node.listeners);
            node.listeners = listeners;
        }
        results
    }
}

impl ActionDom for MemoryDom {
    type Element = NodeKey;

    fn elements_by_class(&self, class: &str) -> Vec<NodeKey> {
        self.inner
            .borrow()
            .nodes
            .iter()
            .filter(|n| n.classes.iter().any(|c| c == class))
            .map(|n| n.key)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeKey> {
        self.inner.borrow().key_by_id(id)
    }

    fn element_id(&self, element: &NodeKey) -> String {
        self.inner
            .borrow()
            .node(*element)
            .map(|n| n.id.clone())
            .unwrap_or_default()
    }

    fn display(&self, element: &NodeKey) -> String {
        self.inner
            .borrow()
            .node(*element)
            .map(|n| n.display.clone())
            .unwrap_or_default()
    }

    fn set_display(&self, element: &NodeKey, display: Display) -> Result<(), ActionError> {
        let inner = self.inner.borrow();
        // Writing to a detached element succeeds in the browser too.
        if let Some(node) = inner.node(*element).filter(|n| !n.styled) {
            return Err(ActionError::Style {
                id: node.id.clone(),
                message: "element has no inline style".to_owned(),
            });
        }
        drop(inner);
        self.set_raw_display(*element, display.as_css());
        Ok(())
    }

    fn on_click(&self, element: &NodeKey, handler: ClickHandler) -> Result<(), ActionError> {
        if let Some(node) = self.inner.borrow_mut().node_mut(*element) {
            node.listeners.push(handler);
        }
        Ok(())
    }
}
