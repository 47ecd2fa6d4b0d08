//! Action controller — mutually exclusive visibility for a group of panels.
//!
//! DESIGN
//! ======
//! Panels join the group by class (`action` unless overridden). A click on a
//! registered trigger hides every other panel in the group, then flips its
//! own panel between `block` and `none`. The group is queried from the
//! document on every call, so panels added or removed by the page after
//! registration are picked up without re-registering.
//!
//! Lookups are guarded asymmetrically: registration silently skips a missing
//! trigger, while toggling a missing panel is an error. A click whose panel
//! has disappeared therefore still hides the rest of the group before it
//! fails.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::{ActionConfig, TriggerBinding};
use crate::consts::ACTION_CLASS;
use crate::display::Display;
use crate::dom::ActionDom;
use crate::error::ActionError;

// =============================================================================
// TYPES
// =============================================================================

/// Coordinates visibility among the panels of one action group.
#[derive(Debug, Clone)]
pub struct ActionController<D> {
    dom: D,
    group_class: String,
}

impl<D: ActionDom> ActionController<D> {
    /// Controller over the default `action` group.
    #[must_use]
    pub fn new(dom: D) -> Self {
        Self::with_group_class(dom, ACTION_CLASS)
    }

    /// Controller over the group of elements carrying `group_class`.
    #[must_use]
    pub fn with_group_class(dom: D, group_class: impl Into<String>) -> Self {
        Self { dom, group_class: group_class.into() }
    }

    /// Controller for the group named in a binding table.
    #[must_use]
    pub fn from_config(dom: D, config: &ActionConfig) -> Self {
        Self::with_group_class(dom, config.group_class.clone())
    }

    /// Class that marks membership in this controller's group.
    #[must_use]
    pub fn group_class(&self) -> &str {
        &self.group_class
    }

    // =========================================================================
    // VISIBILITY
    // =========================================================================

    /// Hide every panel in the group except the one whose id is `except_id`.
    ///
    /// An empty group, or an `except_id` that matches nothing, is not an error.
    ///
    /// A rejected style write does not stop the pass: every other panel is
    /// still hidden before the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the first `Style` error if the host rejects a style write.
    pub fn hide_all_other_actions(&self, except_id: &str) -> Result<(), ActionError> {
        let mut first_err = None;
        for element in self.dom.elements_by_class(&self.group_class) {
            if self.dom.element_id(&element) == except_id {
                continue;
            }
            if let Err(err) = self.dom.set_display(&element, Display::None) {
                first_err.get_or_insert(err);
            }
        }
        log::trace!("hid {} panels except {except_id:?}", self.group_class);
        first_err.map_or(Ok(()), Err)
    }

    /// Flip the panel `id` between `block` and `none`.
    ///
    /// Anything other than an inline `block` counts as hidden, so a panel with
    /// no inline style is shown by its first toggle.
    ///
    /// # Errors
    ///
    /// Returns `MissingElement` if no element has id `id`, or `Style` if the
    /// host rejects the write.
    pub fn toggle_action_visibility(&self, id: &str) -> Result<Display, ActionError> {
        let element = self
            .dom
            .element_by_id(id)
            .ok_or_else(|| ActionError::MissingElement(id.to_owned()))?;
        let next = Display::toggled_from(&self.dom.display(&element));
        self.dom.set_display(&element, next)?;
        log::debug!("panel {id:?} -> {next}");
        Ok(next)
    }

    /// The body of a trigger click: hide the rest of the group, then toggle
    /// `action_id`.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::hide_all_other_actions`] and
    /// [`Self::toggle_action_visibility`].
    pub fn show_action(&self, action_id: &str) -> Result<Display, ActionError> {
        self.hide_all_other_actions(action_id)?;
        self.toggle_action_visibility(action_id)
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

impl<D> ActionController<D>
where
    D: ActionDom + Clone + 'static,
{
    /// Make clicks on `button_id` show (or hide) the panel `action_id`.
    ///
    /// Returns `false` without attaching anything when no element has id
    /// `button_id`. The panel is not looked up until the first click.
    ///
    /// # Errors
    ///
    /// Returns `Listener` if the host rejects the listener.
    pub fn register_show_action_on_click(&self, button_id: &str, action_id: &str) -> Result<bool, ActionError> {
        let Some(button) = self.dom.element_by_id(button_id) else {
            log::debug!("trigger {button_id:?} not found; skipping");
            return Ok(false);
        };

        let controller = self.clone();
        let action_id = action_id.to_owned();
        log::debug!("trigger {button_id:?} -> panel {action_id:?}");
        self.dom.on_click(
            &button,
            Box::new(move || controller.show_action(&action_id).map(|_| ())),
        )?;
        Ok(true)
    }

    /// Register every binding in order. Returns how many listeners were
    /// attached; bindings whose trigger is missing are skipped.
    ///
    /// # Errors
    ///
    /// Stops at the first `Listener` error.
    pub fn register_all(&self, bindings: &[TriggerBinding]) -> Result<usize, ActionError> {
        let mut attached = 0;
        for binding in bindings {
            if self.register_show_action_on_click(&binding.button_id, &binding.action_id)? {
                attached += 1;
            }
        }
        log::debug!("attached {attached} of {} triggers", bindings.len());
        Ok(attached)
    }
}
