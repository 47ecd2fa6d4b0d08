//! Binding tables and logger settings passed in from page initialization.
//!
//! A binding table lets a page wire all of its triggers in one call:
//!
//! ```json
//! { "group_class": "action",
//!   "bindings": [ { "button_id": "b1", "action_id": "p1" } ] }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::ACTION_CLASS;
use crate::error::ActionError;

/// Console log level used when none (or an unknown one) is given.
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// One trigger wired to one panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerBinding {
    pub button_id: String,
    pub action_id: String,
}

/// A group class plus the triggers that drive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionConfig {
    #[serde(default = "default_group_class")]
    pub group_class: String,
    #[serde(default)]
    pub bindings: Vec<TriggerBinding>,
}

fn default_group_class() -> String {
    ACTION_CLASS.to_owned()
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self { group_class: default_group_class(), bindings: Vec::new() }
    }
}

impl ActionConfig {
    /// Parse and validate a JSON binding table.
    ///
    /// # Errors
    ///
    /// Returns `Config` for malformed JSON and `InvalidBinding` for a binding
    /// with an empty id.
    pub fn from_json(raw: &str) -> Result<Self, ActionError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bindings that could never match an element.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBinding` for the first binding with an empty id.
    pub fn validate(&self) -> Result<(), ActionError> {
        match self
            .bindings
            .iter()
            .find(|b| b.button_id.is_empty() || b.action_id.is_empty())
        {
            Some(bad) => Err(ActionError::InvalidBinding {
                button_id: bad.button_id.clone(),
                action_id: bad.action_id.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Resolve a console log level name, falling back to [`DEFAULT_LOG_LEVEL`].
#[must_use]
pub fn log_level(raw: Option<&str>) -> log::Level {
    raw.map_or(DEFAULT_LOG_LEVEL, |name| name.trim().parse().unwrap_or(DEFAULT_LOG_LEVEL))
}
