//! Failures raised by the action controller.
//!
//! DESIGN
//! ======
//! A missing element is only an error where the caller did not guard the
//! lookup (`toggle_action_visibility`). Registration absorbs it, and an
//! empty action group is never an error. At the WASM boundary every variant
//! becomes a thrown JavaScript `Error` carrying the display message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("no element with id {0:?}")]
    MissingElement(String),
    #[error("failed to set style on {id:?}: {message}")]
    Style { id: String, message: String },
    #[error("failed to attach click listener: {0}")]
    Listener(String),
    #[error("invalid binding: button {button_id:?} -> action {action_id:?}")]
    InvalidBinding { button_id: String, action_id: String },
    #[error("invalid binding table: {0}")]
    Config(#[from] serde_json::Error),
}

impl ActionError {
    /// Stable code for the host to branch on.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingElement(_) => "E_MISSING_ELEMENT",
            Self::Style { .. } => "E_STYLE",
            Self::Listener(_) => "E_LISTENER",
            Self::InvalidBinding { .. } => "E_INVALID_BINDING",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

#[cfg(feature = "browser")]
impl From<ActionError> for wasm_bindgen::JsValue {
    fn from(err: ActionError) -> Self {
        let js_err = js_sys::Error::new(&err.to_string());
        js_err.set_name(err.error_code());
        js_err.into()
    }
}
