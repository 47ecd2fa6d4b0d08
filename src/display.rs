//! The two inline `display` values an action panel can hold.
//!
//! Only the exact string `"block"` counts as shown. Anything else, including
//! an unset inline style or a value like `"flex"` written by the page, is
//! treated as hidden by the toggle rule.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use std::fmt;

use crate::consts::{DISPLAY_BLOCK, DISPLAY_NONE};

/// Display state written to an action panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Visible (`display: block`).
    Block,
    /// Hidden (`display: none`).
    None,
}

impl Display {
    /// The CSS value for this state.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => DISPLAY_BLOCK,
            Self::None => DISPLAY_NONE,
        }
    }

    /// Whether a raw inline display value counts as shown.
    #[must_use]
    pub fn is_shown(raw: &str) -> bool {
        raw == DISPLAY_BLOCK
    }

    /// The state a toggle moves to from the raw inline value `raw`.
    #[must_use]
    pub fn toggled_from(raw: &str) -> Self {
        if Self::is_shown(raw) { Self::None } else { Self::Block }
    }
}

impl fmt::Display for Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
