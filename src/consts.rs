//! Shared string constants for the action-panels crate.

// ── Grouping ────────────────────────────────────────────────────

/// Class shared by every panel that takes part in mutual exclusion.
pub const ACTION_CLASS: &str = "action";

// ── Styles ──────────────────────────────────────────────────────

/// CSS property the controller reads and writes.
pub const DISPLAY_PROPERTY: &str = "display";

/// Inline display value of a visible panel.
pub const DISPLAY_BLOCK: &str = "block";

/// Inline display value of a hidden panel.
pub const DISPLAY_NONE: &str = "none";

// ── Events ──────────────────────────────────────────────────────

/// DOM event that drives a trigger.
pub const CLICK_EVENT: &str = "click";
