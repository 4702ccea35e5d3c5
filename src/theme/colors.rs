//! Color constants shared outside the stylesheet.
//!
//! The stylesheet carries its own custom properties; these mirror the
//! ones needed from Rust (console banner).

/// Brand accent, `--accent` in the stylesheet
pub const ACCENT: &str = "#6c5ce7";

/// Text drawn on top of the accent
pub const TEXT_ON_ACCENT: &str = "#ffffff";
