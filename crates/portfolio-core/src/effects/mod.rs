//! Page effects that react to scroll, pointer and timer events.
//!
//! Each effect is a small state machine or pure function. None of them
//! touch the DOM; the web binary measures the page, feeds the numbers in
//! and applies the returned classes, styles and labels.

mod cards;
mod counter;
mod navbar;
mod reveal;
mod theme;
mod typing;

pub use cards::{card_transform, ImagePreview, CARD_HOVER_TRANSFORM, CARD_REST_TRANSFORM};
pub use counter::CountUp;
pub use navbar::{
    active_section, anchor_target, scroll_target, NavbarScroll, NavbarStyle, SectionBounds,
    NAVBAR_BACKGROUND, NAVBAR_SHADOW,
};
pub use reveal::{RevealRule, RevealTracker, ViewportRect, FADE_IN_CLASS, REVEALED_CLASS};
pub use theme::{Theme, ThemeIcon, ThemePreference, TOGGLE_REST, TOGGLE_SPIN};
pub use typing::{Typewriter, TypingFrame};
