//! Theme Toggle Component
//!
//! Fixed button switching between light and dark themes. Shows a sun in
//! dark mode and a moon in light mode, and spins while `spinning` is set.

use dioxus::prelude::*;
use portfolio_core::effects::{Theme, ThemeIcon, TOGGLE_REST, TOGGLE_SPIN};

use super::icons::{Icon, SvgIcon};

/// Icon for a theme toggle glyph
pub fn toggle_icon(theme: Theme) -> Icon {
    match theme.icon() {
        ThemeIcon::Sun => Icon::Sun,
        ThemeIcon::Moon => Icon::Moon,
    }
}

/// Properties for the ThemeToggle component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeToggleProps {
    /// Theme currently applied to the page
    pub theme: Theme,
    /// Whether the spin animation is running
    #[props(default = false)]
    pub spinning: bool,
    pub onclick: EventHandler<()>,
}

#[component]
pub fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let transform = if props.spinning { TOGGLE_SPIN } else { TOGGLE_REST };
    let label = match props.theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            "aria-label": label,
            style: "transform: {transform}",
            onclick: move |_| props.onclick.call(()),
            SvgIcon { icon: toggle_icon(props.theme) }
        }
    }
}
