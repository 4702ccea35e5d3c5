use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use portfolio_core::effects::ThemePreference;
use portfolio_ui::ThemeToggle;

use crate::browser::{self, BrowserStore};
use crate::components::{
    About, ContactModal, ContactSection, Footer, Hero, ImagePreviewModal, Navbar, Projects,
    Skills,
};
use crate::context::{
    use_config, use_theme, ContactDialog, PreviewTarget, RevealState, SharedTheme,
};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides the shared page state, applies the stored theme and keeps the
/// scroll-reveal tracker current.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| Rc::new(crate::page_config()));
    let theme: SharedTheme = use_context_provider(|| {
        Signal::new(ThemePreference::from_config(BrowserStore, &config))
    });
    use_context_provider(ContactDialog::new);
    use_context_provider(|| PreviewTarget(Signal::new(None)));
    let reveal = use_context_provider(|| RevealState::new(&config));

    // Theme attribute follows the preference
    use_effect(move || {
        let current = theme.read().current();
        if let Err(e) = browser::apply_theme(current) {
            tracing::warn!("Failed to apply theme: {:#}", e);
        }
    });

    // Reveal targets are measured on every scroll
    use_hook({
        let reveal = reveal.clone();
        move || {
            Rc::new(EventListener::new(&gloo::utils::window(), "scroll", move |_| {
                reveal.clone().scan();
            }))
        }
    });

    // Content already in view on load
    use_effect({
        let reveal = reveal.clone();
        move || reveal.clone().scan()
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        ThemeSwitch {}
        Navbar {}
        main {
            Hero {}
            About {}
            Skills {}
            Projects {}
            ContactSection {}
        }
        Footer {}
        ContactModal {}
        ImagePreviewModal {}
    }
}

/// Theme toggle with its click animation.
#[component]
fn ThemeSwitch() -> Element {
    let config = use_config();
    let mut theme = use_theme();
    let mut spinning = use_signal(|| false);
    let spin_ms = config.theme_spin_ms;
    let current = theme.read().current();

    rsx! {
        ThemeToggle {
            theme: current,
            spinning: spinning(),
            onclick: move |_: ()| {
                match theme.write().toggle() {
                    Ok(next) => tracing::info!(theme = %next.as_str(), "Theme switched"),
                    Err(e) => tracing::warn!("Theme switched but not saved: {}", e),
                }
                spinning.set(true);
                spawn(async move {
                    TimeoutFuture::new(spin_ms).await;
                    spinning.set(false);
                });
            },
        }
    }
}
