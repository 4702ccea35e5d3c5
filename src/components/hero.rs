//! Hero Section
//!
//! Greeting, typed role line and the two calls to action.

use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use portfolio_core::effects::{scroll_target, Typewriter};
use portfolio_ui::{Button, ButtonVariant, Icon, SvgIcon};

use crate::browser;
use crate::content::OWNER_FULL_NAME;
use crate::context::{use_config, use_contact_dialog};

#[component]
pub fn Hero() -> Element {
    let config = use_config();
    let mut typed = use_signal(String::new);
    let mut dialog = use_contact_dialog();

    // Typing loop; the task belongs to this component and stops with it
    use_effect({
        let config = config.clone();
        move || {
            let Some(mut writer) = Typewriter::from_config(&config.typing) else {
                tracing::debug!("No typing phrases configured");
                return;
            };
            let start_delay = config.typing.start_delay_ms;
            spawn(async move {
                TimeoutFuture::new(start_delay).await;
                loop {
                    let frame = writer.tick();
                    typed.set(frame.text.clone());
                    TimeoutFuture::new(frame.delay_ms()).await;
                }
            });
        }
    });

    let nav_offset = config.nav_offset;
    let view_work = move |_: ()| {
        if let Some(top) = browser::section_top("projects") {
            browser::smooth_scroll_to(scroll_target(top, nav_offset));
        }
    };

    rsx! {
        section { id: "home", class: "hero-section",
            div { class: "container hero-content",
                h1 { class: "hero-title",
                    "Hi, I'm "
                    span { class: "highlight", "{OWNER_FULL_NAME}" }
                }
                p { class: "hero-subtitle",
                    span { class: "typed-text", "{typed}" }
                    span { class: "typed-cursor", "|" }
                }
                div { class: "hero-buttons",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: view_work,
                        "View My Work"
                    }
                    Button {
                        variant: ButtonVariant::OutlineLight,
                        onclick: move |_| dialog.open(),
                        "Get In Touch"
                    }
                }
            }
            div { class: "scroll-indicator",
                SvgIcon { icon: Icon::ChevronDown, size: 28 }
            }
        }
    }
}
