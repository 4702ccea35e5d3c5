//! About Section
//!
//! Bio text plus the statistics block. The statistics count up once, the
//! first time the block is at least half visible.

use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use gloo::utils::window;
use portfolio_core::effects::{CountUp, RevealRule};

use crate::browser;
use crate::content::{ABOUT_PARAGRAPHS, STATS};
use crate::context::{use_config, use_reveal};

const STATS_ID: &str = "aboutStats";

fn stats_in_view(rule: RevealRule) -> bool {
    browser::viewport_rect(STATS_ID)
        .is_some_and(|rect| rule.intersects(rect, browser::viewport_height()))
}

#[component]
pub fn About() -> Element {
    let config = use_config();
    let content_class = use_reveal("about-content");
    let mut labels = use_signal(|| STATS.map(|(value, _)| value.to_string()));
    let mut seen = use_signal(|| false);
    let mut started = use_signal(|| false);
    let rule = RevealRule::counters(&config);

    // Watch the stats block until it has been seen once
    let _listener = use_hook(move || {
        Rc::new(EventListener::new(&window(), "scroll", move |_| {
            if !*seen.peek() && stats_in_view(rule) {
                seen.set(true);
            }
        }))
    });

    // Stats may already be on screen at load
    use_effect(move || {
        if !*seen.peek() && stats_in_view(rule) {
            seen.set(true);
        }
    });

    let steps = config.counter.steps;
    let tick_ms = config.counter.tick_ms;
    use_effect(move || {
        if !seen() || *started.peek() {
            return;
        }
        started.set(true);
        tracing::debug!("Statistics counters started");

        for (index, (label, _)) in STATS.iter().enumerate() {
            let Some(frames) = CountUp::parse(label, steps) else {
                continue;
            };
            spawn(async move {
                for frame in frames {
                    labels.write()[index] = frame;
                    TimeoutFuture::new(tick_ms).await;
                }
            });
        }
    });

    let shown = labels();

    rsx! {
        section { id: "about", class: "about-section",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                div { id: "about-content", class: "about-content {content_class}",
                    for paragraph in ABOUT_PARAGRAPHS {
                        p { "{paragraph}" }
                    }
                }
                div { id: STATS_ID, class: "about-stats",
                    for (value, (_, caption)) in shown.iter().zip(STATS.iter()) {
                        div { key: "{caption}", class: "stat-item",
                            span { class: "stat-number", "{value}" }
                            span { class: "stat-label", "{caption}" }
                        }
                    }
                }
            }
        }
    }
}
