//! Navigation Bar Component
//!
//! Fixed top navbar with in-page links. Listens to window scroll to
//! elevate/hide itself and to highlight the link of the section under
//! the viewport top. Link clicks scroll smoothly to the target section
//! and collapse the mobile menu.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::window;
use portfolio_core::effects::{active_section, anchor_target, scroll_target, NavbarScroll, NavbarStyle};
use portfolio_ui::{Icon, SvgIcon};

use crate::browser;
use crate::content::{section_ids, OWNER_NAME, SECTIONS};
use crate::context::use_config;

/// Class for a nav link
pub fn nav_link_class(id: &str, active: Option<&str>) -> &'static str {
    if active == Some(id) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn Navbar() -> Element {
    let config = use_config();
    let mut style = use_signal(NavbarStyle::default);
    let mut active = use_signal(|| None::<String>);
    let mut menu_open = use_signal(|| false);

    // Scroll listener lives as long as the navbar; dropping it detaches.
    let nav_offset = config.nav_offset;
    let _listener = use_hook({
        let config = config.clone();
        move || {
            let mut tracker = NavbarScroll::from_config(&config);
            let spy_offset = config.scroll_spy_offset;
            let debounce_ms = config.scroll_debounce_ms;
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();

            Rc::new(EventListener::new(&window(), "scroll", move |_| {
                let next = tracker.on_scroll(browser::scroll_y());
                if *style.peek() != next {
                    style.set(next);
                }

                // Replacing the timeout drops (cancels) the previous one
                let update = Timeout::new(debounce_ms, move || {
                    let sections = browser::section_bounds(&section_ids());
                    let current =
                        active_section(&sections, browser::scroll_y(), spy_offset).map(str::to_string);
                    if *active.peek() != current {
                        active.set(current);
                    }
                });
                pending.borrow_mut().replace(update);
            }))
        }
    });

    let mut go_to = move |evt: MouseEvent, href: &str| {
        evt.prevent_default();
        let Some(id) = anchor_target(href) else {
            return;
        };
        match browser::section_top(id) {
            Some(top) => browser::smooth_scroll_to(scroll_target(top, nav_offset)),
            None => tracing::warn!(section = id, "Anchor target not found"),
        }
        if menu_open() {
            menu_open.set(false);
        }
    };

    let current = active();
    let nav_style = style().inline_style();
    let collapse_class = if menu_open() {
        "navbar-collapse show"
    } else {
        "navbar-collapse"
    };

    rsx! {
        nav {
            class: "navbar custom-navbar fixed-top",
            style: "{nav_style}",
            div { class: "container",
                a {
                    class: "navbar-brand",
                    href: "#home",
                    onclick: move |e| go_to(e, "#home"),
                    "{OWNER_NAME}"
                }
                button {
                    class: "navbar-toggler",
                    r#type: "button",
                    "aria-label": "Toggle navigation",
                    "aria-expanded": if menu_open() { "true" } else { "false" },
                    onclick: move |_| menu_open.toggle(),
                    SvgIcon { icon: Icon::Menu, size: 24 }
                }
                div { class: "{collapse_class}",
                    ul { class: "navbar-nav",
                        for (id, label) in SECTIONS {
                            {
                                let href = format!("#{}", id);
                                let target = href.clone();
                                let class = nav_link_class(id, current.as_deref());
                                rsx! {
                                    li { key: "{id}", class: "nav-item",
                                        a {
                                            class: class,
                                            href: "{href}",
                                            onclick: move |e| go_to(e, &target),
                                            "{label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
