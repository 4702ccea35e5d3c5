//! Modal Dialog Component
//!
//! A dialog shell with backdrop, header and close button. The dialog
//! body is only mounted while `open` is true; `on_shown` fires once the
//! dialog element is in the DOM. Every close path (X button, backdrop
//! click, Escape) goes through `on_close`, so the owner can run its
//! hidden-state cleanup in one place.

use dioxus::prelude::*;

use super::button::CloseButton;

/// Class list for the backdrop/dialog wrapper
pub fn modal_class(open: bool) -> &'static str {
    if open {
        "modal fade show"
    } else {
        "modal fade"
    }
}

/// Properties for the Modal component
#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    /// DOM id of the dialog
    pub id: String,
    /// Title shown in the header
    pub title: String,
    /// Whether the dialog is open
    pub open: bool,
    /// Close requested by the user
    pub on_close: EventHandler<()>,
    /// Dialog finished opening
    #[props(default)]
    pub on_shown: Option<EventHandler<()>>,
    /// Use the wide layout
    #[props(default = false)]
    pub large: bool,
    pub children: Element,
}

/// Modal dialog
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         id: "contactModal".to_string(),
///         title: "Get In Touch".to_string(),
///         open: open(),
///         on_close: move |_| close_contact(),
///         on_shown: move |_| contact.write().dialog_shown(),
///         ContactForm {}
///     }
/// }
/// ```
#[component]
pub fn Modal(props: ModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;
    let on_shown = props.on_shown;
    let labelled_by = format!("{}Label", props.id);
    let dialog_class = if props.large {
        "modal-dialog modal-dialog-centered modal-lg"
    } else {
        "modal-dialog modal-dialog-centered"
    };

    rsx! {
        div {
            class: "modal-backdrop fade show",
            onclick: move |_| on_close.call(()),
        }
        div {
            id: "{props.id}",
            class: modal_class(true),
            role: "dialog",
            tabindex: "-1",
            "aria-modal": "true",
            "aria-labelledby": "{labelled_by}",
            onmounted: move |_| {
                if let Some(handler) = &on_shown {
                    handler.call(());
                }
            },
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),
            div {
                class: "{dialog_class}",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-content",
                    div { class: "modal-header",
                        h5 { id: "{labelled_by}", class: "modal-title", "{props.title}" }
                        CloseButton { onclick: move |_| on_close.call(()) }
                    }
                    div { class: "modal-body", {props.children} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_modal_is_shown() {
        assert_eq!(modal_class(true), "modal fade show");
        assert_eq!(modal_class(false), "modal fade");
    }
}
