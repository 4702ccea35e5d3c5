//! Validated Form Controls
//!
//! Text inputs and textareas for the contact form. Each control renders
//! its validity mark (`is-valid` / `is-invalid`) and the feedback text
//! shown when invalid, and reports value changes and blur.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::contact::{FieldId, Validity};

/// Class list for a form control in the given state
pub fn control_class(validity: Validity) -> String {
    match validity.class() {
        "" => "form-control".to_string(),
        mark => format!("form-control {}", mark),
    }
}

/// HTML input type for a field
pub fn input_type(id: FieldId) -> &'static str {
    match id {
        FieldId::Email => "email",
        _ => "text",
    }
}

/// Properties for the ValidatedInput component
#[derive(Clone, PartialEq, Props)]
pub struct ValidatedInputProps {
    /// Which contact field this control edits
    pub field: FieldId,
    /// Current value
    pub value: String,
    /// Current validation mark
    pub validity: Validity,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    /// Handler called when the control loses focus
    pub onblur: EventHandler<()>,
    /// Receives the mounted element, e.g. to move focus to it later
    #[props(default)]
    pub on_mounted: Option<EventHandler<Rc<MountedData>>>,
}

/// Single-line input bound to a contact field
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ValidatedInput {
///         field: FieldId::Email,
///         value: form.value(FieldId::Email).to_string(),
///         validity: form.validity(FieldId::Email),
///         oninput: move |v| contact.write().input(FieldId::Email, v),
///         onblur: move |_| { contact.write().blur(FieldId::Email); },
///     }
/// }
/// ```
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let id = props.field.dom_id();
    let class = control_class(props.validity);
    let on_mounted = props.on_mounted;

    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: "{id}", "{props.field.label()}" }
            input {
                id: "{id}",
                class: "{class}",
                r#type: input_type(props.field),
                value: "{props.value}",
                required: true,
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| props.onblur.call(()),
                onmounted: move |e| {
                    if let Some(handler) = &on_mounted {
                        handler.call(e.data());
                    }
                },
            }
            div { class: "invalid-feedback", "{props.field.feedback()}" }
        }
    }
}

/// Properties for the ValidatedTextArea component
#[derive(Clone, PartialEq, Props)]
pub struct ValidatedTextAreaProps {
    pub field: FieldId,
    pub value: String,
    pub validity: Validity,
    pub oninput: EventHandler<String>,
    pub onblur: EventHandler<()>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
}

/// Multi-line input bound to a contact field
#[component]
pub fn ValidatedTextArea(props: ValidatedTextAreaProps) -> Element {
    let id = props.field.dom_id();
    let class = control_class(props.validity);

    rsx! {
        div { class: "mb-3",
            label { class: "form-label", r#for: "{id}", "{props.field.label()}" }
            textarea {
                id: "{id}",
                class: "{class}",
                rows: "{props.rows}",
                required: true,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| props.onblur.call(()),
            }
            div { class: "invalid-feedback", "{props.field.feedback()}" }
        }
    }
}
