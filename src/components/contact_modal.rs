//! Contact Dialog
//!
//! Hosts the contact form inside a modal and drives the core
//! [`ContactController`]:
//!
//! ```text
//! input/blur ──► controller ──► re-render (validity marks)
//! submit ──────► controller.submit ──► Accepted(ticket) ──► reset task
//!                                                           │ ticket.delay
//!                                                           ▼
//!                                          controller.complete_reset
//! drain_events ──► FocusRequested → focus first input
//!              └─► CloseRequested → close dialog
//! ```
//!
//! The reset task is spawned in this component's scope and cancelled on
//! close, so a stale reset never reaches a reopened form.

use std::rc::Rc;

use chrono::Utc;
use dioxus::prelude::*;
use gloo::timers::future::TimeoutFuture;
use portfolio_core::contact::{
    ContactController, ContactEvent, FieldId, Indicator, SubmitOutcome,
};
use portfolio_ui::{
    Button, ButtonKind, ButtonVariant, Modal, StatusAlert, ValidatedInput, ValidatedTextArea,
};

use crate::browser::BrowserStore;
use crate::context::{use_config, use_contact_dialog, ContactDialog};

/// Handles shared by the dialog's event handlers.
#[derive(Clone, Copy)]
struct ContactHandles {
    contact: Signal<ContactController<BrowserStore>>,
    dialog: ContactDialog,
    reset_task: Signal<Option<Task>>,
    first_input: Signal<Option<Rc<MountedData>>>,
    focus_pending: Signal<bool>,
}

impl PartialEq for ContactHandles {
    fn eq(&self, other: &Self) -> bool {
        self.contact == other.contact
    }
}

impl ContactHandles {
    fn submit(mut self) {
        let outcome = self.contact.write().submit(Utc::now());

        if let SubmitOutcome::Accepted(ticket) = outcome {
            // A resubmit supersedes the earlier reset
            if let Some(previous) = self.reset_task.take() {
                previous.cancel();
            }
            let task = spawn(async move {
                TimeoutFuture::new(ticket.delay_ms()).await;
                self.reset_task.set(None);
                self.contact.write().complete_reset(ticket);
                self.apply_events();
            });
            self.reset_task.set(Some(task));
        }

        self.apply_events();
    }

    fn shown(mut self) {
        self.contact.write().dialog_shown();
        self.apply_events();
    }

    /// Close the dialog and run the hidden-state reset.
    fn close(mut self) {
        if let Some(task) = self.reset_task.take() {
            task.cancel();
        }
        self.dialog.set_closed();
        self.first_input.set(None);
        self.contact.write().dialog_hidden();
        self.apply_events();
    }

    fn focus(mut self) {
        let Some(element) = self.first_input.peek().clone() else {
            self.focus_pending.set(true);
            return;
        };
        self.focus_pending.set(false);
        spawn(async move {
            if let Err(e) = element.set_focus(true).await {
                tracing::warn!("Failed to focus first field: {:?}", e);
            }
        });
    }

    fn mounted_first(mut self, element: Rc<MountedData>) {
        self.first_input.set(Some(element));
        if *self.focus_pending.peek() {
            self.focus();
        }
    }

    /// Act on controller events that need the page.
    fn apply_events(mut self) {
        let events = self.contact.write().drain_events();
        for event in events {
            match event {
                ContactEvent::FocusRequested(_) => self.focus(),
                ContactEvent::CloseRequested => self.close(),
                _ => {}
            }
        }
    }
}

#[component]
pub fn ContactModal() -> Element {
    let config = use_config();
    let dialog = use_contact_dialog();
    let contact = use_signal(|| ContactController::from_config(BrowserStore, &config));
    let handles = ContactHandles {
        contact,
        dialog,
        reset_task: use_signal(|| None),
        first_input: use_signal(|| None),
        focus_pending: use_signal(|| false),
    };

    let form_class = contact.read().form().class();
    let indicators = contact.read().indicators();

    rsx! {
        Modal {
            id: "contactModal".to_string(),
            title: "Send Me a Message".to_string(),
            open: dialog.is_open(),
            on_close: move |_| handles.close(),
            on_shown: move |_: ()| handles.shown(),
            StatusAlert {
                indicator: Indicator::Success,
                visible: indicators.success,
                "Thank you! Your message has been sent successfully."
            }
            StatusAlert {
                indicator: Indicator::Error,
                visible: indicators.error,
                "Please fix the highlighted fields and try again."
            }
            form {
                id: "contactForm",
                class: "{form_class}",
                novalidate: true,
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    handles.submit();
                },
                div { class: "row",
                    div { class: "col-md-6",
                        ContactInput { field: FieldId::FirstName, handles }
                    }
                    div { class: "col-md-6",
                        ContactInput { field: FieldId::LastName, handles }
                    }
                }
                ContactInput { field: FieldId::Email, handles }
                ContactInput { field: FieldId::Subject, handles }
                ContactTextArea { handles }
                div { class: "modal-footer",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| handles.close(),
                        "Close"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        kind: ButtonKind::Submit,
                        "Send Message"
                    }
                }
            }
        }
    }
}

#[component]
fn ContactInput(field: FieldId, handles: ContactHandles) -> Element {
    let mut contact = handles.contact;
    let value = contact.read().form().value(field).to_string();
    let validity = contact.read().form().validity(field);
    let is_first = field == FieldId::FirstName;

    rsx! {
        ValidatedInput {
            field,
            value,
            validity,
            oninput: move |v: String| {
                contact.write().input(field, v);
            },
            onblur: move |_| {
                contact.write().blur(field);
            },
            on_mounted: move |element: Rc<MountedData>| {
                if is_first {
                    handles.mounted_first(element);
                }
            },
        }
    }
}

#[component]
fn ContactTextArea(handles: ContactHandles) -> Element {
    let mut contact = handles.contact;
    let value = contact.read().form().value(FieldId::Message).to_string();
    let validity = contact.read().form().validity(FieldId::Message);

    rsx! {
        ValidatedTextArea {
            field: FieldId::Message,
            value,
            validity,
            oninput: move |v: String| {
                contact.write().input(FieldId::Message, v);
            },
            onblur: move |_| {
                contact.write().blur(FieldId::Message);
            },
        }
    }
}
