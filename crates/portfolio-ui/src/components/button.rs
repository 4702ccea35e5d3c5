//! Buttons
//!
//! Bootstrap-style `btn` classes. [`button_class`] is exposed so links
//! and buttons carrying extra data attributes can share the look.

use dioxus::prelude::*;

/// Visual style of a button
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled call-to-action
    #[default]
    Primary,
    /// Accent border on the page background
    Outline,
    /// Neutral border, for use over the hero gradient
    OutlineLight,
    Link,
}

impl ButtonVariant {
    fn modifier(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline-primary",
            ButtonVariant::OutlineLight => "btn-outline-light",
            ButtonVariant::Link => "btn-link",
        }
    }
}

/// What the button does inside a form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
}

impl ButtonKind {
    fn as_attr(&self) -> &'static str {
        match self {
            ButtonKind::Button => "button",
            ButtonKind::Submit => "submit",
        }
    }
}

/// Class list for a button of the given variant
pub fn button_class(variant: ButtonVariant, small: bool) -> String {
    let mut class = format!("btn {}", variant.modifier());
    if small {
        class.push_str(" btn-sm");
    }
    class
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub kind: ButtonKind,
    #[props(default = false)]
    pub small: bool,
    #[props(default = false)]
    pub disabled: bool,
    /// Not needed for `Submit` buttons; the form's submit handler runs
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    pub children: Element,
}

/// Styled button
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::OutlineLight,
///         onclick: move |_| dialog.open(),
///         "Get In Touch"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.small);
    let onclick = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: props.kind.as_attr(),
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Dialog close control; the glyph comes from the stylesheet
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "btn-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_variant_and_size() {
        assert_eq!(button_class(ButtonVariant::Primary, false), "btn btn-primary");
        assert_eq!(
            button_class(ButtonVariant::Outline, true),
            "btn btn-outline-primary btn-sm"
        );
        assert_eq!(
            button_class(ButtonVariant::OutlineLight, false),
            "btn btn-outline-light"
        );
        assert_eq!(button_class(ButtonVariant::Link, true), "btn btn-link btn-sm");
    }

    #[test]
    fn defaults_to_a_plain_primary_button() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonKind::default().as_attr(), "button");
        assert_eq!(ButtonKind::Submit.as_attr(), "submit");
    }
}
