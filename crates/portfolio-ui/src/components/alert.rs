//! Status Alert Component
//!
//! The contact form's success and error banners. Both are always in the
//! DOM; hidden ones carry `d-none`.

use dioxus::prelude::*;
use portfolio_core::contact::{Indicator, HIDDEN_CLASS};

/// Bootstrap-style class list for an indicator's alert box
pub fn alert_class(indicator: Indicator, visible: bool) -> String {
    let tone = match indicator {
        Indicator::Success => "alert alert-success",
        Indicator::Error => "alert alert-danger",
    };
    if visible {
        tone.to_string()
    } else {
        format!("{} {}", tone, HIDDEN_CLASS)
    }
}

/// Properties for the StatusAlert component
#[derive(Clone, PartialEq, Props)]
pub struct StatusAlertProps {
    /// Which indicator this alert renders
    pub indicator: Indicator,
    /// Whether the alert is shown
    pub visible: bool,
    /// Alert message
    pub children: Element,
}

/// Success or error banner bound to an [`Indicator`]
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     StatusAlert {
///         indicator: Indicator::Success,
///         visible: indicators.success,
///         "Thank you! Your message has been sent."
///     }
/// }
/// ```
#[component]
pub fn StatusAlert(props: StatusAlertProps) -> Element {
    let class = alert_class(props.indicator, props.visible);

    rsx! {
        div {
            id: props.indicator.dom_id(),
            class: "{class}",
            role: "alert",
            "aria-hidden": if props.visible { "false" } else { "true" },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_alert_has_d_none() {
        assert_eq!(
            alert_class(Indicator::Success, false),
            "alert alert-success d-none"
        );
        assert_eq!(alert_class(Indicator::Error, true), "alert alert-danger");
    }
}
