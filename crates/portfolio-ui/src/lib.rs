//! Portfolio UI Components
//!
//! Dioxus components shared by the portfolio page: validated form
//! controls, the contact status alerts, a modal dialog shell, the theme
//! toggle and project cards.
//!
//! ## Markup Contract
//!
//! Components render the class names the page stylesheet expects:
//! - **`is-valid` / `is-invalid`**: field validation marks
//! - **`was-validated`**: set on the form after a submit attempt
//! - **`d-none`**: hidden status alert
//! - **`fade-in` / `visible`**: scroll reveal state
//!
//! State lives in `portfolio-core`; components only render it and
//! forward user actions through event handlers.

pub mod components;

pub use components::*;
