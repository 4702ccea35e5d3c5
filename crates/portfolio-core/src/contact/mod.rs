//! Contact form pipeline: field validation, whole-form validation,
//! submission handling and the dialog lifecycle.
//!
//! ## Flow
//!
//! ```text
//! blur / input ──► Field::validate ──► is-valid / is-invalid
//!
//! submit ──► ContactForm::validate (every required field)
//!              ├── ok   ──► success shown ──► history append ──► ResetTicket
//!              │                                   (after delay) ──► clear + close
//!              └── fail ──► error shown, form stays open
//!
//! dialog shown  ──► focus first field
//! dialog hidden ──► cancel pending reset, full form reset
//! ```

mod controller;
mod events;
mod field;
mod form;
mod lifecycle;
mod record;

pub use controller::ContactController;
pub use events::{
    ContactEvent, Indicator, Indicators, ResetTicket, SubmitOutcome, SubmitPhase, HIDDEN_CLASS,
};
pub use field::{value_is_valid, Field, FieldId, FieldKind, Validity, INVALID_CLASS, VALID_CLASS};
pub use form::{ContactForm, ATTEMPTED_CLASS};
pub use record::SubmissionRecord;
