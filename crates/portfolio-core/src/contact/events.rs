//! Indicator, phase and event types for the contact pipeline.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  SubmitPhase                                                    │
//! │  ├── Idle: form open and editable                               │
//! │  └── AwaitingReset: success shown, deferred reset pending       │
//! │                                                                 │
//! │  ContactEvent: ordered, discrete state changes                  │
//! │  ├── IndicatorChanged: success/error banner shown or hidden     │
//! │  ├── FieldsMarked: per-field validity after an attempt          │
//! │  ├── SubmissionStored / HistoryWriteFailed                      │
//! │  ├── FormCleared / FormReset                                    │
//! │  ├── FocusRequested / CloseRequested                            │
//! │  └── ResetCancelled                                             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::time::Duration;

use super::field::FieldId;

/// CSS class hiding an indicator
pub const HIDDEN_CLASS: &str = "d-none";

/// The two transient banners shown after a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    Success,
    Error,
}

impl Indicator {
    /// DOM id of the indicator region
    pub fn dom_id(&self) -> &'static str {
        match self {
            Indicator::Success => "successAlert",
            Indicator::Error => "errorAlert",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Success => write!(f, "success"),
            Indicator::Error => write!(f, "error"),
        }
    }
}

/// Visibility of both indicators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicators {
    pub success: bool,
    pub error: bool,
}

impl Indicators {
    pub fn is_visible(&self, indicator: Indicator) -> bool {
        match indicator {
            Indicator::Success => self.success,
            Indicator::Error => self.error,
        }
    }

    /// Class string for an indicator region (`d-none` when hidden)
    pub fn class(&self, indicator: Indicator) -> &'static str {
        if self.is_visible(indicator) {
            ""
        } else {
            HIDDEN_CLASS
        }
    }

    pub(crate) fn set(&mut self, indicator: Indicator, visible: bool) -> bool {
        let slot = match indicator {
            Indicator::Success => &mut self.success,
            Indicator::Error => &mut self.error,
        };
        let changed = *slot != visible;
        *slot = visible;
        changed
    }
}

/// Handle for the deferred success reset.
///
/// Only the ticket issued by the most recent successful submit is
/// honored; teardown or dialog close invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket {
    pub(crate) generation: u64,
    pub delay: Duration,
}

impl ResetTicket {
    /// Delay in whole milliseconds, for browser timers
    pub fn delay_ms(&self) -> u32 {
        crate::timing::timer_ms(self.delay)
    }
}

/// Submission handler phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    /// Form open and editable
    #[default]
    Idle,
    /// Success shown; the reset identified by the ticket is pending
    AwaitingReset(ResetTicket),
}

/// Result of a submit action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; schedule the reset described by the ticket
    Accepted(ResetTicket),
    /// Validation failed; the form stays open
    Rejected,
}

/// Observable state changes, in the order they happen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    /// An indicator's visibility changed
    IndicatorChanged {
        indicator: Indicator,
        visible: bool,
    },
    /// Whole-form validation ran; lists the fields now marked invalid
    FieldsMarked {
        invalid: Vec<FieldId>,
    },
    /// A record was appended to the submission history
    SubmissionStored {
        /// History length after the write
        stored: usize,
    },
    /// The history write failed; the submission still completes
    HistoryWriteFailed {
        message: String,
    },
    /// Values and attempted flag cleared after a success
    FormCleared,
    /// Full reset on dialog close
    FormReset,
    /// Move input focus to a field
    FocusRequested(FieldId),
    /// Ask the host to close the dialog
    CloseRequested,
    /// A pending deferred reset was cancelled
    ResetCancelled,
}

impl fmt::Display for ContactEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactEvent::IndicatorChanged { indicator, visible } => {
                let state = if *visible { "shown" } else { "hidden" };
                write!(f, "{} indicator {}", indicator, state)
            }
            ContactEvent::FieldsMarked { invalid } => {
                write!(f, "validated ({} invalid)", invalid.len())
            }
            ContactEvent::SubmissionStored { stored } => {
                write!(f, "submission stored ({} in history)", stored)
            }
            ContactEvent::HistoryWriteFailed { message } => {
                write!(f, "history write failed: {}", message)
            }
            ContactEvent::FormCleared => write!(f, "form cleared"),
            ContactEvent::FormReset => write!(f, "form reset"),
            ContactEvent::FocusRequested(id) => write!(f, "focus {}", id),
            ContactEvent::CloseRequested => write!(f, "close requested"),
            ContactEvent::ResetCancelled => write!(f, "reset cancelled"),
        }
    }
}
