//! Submission handler for the contact form.
//!
//! The controller owns the form, the indicator state and the submission
//! history. Hosts feed it user actions (`input`, `blur`, `submit`) and
//! dialog notifications (see `lifecycle.rs`), then drain the resulting
//! [`ContactEvent`]s to update the page.
//!
//! A successful submit does not reset the form immediately. It returns a
//! [`ResetTicket`]; the host waits `ticket.delay` and hands the ticket
//! back through [`ContactController::complete_reset`]. Tickets that were
//! cancelled or superseded in the meantime are ignored.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::PortfolioConfig;
use crate::storage::{KeyValueStore, SubmissionHistory};

use super::events::{
    ContactEvent, Indicator, Indicators, ResetTicket, SubmitOutcome, SubmitPhase,
};
use super::field::{FieldId, Validity};
use super::form::ContactForm;
use super::record::SubmissionRecord;

/// Contact form state machine: Idle -> Validating -> {Success, Failure} -> Idle.
#[derive(Debug)]
pub struct ContactController<S> {
    pub(super) form: ContactForm,
    pub(super) indicators: Indicators,
    pub(super) phase: SubmitPhase,
    pub(super) events: Vec<ContactEvent>,
    history: SubmissionHistory<S>,
    reset_delay: Duration,
    generation: u64,
}

impl<S: KeyValueStore> ContactController<S> {
    pub fn new(history: SubmissionHistory<S>, reset_delay: Duration) -> Self {
        Self {
            form: ContactForm::new(),
            indicators: Indicators::default(),
            phase: SubmitPhase::Idle,
            events: Vec::new(),
            history,
            reset_delay,
            generation: 0,
        }
    }

    pub fn from_config(store: S, config: &PortfolioConfig) -> Self {
        Self::new(
            SubmissionHistory::from_config(store, config),
            Duration::from_millis(u64::from(config.success_reset_ms)),
        )
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn indicators(&self) -> Indicators {
        self.indicators
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn history(&self) -> &SubmissionHistory<S> {
        &self.history
    }

    pub fn is_reset_pending(&self) -> bool {
        matches!(self.phase, SubmitPhase::AwaitingReset(_))
    }

    /// Field value changed.
    pub fn input(&mut self, id: FieldId, value: impl Into<String>) -> Validity {
        self.form.input(id, value)
    }

    /// Field lost focus.
    pub fn blur(&mut self, id: FieldId) -> Option<bool> {
        self.form.blur(id)
    }

    /// Handle a submit action.
    ///
    /// Submits are not debounced: a resubmit while a success reset is
    /// pending runs the whole flow again and stores another record. An
    /// accepted resubmit issues a new ticket, which makes the earlier one
    /// stale; a rejected one leaves the pending ticket in place.
    pub fn submit(&mut self, at: DateTime<Utc>) -> SubmitOutcome {
        self.set_indicator(Indicator::Success, false);
        self.set_indicator(Indicator::Error, false);

        let valid = self.form.validate();
        let invalid = self.form.invalid_fields();
        self.emit(ContactEvent::FieldsMarked { invalid });

        if !valid {
            self.set_indicator(Indicator::Error, true);
            tracing::info!("Contact form rejected");
            return SubmitOutcome::Rejected;
        }

        self.set_indicator(Indicator::Success, true);
        self.store_submission(at);

        self.generation += 1;
        let ticket = ResetTicket {
            generation: self.generation,
            delay: self.reset_delay,
        };
        self.phase = SubmitPhase::AwaitingReset(ticket);
        tracing::info!(delay_ms = ticket.delay_ms(), "Contact form accepted");
        SubmitOutcome::Accepted(ticket)
    }

    fn store_submission(&mut self, at: DateTime<Utc>) {
        let record = SubmissionRecord::from_form(&self.form, at);
        match self.history.append(record) {
            Ok(outcome) => {
                tracing::info!(stored = outcome.len, "Form data stored successfully");
                self.emit(ContactEvent::SubmissionStored {
                    stored: outcome.len,
                });
            }
            Err(e) => {
                tracing::error!("Failed to store contact submission: {}", e);
                self.emit(ContactEvent::HistoryWriteFailed {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Run the deferred success reset.
    ///
    /// Clears values and the attempted flag, hides the success indicator
    /// and requests the dialog close. Returns `false` (and does nothing)
    /// if `ticket` is not the pending one.
    pub fn complete_reset(&mut self, ticket: ResetTicket) -> bool {
        match self.phase {
            SubmitPhase::AwaitingReset(pending) if pending == ticket => {}
            _ => {
                tracing::debug!(generation = ticket.generation, "Ignoring stale reset ticket");
                return false;
            }
        }

        self.phase = SubmitPhase::Idle;
        self.form.clear_values();
        self.emit(ContactEvent::FormCleared);
        self.set_indicator(Indicator::Success, false);
        self.emit(ContactEvent::CloseRequested);
        true
    }

    /// Cancel a pending deferred reset, e.g. when the host tears down.
    pub fn cancel_pending_reset(&mut self) -> bool {
        if !self.is_reset_pending() {
            return false;
        }
        self.phase = SubmitPhase::Idle;
        self.emit(ContactEvent::ResetCancelled);
        tracing::debug!("Pending success reset cancelled");
        true
    }

    /// Take all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<ContactEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn emit(&mut self, event: ContactEvent) {
        tracing::trace!(%event, "contact event");
        self.events.push(event);
    }

    pub(super) fn set_indicator(&mut self, indicator: Indicator, visible: bool) {
        if self.indicators.set(indicator, visible) {
            self.emit(ContactEvent::IndicatorChanged { indicator, visible });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn controller() -> ContactController<MemoryStore> {
        ContactController::from_config(MemoryStore::new(), &PortfolioConfig::default())
    }

    fn fill(c: &mut ContactController<MemoryStore>) {
        c.input(FieldId::FirstName, "John");
        c.input(FieldId::LastName, "Doe");
        c.input(FieldId::Email, "john@doe.com");
        c.input(FieldId::Subject, "Hi");
        c.input(FieldId::Message, "Test");
    }

    #[test]
    fn test_rejected_submit_shows_error() {
        let mut c = controller();
        assert_eq!(c.submit(Utc::now()), SubmitOutcome::Rejected);
        assert!(c.indicators().error);
        assert!(!c.indicators().success);
        assert_eq!(c.phase(), SubmitPhase::Idle);
        assert!(c.history().load().unwrap().is_empty());
    }

    #[test]
    fn test_accepted_submit_event_order() {
        let mut c = controller();
        // A previous failure leaves the error indicator up
        c.submit(Utc::now());
        c.drain_events();

        fill(&mut c);
        let SubmitOutcome::Accepted(ticket) = c.submit(Utc::now()) else {
            panic!("expected accepted submit");
        };
        assert_eq!(ticket.delay, Duration::from_millis(2000));

        assert_eq!(
            c.drain_events(),
            vec![
                ContactEvent::IndicatorChanged {
                    indicator: Indicator::Error,
                    visible: false
                },
                ContactEvent::FieldsMarked { invalid: vec![] },
                ContactEvent::IndicatorChanged {
                    indicator: Indicator::Success,
                    visible: true
                },
                ContactEvent::SubmissionStored { stored: 1 },
            ]
        );
    }

    #[test]
    fn test_complete_reset_clears_and_closes() {
        let mut c = controller();
        fill(&mut c);
        let SubmitOutcome::Accepted(ticket) = c.submit(Utc::now()) else {
            panic!("expected accepted submit");
        };
        c.drain_events();

        assert!(c.complete_reset(ticket));
        assert_eq!(
            c.drain_events(),
            vec![
                ContactEvent::FormCleared,
                ContactEvent::IndicatorChanged {
                    indicator: Indicator::Success,
                    visible: false
                },
                ContactEvent::CloseRequested,
            ]
        );
        assert!(!c.form().attempted());
        assert_eq!(c.form().value(FieldId::FirstName), "");

        // Second delivery of the same ticket is a no-op
        assert!(!c.complete_reset(ticket));
    }

    #[test]
    fn test_resubmit_while_pending_stores_again() {
        let mut c = controller();
        fill(&mut c);
        let SubmitOutcome::Accepted(first) = c.submit(Utc::now()) else {
            panic!("expected accepted submit");
        };
        let SubmitOutcome::Accepted(second) = c.submit(Utc::now()) else {
            panic!("expected accepted resubmit");
        };
        assert_ne!(first, second);
        assert_eq!(c.history().load().unwrap().len(), 2);

        // Only the newest ticket resets the form
        assert!(!c.complete_reset(first));
        assert_eq!(c.form().value(FieldId::FirstName), "John");
        assert!(c.complete_reset(second));
        assert_eq!(c.form().value(FieldId::FirstName), "");
    }

    #[test]
    fn test_rejected_resubmit_keeps_pending_reset() {
        let mut c = controller();
        fill(&mut c);
        let SubmitOutcome::Accepted(ticket) = c.submit(Utc::now()) else {
            panic!("expected accepted submit");
        };
        c.input(FieldId::Email, "not-an-email");
        assert_eq!(c.submit(Utc::now()), SubmitOutcome::Rejected);
        assert!(c.indicators().error);
        assert_eq!(c.history().load().unwrap().len(), 1);
        assert!(c.complete_reset(ticket));
    }

    #[test]
    fn test_cancelled_ticket_is_stale() {
        let mut c = controller();
        fill(&mut c);
        let SubmitOutcome::Accepted(ticket) = c.submit(Utc::now()) else {
            panic!("expected accepted submit");
        };
        assert!(c.cancel_pending_reset());
        assert!(!c.cancel_pending_reset());
        assert!(!c.complete_reset(ticket));
        assert_eq!(c.form().value(FieldId::FirstName), "John");
    }

    #[test]
    fn test_storage_failure_still_completes_submission() {
        let store = MemoryStore::with_quota(10);
        let mut c = ContactController::from_config(store, &PortfolioConfig::default());
        fill(&mut c);

        assert!(matches!(c.submit(Utc::now()), SubmitOutcome::Accepted(_)));
        assert!(c.indicators().success);
        assert!(c
            .drain_events()
            .iter()
            .any(|e| matches!(e, ContactEvent::HistoryWriteFailed { .. })));
    }
}
