//! Dialog lifecycle hooks for the contact controller.

use crate::storage::KeyValueStore;

use super::controller::ContactController;
use super::events::{ContactEvent, Indicator};
use super::field::FieldId;

impl<S: KeyValueStore> ContactController<S> {
    /// The dialog finished opening: focus goes to the first field.
    pub fn dialog_shown(&mut self) -> Option<FieldId> {
        let first = self.form.first_field()?;
        self.emit(ContactEvent::FocusRequested(first));
        Some(first)
    }

    /// The dialog finished closing, however it was closed.
    ///
    /// Cancels any pending success reset so it cannot fire into the next
    /// opening, then returns the form to its initial state.
    pub fn dialog_hidden(&mut self) {
        self.cancel_pending_reset();
        self.form.reset();
        self.set_indicator(Indicator::Success, false);
        self.set_indicator(Indicator::Error, false);
        self.emit(ContactEvent::FormReset);
        tracing::debug!("Contact dialog hidden, form reset");
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::config::PortfolioConfig;
    use crate::contact::{ContactForm, SubmitOutcome, Validity};
    use crate::storage::MemoryStore;

    use super::*;

    fn controller() -> ContactController<MemoryStore> {
        ContactController::from_config(MemoryStore::new(), &PortfolioConfig::default())
    }

    #[test]
    fn test_dialog_shown_focuses_first_name() {
        let mut c = controller();
        assert_eq!(c.dialog_shown(), Some(FieldId::FirstName));
        assert_eq!(
            c.drain_events(),
            vec![ContactEvent::FocusRequested(FieldId::FirstName)]
        );
    }

    #[test]
    fn test_dialog_hidden_after_failure_clears_marks() {
        let mut c = controller();
        c.input(FieldId::Email, "not-an-email");
        assert_eq!(c.submit(Utc::now()), SubmitOutcome::Rejected);
        assert_eq!(c.form().validity(FieldId::Email), Validity::Invalid);

        c.dialog_hidden();

        assert_eq!(c.form(), &ContactForm::new());
        assert!(!c.indicators().error);
        assert!(!c.indicators().success);
    }

    #[test]
    fn test_dialog_hidden_cancels_pending_reset() {
        let mut c = controller();
        c.input(FieldId::FirstName, "John");
        c.input(FieldId::LastName, "Doe");
        c.input(FieldId::Email, "john@doe.com");
        c.input(FieldId::Subject, "Hi");
        c.input(FieldId::Message, "Test");
        let SubmitOutcome::Accepted(ticket) = c.submit(Utc::now()) else {
            panic!("expected accepted submit");
        };

        c.dialog_hidden();
        assert!(c.drain_events().contains(&ContactEvent::ResetCancelled));

        // User reopens and starts typing; the old timer must not wipe it
        c.input(FieldId::FirstName, "Jane");
        assert!(!c.complete_reset(ticket));
        assert_eq!(c.form().value(FieldId::FirstName), "Jane");
    }

    #[test]
    fn test_dialog_hidden_on_pristine_form_only_emits_reset() {
        let mut c = controller();
        c.dialog_hidden();
        assert_eq!(c.drain_events(), vec![ContactEvent::FormReset]);
    }
}
