//! End-to-end contact form scenarios
//!
//! Drives the controller the way the page does: field input, submit,
//! deferred reset and dialog notifications, checking indicators, stored
//! history and emitted events along the way.

use chrono::{TimeZone, Utc};
use portfolio_core::contact::{
    ContactController, ContactEvent, ContactForm, FieldId, Indicator, SubmitOutcome, SubmitPhase,
    Validity,
};
use portfolio_core::{KeyValueStore, MemoryStore, PortfolioConfig};

// ============================================================================
// Helpers
// ============================================================================

fn controller(store: &MemoryStore) -> ContactController<MemoryStore> {
    ContactController::from_config(store.clone(), &PortfolioConfig::default())
}

fn fill(
    c: &mut ContactController<MemoryStore>,
    first: &str,
    last: &str,
    email: &str,
    subject: &str,
    message: &str,
) {
    c.input(FieldId::FirstName, first);
    c.input(FieldId::LastName, last);
    c.input(FieldId::Email, email);
    c.input(FieldId::Subject, subject);
    c.input(FieldId::Message, message);
}

fn shown(indicator: Indicator) -> ContactEvent {
    ContactEvent::IndicatorChanged {
        indicator,
        visible: true,
    }
}

fn hidden(indicator: Indicator) -> ContactEvent {
    ContactEvent::IndicatorChanged {
        indicator,
        visible: false,
    }
}

// ============================================================================
// Scenarios
// ============================================================================

/// A valid submission shows success, stores one record, and after the
/// delay clears the form and closes the dialog.
#[test]
fn test_successful_submission_end_to_end() {
    let store = MemoryStore::new();
    let mut c = controller(&store);
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 15, 0).unwrap();

    assert_eq!(c.dialog_shown(), Some(FieldId::FirstName));
    fill(&mut c, "John", "Doe", "john@doe.com", "Hi", "Test");
    c.drain_events();

    let SubmitOutcome::Accepted(ticket) = c.submit(at) else {
        panic!("valid form must be accepted");
    };
    assert!(c.indicators().success);
    assert!(matches!(c.phase(), SubmitPhase::AwaitingReset(_)));

    let records = c.history().load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].first_name, "John");
    assert_eq!(records[0].last_name, "Doe");
    assert_eq!(records[0].email, "john@doe.com");
    assert_eq!(records[0].subject, "Hi");
    assert_eq!(records[0].message, "Test");
    assert_eq!(records[0].timestamp, "2026-03-01T09:15:00.000Z");

    // The raw stored value is the camelCase JSON array
    let raw = store.get("contactSubmissions").unwrap().unwrap();
    assert!(raw.starts_with(r#"[{"firstName":"John""#));

    // Timer fires
    assert!(c.complete_reset(ticket));
    let events = c.drain_events();
    assert_eq!(
        events,
        vec![
            ContactEvent::FieldsMarked { invalid: vec![] },
            shown(Indicator::Success),
            ContactEvent::SubmissionStored { stored: 1 },
            ContactEvent::FormCleared,
            hidden(Indicator::Success),
            ContactEvent::CloseRequested,
        ]
    );
    assert_eq!(c.form().value(FieldId::FirstName), "");
    assert!(!c.form().attempted());
    assert!(!c.indicators().success);

    // Host closes the dialog in response
    c.dialog_hidden();
    assert_eq!(c.form(), &ContactForm::new());
    assert_eq!(c.history().load().unwrap().len(), 1);
}

/// An invalid email shows the error indicator, marks the email field,
/// writes nothing and keeps the dialog open.
#[test]
fn test_invalid_email_rejected() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    fill(&mut c, "John", "Doe", "not-an-email", "Hi", "Test");
    assert_eq!(c.submit(Utc::now()), SubmitOutcome::Rejected);

    assert!(c.indicators().error);
    assert!(!c.indicators().success);
    assert_eq!(c.form().validity(FieldId::Email), Validity::Invalid);
    assert_eq!(c.form().validity(FieldId::FirstName), Validity::Valid);
    assert_eq!(c.form().invalid_fields(), vec![FieldId::Email]);
    assert!(store.get("contactSubmissions").unwrap().is_none());

    let events = c.drain_events();
    assert!(!events.contains(&ContactEvent::CloseRequested));
    assert_eq!(events.last(), Some(&shown(Indicator::Error)));
    assert_eq!(c.phase(), SubmitPhase::Idle);
}

/// Submitting twice before the reset fires stores both payloads; the
/// later reset is the one that clears the form.
#[test]
fn test_double_submit_during_success_delay() {
    let store = MemoryStore::new();
    let mut c = controller(&store);
    fill(&mut c, "John", "Doe", "john@doe.com", "Hi", "Test");

    let SubmitOutcome::Accepted(first) = c.submit(Utc::now()) else {
        panic!("first submit should be accepted");
    };
    c.drain_events();
    let SubmitOutcome::Accepted(second) = c.submit(Utc::now()) else {
        panic!("second submit should be accepted");
    };
    assert_eq!(
        c.drain_events(),
        vec![
            hidden(Indicator::Success),
            ContactEvent::FieldsMarked { invalid: vec![] },
            shown(Indicator::Success),
            ContactEvent::SubmissionStored { stored: 2 },
        ]
    );

    let stored = controller(&store).history().load().unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|r| r.first_name == "John"));

    assert!(!c.complete_reset(first));
    assert!(c.complete_reset(second));
    assert_eq!(c.phase(), SubmitPhase::Idle);
    assert_eq!(c.form().value(FieldId::Email), "");
}

/// Correcting the form after a failure and resubmitting succeeds.
#[test]
fn test_correct_and_resubmit() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    fill(&mut c, "John", "Doe", "not-an-email", "Hi", "Test");
    c.submit(Utc::now());

    // Fixing the email clears its invalid mark while typing
    assert_eq!(c.input(FieldId::Email, "john@doe.com"), Validity::Valid);

    assert!(matches!(c.submit(Utc::now()), SubmitOutcome::Accepted(_)));
    assert!(!c.indicators().error);
    assert!(c.indicators().success);
}

/// Closing right after a failure leaves no validation residue.
#[test]
fn test_dialog_hidden_after_failure_leaves_clean_form() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    c.submit(Utc::now());
    assert_eq!(c.form().invalid_fields().len(), 5);
    assert!(c.form().attempted());

    c.dialog_hidden();
    assert!(c.form().invalid_fields().is_empty());
    assert!(!c.form().attempted());
    assert_eq!(c.form().class(), "");
    assert!(!c.indicators().error);

    // Reopen: still clean, focus goes to first name
    assert_eq!(c.dialog_shown(), Some(FieldId::FirstName));
    assert!(c
        .form()
        .fields()
        .iter()
        .all(|f| f.validity == Validity::Unset));
}

/// Eleven successful submissions keep only the newest ten.
#[test]
fn test_history_bounded_across_submissions() {
    let store = MemoryStore::new();
    let mut c = controller(&store);

    for n in 0..11 {
        let subject = format!("Subject {}", n);
        fill(&mut c, "John", "Doe", "john@doe.com", &subject, "Test");
        let SubmitOutcome::Accepted(ticket) = c.submit(Utc::now()) else {
            panic!("submission {} rejected", n);
        };
        assert!(c.complete_reset(ticket));
        c.dialog_hidden();
    }

    let records = c.history().load().unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].subject, "Subject 1");
    assert_eq!(records[9].subject, "Subject 10");
}

/// History survives a new controller on the same store (page reload).
#[test]
fn test_history_persists_across_reload() {
    let store = MemoryStore::new();
    {
        let mut c = controller(&store);
        fill(&mut c, "Ann", "Lee", "ann@lee.io", "Hello", "Msg");
        c.submit(Utc::now());
    }

    let c = controller(&store);
    let records = c.history().load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].first_name, "Ann");
}
