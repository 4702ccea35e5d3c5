//! Property-based tests for the contact pipeline
//!
//! Uses proptest to check the validator rules, whole-form validation and
//! the bounded submission history.

use chrono::Utc;
use proptest::prelude::*;
use portfolio_core::contact::{
    value_is_valid, ContactController, ContactForm, FieldId, FieldKind, SubmitOutcome, Validity,
};
use portfolio_core::{MemoryStore, PortfolioConfig, SubmissionHistory, SubmissionRecord};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Well-formed addresses: local@domain.tld, no whitespace or extra `@`
fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9._%+-]{1,16}@[a-z0-9-]{1,12}\\.[a-z]{2,6}")
        .expect("valid regex")
}

/// Names made of ASCII letters and inner spaces
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z]{1,12}( [a-zA-Z]{1,12}){0,2}").expect("valid regex")
}

/// Whitespace-only strings, including the empty string
fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n\r]{0,8}").expect("valid regex")
}

/// Either a valid or a blank value for one field
fn maybe_blank(valid: impl Strategy<Value = String>) -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        valid.prop_map(|v| (v, true)),
        blank_strategy().prop_map(|v| (v, false)),
    ]
}

fn record(n: usize) -> SubmissionRecord {
    SubmissionRecord {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john@doe.com".into(),
        subject: format!("Subject {}", n),
        message: "Test".into(),
        timestamp: "2026-01-01T00:00:00.000Z".into(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Blank values fail for every field kind
    #[test]
    fn blank_values_are_invalid(blank in blank_strategy()) {
        for kind in [FieldKind::Generic, FieldKind::Email, FieldKind::PersonalName] {
            prop_assert!(!value_is_valid(kind, &blank));
        }
    }

    /// Well-formed emails pass, also with surrounding whitespace
    #[test]
    fn well_formed_emails_pass(email in email_strategy(), pad in blank_strategy()) {
        prop_assert!(value_is_valid(FieldKind::Email, &email));
        let padded = format!("{}{}{}", pad, email, pad);
        prop_assert!(value_is_valid(FieldKind::Email, &padded));
    }

    /// Anything with inner whitespace or a second `@` is not an email
    #[test]
    fn malformed_emails_fail(email in email_strategy(), junk in "[ @]") {
        let (local, domain) = email.split_once('@').expect("generated with @");
        let broken = format!("{}{}{}@{}", local, junk, local, domain);
        prop_assert!(!value_is_valid(FieldKind::Email, &broken));
    }

    /// An address without `@` never passes
    #[test]
    fn emails_without_at_fail(s in "[a-z0-9.]{1,30}") {
        prop_assert!(!value_is_valid(FieldKind::Email, &s));
    }

    /// Letter-and-space names pass
    #[test]
    fn letter_names_pass(name in name_strategy()) {
        prop_assert!(value_is_valid(FieldKind::PersonalName, &name));
    }

    /// A digit or punctuation anywhere in a name fails it
    #[test]
    fn names_with_other_chars_fail(
        name in name_strategy(),
        bad in "[0-9'.,!-]",
        at in 0usize..32,
    ) {
        let mut chars: Vec<char> = name.chars().collect();
        let pos = at % (chars.len() + 1);
        chars.insert(pos, bad.chars().next().expect("one char"));
        let broken: String = chars.into_iter().collect();
        prop_assert!(!value_is_valid(FieldKind::PersonalName, &broken));
    }

    /// Whole-form validation marks every field, and passes exactly when
    /// every field is individually valid
    #[test]
    fn form_validation_visits_every_field(
        first in maybe_blank(name_strategy()),
        last in maybe_blank(name_strategy()),
        email in maybe_blank(email_strategy()),
        subject in maybe_blank("[a-zA-Z0-9][a-zA-Z0-9 ]{0,39}"),
        message in maybe_blank("[a-zA-Z0-9][a-zA-Z0-9 .,!?]{0,79}"),
    ) {
        let inputs = [
            (FieldId::FirstName, first),
            (FieldId::LastName, last),
            (FieldId::Email, email),
            (FieldId::Subject, subject),
            (FieldId::Message, message),
        ];

        let mut form = ContactForm::new();
        for (id, (value, _)) in &inputs {
            form.input(*id, value.clone());
        }

        let all_valid = inputs.iter().all(|(_, (_, ok))| *ok);
        prop_assert_eq!(form.validate(), all_valid);
        prop_assert!(form.attempted());

        for (id, (_, ok)) in &inputs {
            let expected = if *ok { Validity::Valid } else { Validity::Invalid };
            prop_assert_eq!(form.validity(*id), expected, "field {}", id);
        }
    }

    /// History never exceeds capacity and keeps the newest records in order
    #[test]
    fn history_keeps_newest_in_order(count in 1usize..30, capacity in 1usize..12) {
        let history = SubmissionHistory::new(MemoryStore::new(), "contactSubmissions", capacity);

        for n in 0..count {
            let outcome = history.append(record(n)).unwrap();
            prop_assert!(outcome.len <= capacity);
        }

        let stored = history.load().unwrap();
        prop_assert_eq!(stored.len(), count.min(capacity));

        let first_kept = count.saturating_sub(capacity);
        for (i, rec) in stored.iter().enumerate() {
            prop_assert_eq!(&rec.subject, &format!("Subject {}", first_kept + i));
        }
    }

    /// Only accepted submissions reach the history
    #[test]
    fn rejected_submissions_store_nothing(email in "[a-z]{1,10}", name in name_strategy()) {
        let mut c = ContactController::from_config(MemoryStore::new(), &PortfolioConfig::default());
        c.input(FieldId::FirstName, name.clone());
        c.input(FieldId::LastName, name);
        c.input(FieldId::Email, email);
        c.input(FieldId::Subject, "Hi");
        c.input(FieldId::Message, "Test");

        prop_assert_eq!(c.submit(Utc::now()), SubmitOutcome::Rejected);
        prop_assert!(c.history().load().unwrap().is_empty());
    }
}
