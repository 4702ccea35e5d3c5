//! Persisted payload of a successful submission.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::field::FieldId;
use super::form::ContactForm;

/// One validated, timestamped contact submission.
///
/// Serialized with camelCase keys, matching what the page has always
/// written to local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// ISO 8601 UTC timestamp (e.g., "2026-01-21T14:30:45.123Z")
    pub timestamp: String,
}

impl SubmissionRecord {
    /// Capture the form's values as entered (untrimmed).
    pub fn from_form(form: &ContactForm, at: DateTime<Utc>) -> Self {
        Self {
            first_name: form.value(FieldId::FirstName).to_string(),
            last_name: form.value(FieldId::LastName).to_string(),
            email: form.value(FieldId::Email).to_string(),
            subject: form.value(FieldId::Subject).to_string(),
            message: form.value(FieldId::Message).to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
