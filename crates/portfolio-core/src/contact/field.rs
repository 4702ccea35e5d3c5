//! Contact form fields and the per-field validator.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Loose email shape: `local@domain.tld`, no whitespace, single `@`
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

/// ASCII letters and whitespace only
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s]+$").expect("valid name regex")
});

/// CSS class for a field that passed validation
pub const VALID_CLASS: &str = "is-valid";
/// CSS class for a field that failed validation
pub const INVALID_CLASS: &str = "is-invalid";

/// Identifies one of the contact form's fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 5] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Subject,
        FieldId::Message,
    ];

    /// DOM id of the field's element
    pub fn dom_id(&self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email Address",
            FieldId::Subject => "Subject",
            FieldId::Message => "Message",
        }
    }

    /// Validation rule set that applies to this field
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldId::FirstName | FieldId::LastName => FieldKind::PersonalName,
            FieldId::Email => FieldKind::Email,
            FieldId::Subject | FieldId::Message => FieldKind::Generic,
        }
    }

    /// Message shown under the field when it is invalid
    pub fn feedback(&self) -> &'static str {
        match self {
            FieldId::FirstName => "Please enter a valid first name (letters only).",
            FieldId::LastName => "Please enter a valid last name (letters only).",
            FieldId::Email => "Please enter a valid email address.",
            FieldId::Subject => "Please enter a subject.",
            FieldId::Message => "Please enter your message.",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

/// Which pattern rule applies on top of the emptiness check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Generic,
    Email,
    PersonalName,
}

/// Tri-state validity marker driving per-field styling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unset,
    Valid,
    Invalid,
}

impl Validity {
    /// CSS class reflecting this state (empty when unset)
    pub fn class(&self) -> &'static str {
        match self {
            Validity::Unset => "",
            Validity::Valid => VALID_CLASS,
            Validity::Invalid => INVALID_CLASS,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Validity::Invalid)
    }
}

/// One input or textarea of the contact form.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub id: FieldId,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
    pub validity: Validity,
}

impl Field {
    /// A required, empty field with the kind implied by `id`.
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            required: true,
            kind: id.kind(),
            validity: Validity::Unset,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Validate this field and record the outcome in `validity`.
    ///
    /// Emptiness fails regardless of `required`; whole-form validation
    /// only passes required fields here, so optional fields are never
    /// marked through that path.
    pub fn validate(&mut self) -> bool {
        let valid = value_is_valid(self.kind, &self.value);
        self.validity = if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        };
        valid
    }

    /// Clear value and validity.
    pub fn reset(&mut self) {
        self.value.clear();
        self.validity = Validity::Unset;
    }
}

/// Pure rule check for a raw field value.
///
/// The value is trimmed first. Empty is invalid; email and personal-name
/// kinds must additionally match their pattern.
pub fn value_is_valid(kind: FieldKind, raw: &str) -> bool {
    let value = raw.trim();
    if value.is_empty() {
        return false;
    }

    match kind {
        FieldKind::Email => EMAIL_PATTERN.is_match(value),
        FieldKind::PersonalName => NAME_PATTERN.is_match(value),
        FieldKind::Generic => true,
    }
}
