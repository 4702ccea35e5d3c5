//! The contact form: ordered fields plus the validation-attempted flag.

use super::field::{Field, FieldId, Validity};

/// CSS class set on the form after the first validation attempt
pub const ATTEMPTED_CLASS: &str = "was-validated";

/// Contact form state.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    fields: Vec<Field>,
    attempted: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// The standard form: first name, last name, email, subject, message,
    /// all required.
    pub fn new() -> Self {
        Self::with_fields(FieldId::ALL.into_iter().map(Field::new).collect())
    }

    pub fn with_fields(fields: Vec<Field>) -> Self {
        Self {
            fields,
            attempted: false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == id)
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Current value of `id`, empty if the form has no such field
    pub fn value(&self, id: FieldId) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or_default()
    }

    pub fn validity(&self, id: FieldId) -> Validity {
        self.field(id).map(|f| f.validity).unwrap_or_default()
    }

    /// First field in form order, the focus target when the dialog opens
    pub fn first_field(&self) -> Option<FieldId> {
        self.fields.first().map(|f| f.id)
    }

    pub fn attempted(&self) -> bool {
        self.attempted
    }

    /// Form-level class string (`was-validated` once attempted)
    pub fn class(&self) -> &'static str {
        if self.attempted {
            ATTEMPTED_CLASS
        } else {
            ""
        }
    }

    /// Update a field's value.
    ///
    /// A field already marked invalid is re-validated on every input so
    /// the mark clears as soon as the value is fixed. Returns the field's
    /// validity after the update.
    pub fn input(&mut self, id: FieldId, value: impl Into<String>) -> Validity {
        let Some(field) = self.field_mut(id) else {
            return Validity::Unset;
        };
        field.value = value.into();
        if field.validity.is_invalid() {
            field.validate();
        }
        field.validity
    }

    /// Validate a single field when it loses focus.
    pub fn blur(&mut self, id: FieldId) -> Option<bool> {
        self.field_mut(id).map(Field::validate)
    }

    /// Validate every required field.
    ///
    /// All required fields are visited even after a failure, so every
    /// invalid field is marked at once. Sets the attempted flag.
    pub fn validate(&mut self) -> bool {
        let valid = self
            .fields
            .iter_mut()
            .filter(|f| f.required)
            .fold(true, |all_valid, field| field.validate() && all_valid);
        self.attempted = true;
        valid
    }

    /// Clear values and the attempted flag, keeping validity marks.
    pub fn clear_values(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.attempted = false;
    }

    /// Back to the initial state: no values, no marks, not attempted.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.attempted = false;
    }

    /// Fields currently marked invalid
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|f| f.validity.is_invalid())
            .map(|f| f.id)
            .collect()
    }
}
