//! Per-field validation rules for the contact form

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::models::{Field, FormPayload};

/// Exactly one `@` with non-whitespace on both sides
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Why a single field was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required(Field),
    InvalidEmail,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required(Field::FullName) => "Name is required",
            FieldError::Required(Field::Email) => "Email is required",
            FieldError::Required(Field::Message) => "Message cannot be empty",
            FieldError::InvalidEmail => "Please enter a valid email",
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Field errors keyed by field, in form order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// Store the outcome of validating one field: set on error, clear on pass
    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(e) => {
                self.0.insert(field, e);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First invalid field in form order
    pub fn first(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }
}

/// Check one field's value
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required(field));
    }
    if field == Field::Email && !email_regex().is_match(value) {
        return Some(FieldError::InvalidEmail);
    }
    None
}

/// Check every field; `Ok` only when all three pass
pub fn validate(payload: &FormPayload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for field in Field::ALL {
        errors.set(field, validate_field(field, payload.get(field)));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
