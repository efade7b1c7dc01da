use crate::field::{Field, FieldValues};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum number of characters accepted for a first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

// local-part "@" label ("." label)+
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// A failed rule. The `Display` text is exactly what the form shows under the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must have at least {min} characters.")]
    TooShort { field: Field, min: usize },
    #[error("{field} is a required field.")]
    Required { field: Field },
    #[error("{field} must be a valid email address.")]
    InvalidEmail { field: Field },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::TooShort { field, .. }
            | ValidationError::Required { field }
            | ValidationError::InvalidEmail { field } => *field,
        }
    }
}

/// Decides if a string looks like a deliverable email address
///
/// # Returns
/// true: a local part, an `@`, and a dotted domain with no surrounding whitespace
pub fn is_valid_email(s: &str) -> bool {
    EMAIL.is_match(s)
}

/// Applies the fixed rule for one field to its current value.
///
/// # Returns
/// None if the value is acceptable, otherwise the error to display
pub fn validate_field(field: Field, value: &str) -> Option<ValidationError> {
    match field {
        Field::FirstName if value.chars().count() < FIRST_NAME_MIN_LEN => {
            Some(ValidationError::TooShort {
                field,
                min: FIRST_NAME_MIN_LEN,
            })
        }
        Field::LastName if value.is_empty() => Some(ValidationError::Required { field }),
        Field::Email if !is_valid_email(value) => Some(ValidationError::InvalidEmail { field }),
        _ => None,
    }
}

/// Errors for every field, derived from a set of values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.errors.iter().find(|err| err.field() == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in field render order
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Keeps only the errors whose field passes `keep`.
    pub fn retain(mut self, keep: impl Fn(Field) -> bool) -> Self {
        self.errors.retain(|err| keep(err.field()));
        self
    }
}

/// Runs every rule against the current values.
pub fn validate(values: &FieldValues) -> FieldErrors {
    FieldErrors {
        errors: values
            .iter()
            .filter_map(|(field, value)| validate_field(field, value))
            .collect(),
    }
}
