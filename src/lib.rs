//! A contact form built with Leptos: first name, last name, email and an
//! optional message, validated as the visitor types and again on submit.

pub mod components;
pub mod field;
pub mod form;
pub mod render;
pub mod validation;

pub use components::{App, ContactForm};
pub use field::{Field, FieldValues};
pub use form::{FormState, SubmissionRecord, SubmitOutcome};
pub use render::RenderedForm;
pub use validation::{FieldErrors, ValidationError, validate, validate_field};
