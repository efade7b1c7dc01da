use crate::field::{Field, FieldValues};
use crate::validation::{FieldErrors, validate};
use leptos::logging::log;

/// Result of pressing the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Number of fields still failing their rule
    Rejected(usize),
}

/// The values captured by the last fully valid submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    values: FieldValues,
}

impl SubmissionRecord {
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    /// Summary rows shown after submitting. An empty message is left out.
    pub fn lines(&self) -> Vec<(&'static str, &str)> {
        self.values
            .iter()
            .filter(|(field, value)| *field != Field::Message || !value.is_empty())
            .map(|(field, value)| (field.label(), value))
            .collect()
    }
}

/// Live state of one mounted contact form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FieldValues,
    // fields whose errors are shown; a field is revealed by typing in it or by submitting
    revealed: [bool; 4],
    submitted: bool,
    submission: Option<SubmissionRecord>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn submission(&self) -> Option<&SubmissionRecord> {
        self.submission.as_ref()
    }

    /// Stores new text for a field and starts showing its error, if any.
    /// Any string is accepted.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.reveal(field);
    }

    /// Validates every field. When nothing fails, snapshots the values and
    /// marks the form submitted.
    pub fn submit(&mut self) -> SubmitOutcome {
        Field::ALL.into_iter().for_each(|field| self.reveal(field));
        let errors = validate(&self.values);
        if errors.is_empty() {
            self.submission = Some(SubmissionRecord {
                values: self.values.clone(),
            });
            self.submitted = true;
            log!("contact form accepted");
            SubmitOutcome::Accepted
        } else {
            log!("contact form rejected with {} error(s)", errors.len());
            SubmitOutcome::Rejected(errors.len())
        }
    }

    /// Errors currently on screen: the rules applied to the current values,
    /// limited to revealed fields.
    pub fn errors(&self) -> FieldErrors {
        validate(&self.values).retain(|field| self.is_revealed(field))
    }

    pub fn is_revealed(&self, field: Field) -> bool {
        self.revealed[field.index()]
    }

    fn reveal(&mut self, field: Field) {
        self.revealed[field.index()] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.input(Field::FirstName, "LisaM");
        form.input(Field::LastName, "DeSpain");
        form.input(Field::Email, "ldespain@cox.net");
        form
    }

    #[test]
    fn test_mount_state() {
        let form = FormState::new();
        assert!(form.errors().is_empty());
        assert!(!form.submitted());
        assert!(form.submission().is_none());
        assert!(form.values().iter().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn test_input_reveals_only_that_field() {
        let mut form = FormState::new();
        form.input(Field::FirstName, "Edd");
        let errors = form.errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.get(Field::FirstName),
            Some(ValidationError::TooShort { .. })
        ));

        //a valid value clears it on the next keystroke
        form.input(Field::FirstName, "Eddie");
        assert!(form.errors().is_empty());
        //and a bad one brings it back
        form.input(Field::FirstName, "");
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_submit_empty_form() {
        let mut form = FormState::new();
        assert_eq!(form.submit(), SubmitOutcome::Rejected(3));
        assert_eq!(form.errors().len(), 3);
        assert!(!form.submitted());
        assert!(form.submission().is_none());
    }

    #[test]
    fn test_submit_valid_form() {
        let mut form = filled();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert!(form.submitted());
        assert!(form.errors().is_empty());
        let lines = form.submission().unwrap().lines();
        assert_eq!(
            lines,
            vec![
                ("First Name", "LisaM"),
                ("Last Name", "DeSpain"),
                ("Email", "ldespain@cox.net"),
            ]
        );
    }

    #[test]
    fn test_summary_includes_message_when_present() {
        let mut form = filled();
        form.input(Field::Message, "This is a message!");
        form.submit();
        let lines = form.submission().unwrap().lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], ("Message", "This is a message!"));
    }

    #[test]
    fn test_resubmit_is_idempotent() {
        let mut form = filled();
        form.submit();
        let first = form.submission().cloned();
        assert_eq!(form.submit(), SubmitOutcome::Accepted);
        assert_eq!(form.submission().cloned(), first);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_submitted_never_reverts() {
        let mut form = filled();
        form.submit();
        form.input(Field::Email, "lisa");
        assert_eq!(form.submit(), SubmitOutcome::Rejected(1));
        assert!(form.submitted());
        //last good snapshot stays on screen
        assert_eq!(
            form.submission().unwrap().values().get(Field::Email),
            "ldespain@cox.net"
        );

        form.input(Field::Email, "lisa@cox.net");
        form.submit();
        assert_eq!(
            form.submission().unwrap().values().get(Field::Email),
            "lisa@cox.net"
        );
    }

    #[test]
    fn test_snapshot_does_not_follow_edits() {
        let mut form = filled();
        form.submit();
        form.input(Field::LastName, "Smith");
        assert_eq!(
            form.submission().unwrap().values().get(Field::LastName),
            "DeSpain"
        );
    }
}
