//! Plain-data view of what the contact form puts on screen.
//!
//! `ContactForm` renders from a memo of this projection (labels, ids, values,
//! error text, button text and summary), so what the native tests inspect is
//! what the DOM shows.

use crate::field::Field;
use crate::form::FormState;

pub const HEADING: &str = "Contact Form";
pub const SUBMIT_TEXT: &str = "Submit";

/// One labelled input as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedInput {
    pub field: Field,
    pub label: &'static str,
    pub id: &'static str,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    pub heading: &'static str,
    pub inputs: Vec<RenderedInput>,
    pub button: &'static str,
    /// "Label: value" rows, present once a submit was accepted
    pub summary: Option<Vec<String>>,
}

impl From<&FormState> for RenderedForm {
    fn from(form: &FormState) -> Self {
        let errors = form.errors();
        let inputs = form
            .values()
            .iter()
            .map(|(field, value)| RenderedInput {
                field,
                label: field.label(),
                id: field.name(),
                value: value.to_string(),
                error: errors.get(field).map(ToString::to_string),
            })
            .collect();
        let summary = form.submission().map(|record| {
            record
                .lines()
                .into_iter()
                .map(|(label, value)| format!("{label}: {value}"))
                .collect()
        });
        RenderedForm {
            heading: HEADING,
            inputs,
            button: SUBMIT_TEXT,
            summary,
        }
    }
}

impl RenderedForm {
    pub fn input(&self, field: Field) -> Option<&RenderedInput> {
        self.inputs.iter().find(|input| input.field == field)
    }

    /// Body of the `<pre class="summary">` block, one row per line.
    pub fn summary_text(&self) -> Option<String> {
        self.summary.as_ref().map(|rows| rows.join("\n"))
    }

    /// Every visible text node, in document order. Input values are not text nodes.
    pub fn text_nodes(&self) -> Vec<String> {
        let mut nodes = vec![self.heading.to_string()];
        for input in &self.inputs {
            nodes.push(input.label.to_string());
            if let Some(error) = &input.error {
                nodes.push(error.clone());
            }
        }
        nodes.push(self.button.to_string());
        nodes.extend(self.summary_text());
        nodes
    }

    /// Case-insensitive substring search over the text nodes.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.count_text(needle) > 0
    }

    /// Number of text nodes containing `needle`, ignoring case.
    pub fn count_text(&self, needle: &str) -> usize {
        let needle = needle.to_lowercase();
        self.text_nodes()
            .iter()
            .filter(|node| node.to_lowercase().contains(&needle))
            .count()
    }

    /// Finds the input whose label contains `needle`, ignoring case.
    pub fn input_by_label(&self, needle: &str) -> Option<&RenderedInput> {
        let needle = needle.to_lowercase();
        self.inputs
            .iter()
            .find(|input| input.label.to_lowercase().contains(&needle))
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.input(field).and_then(|input| input.error.as_deref())
    }

    pub fn errors(&self) -> Vec<&str> {
        self.inputs
            .iter()
            .filter_map(|input| input.error.as_deref())
            .collect()
    }
}
