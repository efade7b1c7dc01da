use std::fmt;

/// One named input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// Every field, in the order they are rendered.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Key used in error text and as the DOM id/name of the input.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Text of the `<label>` bound to this field's input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Message is a free-text area, everything else is a single line.
    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Field::FirstName => 0,
            Field::LastName => 1,
            Field::Email => 2,
            Field::Message => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The current text of all four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: [String; 4],
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// (field, value) pairs in render order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(|field| (field, self.get(field)))
    }
}
