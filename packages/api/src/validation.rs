//! Field rules for the contact form.
//!
//! | Field | Rule |
//! |-------|------|
//! | `name` | required (whitespace-only counts as empty) |
//! | `email` | required, then must look like `local@domain.tld` |
//! | `message` | required (whitespace-only counts as empty) |
//!
//! [`validate`] is pure: it can run on every keystroke without side effects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// A contact form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Form key: "name"
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label shown next to an error: "Full Name"
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// Why a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("invalid format")]
    InvalidFormat,
}

impl FieldError {
    /// Human-readable message for this error on `field`.
    pub fn message(self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, FieldError::Required) => "Name is required.",
            (Field::Email, FieldError::Required) => "Email is required.",
            (Field::Message, FieldError::Required) => "Message is required.",
            (_, FieldError::InvalidFormat) => "Please enter a valid email address.",
        }
    }
}

/// Field → error for every field that violates its rule.
///
/// A field is present only when it is invalid; an empty result means the form
/// can be submitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in form order (name, email, message).
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// `(label, message)` pairs for display.
    pub fn messages(&self) -> Vec<(&'static str, &'static str)> {
        self.iter().map(|(f, e)| (f.label(), e.message(f))).collect()
    }
}

/// Check every field of `input`.
pub fn validate(input: &FormInput) -> ValidationResult {
    let mut errors = BTreeMap::new();
    for field in Field::ALL {
        if let Some(err) = validate_field(field, input.get(field)) {
            errors.insert(field, err);
        }
    }
    ValidationResult { errors }
}

/// Check a single field, for on-blur feedback.
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    if field == Field::Email && !is_valid_email(value) {
        return Some(FieldError::InvalidFormat);
    }
    None
}

/// `local@domain.tld`: one `@`, no whitespace, and a dotted domain with no
/// empty labels.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput::new("Ada", "ada@example.com", "Hello there")
    }

    #[test]
    fn test_valid_input() {
        let result = validate(&valid_input());
        assert!(result.is_valid());
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_name_only_flags_name() {
        for name in ["", "   ", "\t\n"] {
            let input = FormInput {
                name: name.to_string(),
                ..valid_input()
            };
            let result = validate(&input);
            assert_eq!(result.get(Field::Name), Some(FieldError::Required));
            assert_eq!(result.len(), 1, "only name should fail for {name:?}");
        }
    }

    #[test]
    fn test_empty_message() {
        let input = FormInput {
            message: " ".to_string(),
            ..valid_input()
        };
        let result = validate(&input);
        assert_eq!(result.get(Field::Message), Some(FieldError::Required));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_empty_email_is_required_not_format() {
        let input = FormInput {
            email: String::new(),
            ..valid_input()
        };
        assert_eq!(validate(&input).get(Field::Email), Some(FieldError::Required));
    }

    #[test]
    fn test_all_empty() {
        let result = validate(&FormInput::default());
        assert_eq!(result.len(), 3);
        assert_eq!(
            result.messages(),
            vec![
                ("Full Name", "Name is required."),
                ("Email", "Email is required."),
                ("Message", "Message is required."),
            ]
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@example.",
            "user@.com",
            "user@exa..mple.com",
            "us er@example.com",
            "user@@example.com",
            "user@example@com.org",
        ] {
            let input = FormInput {
                email: email.to_string(),
                ..valid_input()
            };
            let result = validate(&input);
            assert_eq!(
                result.get(Field::Email),
                Some(FieldError::InvalidFormat),
                "{email:?} should be rejected"
            );
            assert_eq!(result.len(), 1);
        }
    }

    #[test]
    fn test_valid_emails() {
        for email in [
            "a@b.co",
            "first.last@example.com",
            "user+tag@mail.example.org",
            "  padded@example.com  ",
        ] {
            assert!(is_valid_email(email), "{email:?} should be accepted");
        }
    }

    #[test]
    fn test_invalid_format_message() {
        assert_eq!(
            FieldError::InvalidFormat.message(Field::Email),
            "Please enter a valid email address."
        );
    }

    #[test]
    fn test_validation_is_repeatable() {
        let input = FormInput::new("", "nope", "hi");
        let first = validate(&input);
        let second = validate(&input);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_validate_field() {
        assert_eq!(validate_field(Field::Name, "Ada"), None);
        assert_eq!(validate_field(Field::Email, "x"), Some(FieldError::InvalidFormat));
        assert_eq!(validate_field(Field::Message, ""), Some(FieldError::Required));
    }
}
