//! src/domain/contact_field.rs

use crate::domain::validation_error::ValidationError;

/// Subject used when the submitter leaves the field blank.
pub const DEFAULT_SUBJECT: &str = "General Inquiry";

#[derive(Debug, Clone)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<ContactName, ValidationError> {
        // whitespace is content here, only a truly empty field is missing.
        if s.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<ContactMessage, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct ContactSubject(String);

impl ContactSubject {
    /// Never fails, an absent or empty subject falls back to [`DEFAULT_SUBJECT`].
    pub fn parse(s: Option<String>) -> ContactSubject {
        match s {
            Some(subject) if !subject.is_empty() => Self(subject),
            _ => Self(DEFAULT_SUBJECT.to_string()),
        }
    }
}

impl AsRef<str> for ContactSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
