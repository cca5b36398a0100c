//! src/domain/contact_email.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::validation_error::ValidationError;

// one `@`, no whitespace anywhere, and a `.` somewhere after the `@`.
// `\s` is Unicode White_Space: U+0085 counts, U+FEFF does not.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// An empty address is reported as missing, anything else that does not
    /// look like `local@domain.tld` is invalid.
    pub fn parse(s: String) -> Result<ContactEmail, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if !EMAIL_SHAPE.is_match(&s) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
