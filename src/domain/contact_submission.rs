//! src/domain/contact_submission.rs

use crate::domain::contact_email::ContactEmail;
use crate::domain::contact_field::{ContactMessage, ContactName, ContactSubject};
use crate::domain::validation_error::ValidationError;

/// Body of `POST /api/contact` exactly as the form sends it.
#[derive(serde::Deserialize, Debug, Default)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A submission that passed validation. Lives for one request only.
#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: ContactSubject,
    pub message: ContactMessage,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        // presence of every required field is checked before the email shape.
        let email = form.email.unwrap_or_default();
        if email.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let name = ContactName::parse(form.name.unwrap_or_default())?;
        let message = ContactMessage::parse(form.message.unwrap_or_default())?;
        let email = ContactEmail::parse(email)?;

        Ok(Self {
            name,
            email,
            subject: ContactSubject::parse(form.subject),
            message,
        })
    }
}
