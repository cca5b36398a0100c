//! src/mail/mailer.rs

use std::future::Future;

use crate::domain::ContactSubmission;

#[derive(thiserror::Error, Debug)]
pub enum MailError {
    #[error("Failed to deliver the message through the email API.")]
    Request(#[from] reqwest::Error),
}

/// Hands an accepted submission to whoever should read it.
pub trait ContactMailer: Send + Sync + 'static {
    fn send(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = Result<(), MailError>> + Send;
}

/// Used when no email API is configured: the submission is only logged.
#[derive(Debug, Clone, Default)]
pub struct LogOnlyMailer;

impl ContactMailer for LogOnlyMailer {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        tracing::warn!(
            contact_email = %submission.email,
            "Email delivery is not configured, the message was only logged"
        );
        Ok(())
    }
}
