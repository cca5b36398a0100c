use std::fmt::Formatter;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use anyhow::Context;
use chrono::Utc;

use crate::domain::{ContactForm, ContactSubmission, ValidationError};
use crate::mail::ContactMailer;
use crate::utils::error_helpers::error_chain_fmt;

/// The only reason a caller ever sees for a server-side failure.
const SERVER_FAULT_REASON: &str = "Failed to send message";

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),

    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let reason = match self {
            ContactError::ValidationError(e) => e.to_string(),
            // internal details stay in the logs.
            ContactError::UnexpectedError(_) => SERVER_FAULT_REASON.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error: &reason })
    }
}

#[derive(serde::Serialize)]
struct Acknowledgement {
    success: bool,
    message: &'static str,
}

#[tracing::instrument(name = "Receiving a contact submission", skip(body, mailer))]
pub async fn submit_contact<M: ContactMailer>(
    body: web::Bytes,
    mailer: web::Data<M>,
) -> Result<HttpResponse, ContactError> {
    match accept_submission(&body, mailer.get_ref()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(Acknowledgement {
            success: true,
            message: "Message received successfully",
        })),
        Err(e) => {
            if let ContactError::UnexpectedError(_) = e {
                tracing::error!(error.cause_chain = ?e, "Contact form error");
            }
            Err(e)
        }
    }
}

async fn accept_submission<M: ContactMailer>(body: &[u8], mailer: &M) -> Result<(), ContactError> {
    let form: ContactForm = if body.is_empty() {
        ContactForm::default()
    } else {
        serde_json::from_slice(body).context("Failed to parse the contact form body")?
    };
    let submission = ContactSubmission::try_from(form)?;

    log_submission(&submission);

    mailer
        .send(&submission)
        .await
        .context("Failed to deliver the contact message")?;

    Ok(())
}

fn log_submission(submission: &ContactSubmission) {
    tracing::info!(
        contact_name = %submission.name.as_ref(),
        contact_email = %submission.email,
        contact_subject = %submission.subject.as_ref(),
        contact_message = %submission.message.as_ref(),
        timestamp = %Utc::now().to_rfc3339(),
        "Contact form submission"
    );
}
