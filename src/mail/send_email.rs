//! src/mail/send_email.rs

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::config::EmailClientSettings;
use crate::domain::{ContactEmail, ContactSubmission};
use crate::mail::mailer::{ContactMailer, MailError};

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}

/// Client for a Postmark-style `POST /email` API.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: ContactEmail,
    recipient: ContactEmail,
    authorization: Secret<String>,
}

impl EmailClient {
    pub fn new(
        email_settings: EmailClientSettings,
        sender: ContactEmail,
        recipient: ContactEmail,
    ) -> Result<Self, MailError> {
        let http_client = Client::builder().timeout(email_settings.timeout()).build()?;

        Ok(Self {
            http_client,
            base_url: email_settings.base_url,
            sender,
            recipient,
            authorization: email_settings.authorization_token,
        })
    }

    pub async fn send_email(
        &self,
        reply_to: &ContactEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), MailError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: self.recipient.as_ref(),
            reply_to: reply_to.as_ref(),
            subject,
            html_body: html_content,
            text_body: text_content,
        };

        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

impl ContactMailer for EmailClient {
    #[tracing::instrument(
        name = "Deliver contact message",
        skip(self, submission),
        fields(contact_email = %submission.email)
    )]
    async fn send(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let subject = format!("Portfolio Contact: {}", submission.subject.as_ref());
        self.send_email(
            &submission.email,
            &subject,
            &html_body(submission),
            &text_body(submission),
        )
        .await
    }
}

fn html_body(submission: &ContactSubmission) -> String {
    let message =
        htmlescape::encode_minimal(submission.message.as_ref()).replace('\n', "<br>");
    format!(
        "<h2>New Contact Form Submission</h2>\
        <p><strong>Name:</strong> {}</p>\
        <p><strong>Email:</strong> {}</p>\
        <p><strong>Subject:</strong> {}</p>\
        <p><strong>Message:</strong></p>\
        <p>{}</p>",
        htmlescape::encode_minimal(submission.name.as_ref()),
        htmlescape::encode_minimal(submission.email.as_ref()),
        htmlescape::encode_minimal(submission.subject.as_ref()),
        message,
    )
}

fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "New Contact Form Submission\n\n\
        Name: {}\n\
        Email: {}\n\
        Subject: {}\n\n\
        {}",
        submission.name.as_ref(),
        submission.email.as_ref(),
        submission.subject.as_ref(),
        submission.message.as_ref(),
    )
}
