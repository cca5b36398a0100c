pub mod mailer;
pub mod send_email;

pub use mailer::{ContactMailer, LogOnlyMailer, MailError};
pub use send_email::EmailClient;
