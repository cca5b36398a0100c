pub mod contact_email;
pub mod contact_field;
pub mod contact_submission;
pub mod validation_error;

pub use contact_email::ContactEmail;
pub use contact_field::{ContactMessage, ContactName, ContactSubject};
pub use contact_submission::{ContactForm, ContactSubmission};
pub use validation_error::ValidationError;
