//! src/domain/validation_error.rs

/// Reasons a submission is rejected before any side effect.
///
/// `Display` is the exact reason reported back to the caller.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,
}
