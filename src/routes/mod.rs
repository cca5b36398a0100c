pub mod contact;
pub mod health;

pub use contact::{submit_contact, ContactError};
pub use health::health_check;
