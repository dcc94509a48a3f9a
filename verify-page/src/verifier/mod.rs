mod client;
mod error;
mod types;

pub use client::{verify_email, VERIFY_EMAIL_PATH};
pub use error::VerifyError;
pub use types::{VerifyEmailRequest, VerifyEmailResponse};
