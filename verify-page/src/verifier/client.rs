use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::error::VerifyError;
use super::types::{VerifyEmailRequest, VerifyEmailResponse};

/// Path of the verification endpoint, relative to the configured base URL.
pub const VERIFY_EMAIL_PATH: &str = "/api/auth/verify-email";

/// Shared HTTP client with connection pooling for all verification requests.
/// This client is initialized once and reused.
static HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(format!("verify-page/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Sends the verification token to the remote service and maps its answer.
///
/// Issues exactly one POST with a JSON `{ "token": ... }` body. The response
/// body is parsed regardless of HTTP status; a body that does not parse as
/// a [`VerifyEmailResponse`] counts as a transport failure.
///
/// # Errors
///
/// Returns [`VerifyError::Rejected`] when the service reports failure and
/// [`VerifyError::Network`] when the call cannot complete or the body is
/// unparseable.
pub async fn verify_email(endpoint: &str, token: String) -> Result<(), VerifyError> {
    debug!("Sending verification request to: {endpoint}");

    let response = HTTP_CLIENT
        .post(endpoint)
        .json(&VerifyEmailRequest { token })
        .send()
        .await?;

    let body: VerifyEmailResponse = response.json().await?;

    if body.success {
        Ok(())
    } else {
        warn!(reason = ?body.error, "Verification rejected by server");
        Err(VerifyError::Rejected {
            message: body.error,
        })
    }
}
