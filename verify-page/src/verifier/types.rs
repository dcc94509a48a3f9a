use serde::{Deserialize, Serialize};

/// Request body for the verify-email endpoint.
#[derive(Debug, Serialize)]
pub struct VerifyEmailRequest {
    /// Opaque token lifted from the verification link
    pub token: String,
}

/// Response body from the verify-email endpoint.
#[derive(Debug, Deserialize)]
pub struct VerifyEmailResponse {
    /// Whether the token was accepted
    pub success: bool,
    /// Optional human-readable reason when `success` is `false`
    #[serde(default)]
    pub error: Option<String>,
}
