use thiserror::Error;

/// Error types for the verify-email call
#[derive(Debug, Error)]
pub enum VerifyError {
    /// No `token` query parameter was present on the inbound link,
    /// detected locally before any network call
    #[error("No verification token provided")]
    MissingToken,

    /// The service answered but reported the token as not verified
    #[error("Verification rejected: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected {
        /// Optional human-readable reason supplied by the service
        message: Option<String>,
    },

    /// Transport-level failure, including an unparseable response body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl VerifyError {
    /// Maps the failure onto the message shown to the user.
    ///
    /// The technical detail of a transport failure is logged, never
    /// surfaced to the page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingToken => "No verification token provided".to_string(),
            Self::Rejected { message } => message
                .clone()
                .unwrap_or_else(|| "Verification failed".to_string()),
            Self::Network(_) => "Unable to connect to server. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_message() {
        assert_eq!(
            VerifyError::MissingToken.user_message(),
            "No verification token provided"
        );
    }

    #[test]
    fn test_rejected_surfaces_server_message() {
        let err = VerifyError::Rejected {
            message: Some("Token expired".to_string()),
        };
        assert_eq!(err.user_message(), "Token expired");
    }

    #[test]
    fn test_rejected_without_message_falls_back() {
        let err = VerifyError::Rejected { message: None };
        assert_eq!(err.user_message(), "Verification failed");
    }
}
