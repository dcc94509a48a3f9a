//! Text rendering for the three page states.

use crate::state::VerificationState;

/// Renders the current state to displayable text, one line per element.
#[must_use]
pub fn render(state: &VerificationState) -> String {
    match state {
        VerificationState::Loading => render_loading(),
        VerificationState::Success => render_success(),
        VerificationState::Error { message } => render_error(message),
    }
}

fn render_loading() -> String {
    [
        "Verifying your email...",
        "Please wait while we verify your email address.",
    ]
    .join("\n")
}

fn render_success() -> String {
    [
        "Email Verified!",
        "Your email has been successfully verified. You can now access all features in the app.",
        "[Open App]",
        "If the app doesn't open, you'll be redirected to the App Store.",
    ]
    .join("\n")
}

fn render_error(message: &str) -> String {
    [
        "Verification Failed",
        message,
        "The link may have expired or already been used.",
        "Please request a new verification email from the app.",
        "[Open App]",
    ]
    .join("\n")
}
