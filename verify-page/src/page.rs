//! Orchestrates a single page instance: one verification pass, rendering,
//! and the optional app handoff.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use crate::handoff::{self, Navigator};
use crate::state::VerificationState;
use crate::token;
use crate::types::Config;
use crate::verifier::{self, VerifyError};
use crate::view;

/// A single verify-email page instance.
///
/// Owns the three-way UI state; only [`Self::load`] mutates it, and a
/// terminal state never changes again for the life of the instance.
pub struct VerifyEmailPage {
    config: Config,
    state: VerificationState,
}

impl VerifyEmailPage {
    /// Creates a page in the initial `Loading` state.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            state: VerificationState::Loading,
        }
    }

    /// Current UI state.
    #[must_use]
    pub const fn state(&self) -> &VerificationState {
        &self.state
    }

    /// Runs the verification pass for the inbound link.
    ///
    /// Extracts the `token` query parameter and issues at most one call to
    /// the verification service: none when the token is absent, one
    /// otherwise. A page that already reached a terminal state is left
    /// untouched, so the call is never repeated automatically.
    pub async fn load(&mut self, link: &Url) {
        if self.state.is_terminal() {
            debug!("Verification already resolved, ignoring reload");
            return;
        }

        let outcome = match token::extract_token(link) {
            None => Err(VerifyError::MissingToken),
            Some(token) => {
                verifier::verify_email(&self.config.verify_email_endpoint, token).await
            }
        };

        self.state = match outcome {
            Ok(()) => {
                info!("Email verified");
                VerificationState::Success
            }
            Err(err) => {
                match &err {
                    VerifyError::MissingToken => {
                        warn!("No verification token on the inbound link");
                    }
                    VerifyError::Rejected { .. } => warn!("{err}"),
                    VerifyError::Network(source) => {
                        warn!("Verification call failed: {source}");
                    }
                }
                VerificationState::Error {
                    message: err.user_message(),
                }
            }
        };
    }

    /// Renders the current state to displayable text.
    #[must_use]
    pub fn render(&self) -> String {
        view::render(&self.state)
    }

    /// Handles the `Open App` user action.
    ///
    /// The action is only rendered once verification has resolved, so it is
    /// ignored while still `Loading`. The state never changes; the handoff
    /// is a side effect only. Returns the handle of the pending fallback
    /// navigation for callers that want to wait it out; dropping the handle
    /// does not cancel the fallback.
    pub async fn open_app(&self, navigator: &Arc<dyn Navigator>) -> Option<JoinHandle<()>> {
        if !self.state.is_terminal() {
            debug!("Ignoring open-app action while verification is pending");
            return None;
        }

        Some(handoff::open_app(navigator).await)
    }
}
