/// UI state of the verification page.
///
/// Exactly one variant is active at any time. `Loading` is initial;
/// `Success` and `Error` are terminal for verification but remain
/// interactive for the app handoff action. The error message is only
/// carried by the variant it is meaningful for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationState {
    /// Verification has not resolved yet
    Loading,
    /// The service accepted the token
    Success,
    /// Verification did not complete
    Error {
        /// Human-readable message shown to the user
        message: String,
    },
}

impl VerificationState {
    /// Whether verification has resolved, one way or the other.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}
