//! Deep-link handoff into the companion mobile application.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::debug;

/// Custom URL scheme registered by the companion application.
pub const APP_SCHEME_URL: &str = "daysprep66://";

/// Public App Store listing, used when the scheme has no installed handler.
pub const APP_STORE_URL: &str =
    "https://apps.apple.com/us/app/66-days-prep-career-tracker/id6752681422";

/// Delay before the fallback navigation to the App Store fires.
pub const FALLBACK_DELAY: Duration = Duration::from_millis(1500);

/// Browser navigation seam.
///
/// The platform reports nothing back for a custom-scheme navigation, so
/// navigation is fire-and-forget: there is no way to observe whether an
/// installed app handled the scheme.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Navigates the page to the given target.
    async fn navigate(&self, target: &str);
}

/// Attempts to open the companion application, falling back to the App
/// Store.
///
/// Navigates to the custom scheme immediately, then schedules a single
/// fallback navigation [`FALLBACK_DELAY`] later. When an installed app
/// handles the scheme the page is typically backgrounded and the pending
/// fallback is moot in practice; when no handler exists the page stays
/// active and the fallback sends the user to install the app.
///
/// The fallback timer is not cancellable and not tied to page visibility;
/// every call schedules a fresh independent timer, so rapid repeated calls
/// stack redundant fallbacks. Known limitation, kept on purpose.
///
/// The returned handle is for observation only; dropping it does not
/// cancel the pending fallback.
pub async fn open_app(navigator: &Arc<dyn Navigator>) -> JoinHandle<()> {
    navigator.navigate(APP_SCHEME_URL).await;

    let navigator = Arc::clone(navigator);
    tokio::spawn(async move {
        tokio::time::sleep(FALLBACK_DELAY).await;
        debug!("Custom scheme not handled within the delay, falling back to the App Store");
        navigator.navigate(APP_STORE_URL).await;
    })
}
