use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use verify_page::handoff::Navigator;
use verify_page::page::VerifyEmailPage;
use verify_page::types::{Config, Environment};

/// Navigator that reports navigation targets through the log output.
struct LoggingNavigator;

#[async_trait]
impl Navigator for LoggingNavigator {
    async fn navigate(&self, target: &str) {
        tracing::info!("Navigating to {target}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Configure logging format based on environment
    // Use JSON format for production log collection, regular format for development
    match config.environment {
        Environment::Production => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let mut args = std::env::args().skip(1);
    let link = args
        .next()
        .context("Usage: verify-page <verification-link-url> [--open-app]")?;
    let open_app = args.next().as_deref() == Some("--open-app");

    let link = Url::parse(&link).context("Invalid verification link URL")?;

    let mut page = VerifyEmailPage::new(config);
    page.load(&link).await;
    println!("{}", page.render());

    if open_app {
        let navigator: Arc<dyn Navigator> = Arc::new(LoggingNavigator);
        if let Some(fallback) = page.open_app(&navigator).await {
            // Wait out the fallback timer so the deferred navigation is observable
            let _ = fallback.await;
        }
    }

    Ok(())
}
