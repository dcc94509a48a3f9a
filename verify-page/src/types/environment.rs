//! Environment configuration for the verification page

use std::env;

use crate::verifier::VERIFY_EMAIL_PATH;

/// Production verification API, used when no override is set.
const DEFAULT_API_BASE_URL: &str = "https://8pb22tdpkb.us-east-1.awsapprunner.com";

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }
}

/// Page configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment
    pub environment: Environment,
    /// Full URL of the verify-email endpoint
    pub verify_email_endpoint: String,
}

impl Config {
    /// Resolves configuration from the process environment.
    ///
    /// The verification base URL honors the `VERIFY_API_BASE_URL` override
    /// and falls back to the fixed production endpoint when unset. A
    /// trailing slash on the override is trimmed so the endpoint path can
    /// be appended directly.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("VERIFY_API_BASE_URL").map_or_else(
            |_| DEFAULT_API_BASE_URL.to_string(),
            |url| url.trim_end_matches('/').to_string(),
        );

        Self {
            environment: Environment::from_env(),
            verify_email_endpoint: format!("{base_url}{VERIFY_EMAIL_PATH}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_from_env() {
        // Test development (default)
        env::remove_var("APP_ENV");
        assert_eq!(Environment::from_env(), Environment::Development);

        // Test explicit development
        env::set_var("APP_ENV", "development");
        assert_eq!(Environment::from_env(), Environment::Development);

        // Test production
        env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env(), Environment::Production);

        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    #[should_panic(expected = "Invalid environment: invalid")]
    fn test_invalid_environment() {
        env::set_var("APP_ENV", "invalid");
        let _ = Environment::from_env();
    }

    #[test]
    #[serial]
    fn test_default_verify_email_endpoint() {
        env::remove_var("APP_ENV");
        env::remove_var("VERIFY_API_BASE_URL");

        let config = Config::from_env();
        assert_eq!(
            config.verify_email_endpoint,
            "https://8pb22tdpkb.us-east-1.awsapprunner.com/api/auth/verify-email"
        );
    }

    #[test]
    #[serial]
    fn test_base_url_override() {
        env::remove_var("APP_ENV");
        env::set_var("VERIFY_API_BASE_URL", "http://localhost:8001");

        let config = Config::from_env();
        assert_eq!(
            config.verify_email_endpoint,
            "http://localhost:8001/api/auth/verify-email"
        );

        // A trailing slash on the override must not double up
        env::set_var("VERIFY_API_BASE_URL", "http://localhost:8001/");
        let config = Config::from_env();
        assert_eq!(
            config.verify_email_endpoint,
            "http://localhost:8001/api/auth/verify-email"
        );

        env::remove_var("VERIFY_API_BASE_URL");
    }
}
