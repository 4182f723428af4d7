//! Client configuration.
//!
//! Configuration is explicit construction first, environment second:
//!
//! - `TRIBUNA_BASE_URL` - backend base URL
//! - `TRIBUNA_TIMEOUT_SECS` - default per-request timeout
//! - `TRIBUNA_CONNECT_TIMEOUT_SECS` - connect timeout
//!
//! `from_env` honors a `.env` file in the working directory.

use std::env;
use std::time::Duration;

use tribuna_core::defaults;

/// Configuration for the Tribuna HTTP client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Backend base URL. A trailing slash is tolerated.
    pub base_url: String,
    /// Default timeout applied to every request; individual calls may
    /// override it.
    pub timeout: Duration,
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            timeout: Duration::from_secs(defaults::TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given base URL, with default
    /// timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Create from environment variables, falling back to defaults for
    /// anything unset or unparseable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url =
            env::var("TRIBUNA_BASE_URL").unwrap_or_else(|_| defaults::BASE_URL.to_string());

        Self {
            base_url,
            timeout: env_secs("TRIBUNA_TIMEOUT_SECS", defaults::TIMEOUT_SECS),
            connect_timeout: env_secs("TRIBUNA_CONNECT_TIMEOUT_SECS", defaults::CONNECT_TIMEOUT_SECS),
        }
    }
}

fn env_secs(key: &str, default: u64) -> Duration {
    match env::var(key) {
        Ok(val) => match val.parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                tracing::warn!(key, value = %val, "Invalid timeout value, using default");
                Duration::from_secs(default)
            }
        },
        Err(_) => Duration::from_secs(default),
    }
}
