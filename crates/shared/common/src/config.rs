//! Client configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend origin
pub const DEFAULT_API_URL: &str = "http://localhost:8080";
/// Default REST prefix
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8080`
    pub api_url: String,
    /// Prefix prepended to every endpoint
    pub api_prefix: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// File the session is persisted to
    pub session_file: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("GOLF_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_prefix: env::var("GOLF_API_PREFIX")
                .unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
            timeout: Duration::from_millis(
                env::var("GOLF_API_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_MS),
            ),
            session_file: env::var("GOLF_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        }
    }

    /// Base URL every endpoint is appended to
    pub fn base_url(&self) -> String {
        format!(
            "{}{}",
            self.api_url.trim_end_matches('/'),
            self.api_prefix.trim_end_matches('/')
        )
    }

    /// Full URL of an endpoint such as `/auth/login`
    pub fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url(), endpoint)
        } else {
            format!("{}/{}", self.base_url(), endpoint)
        }
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            session_file: default_session_file(),
        }
    }
}

/// `$HOME/.golf/session.json`, or `./.golf-session.json` without a home
fn default_session_file() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(".golf").join("session.json"),
        _ => PathBuf::from(".golf-session.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        let config = ClientConfig::default().with_api_url("http://127.0.0.1:9000/");
        assert_eq!(config.base_url(), "http://127.0.0.1:9000/api/v1");
        assert_eq!(config.url_for("/auth/login"), "http://127.0.0.1:9000/api/v1/auth/login");
        assert_eq!(config.url_for("bookings/all"), "http://127.0.0.1:9000/api/v1/bookings/all");
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        assert_eq!(ClientConfig::default().timeout, Duration::from_secs(10));
    }
}
