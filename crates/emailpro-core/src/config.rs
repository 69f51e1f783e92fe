//! Backend client configuration.

use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";

/// Environment variable that overrides the backend address.
pub const BACKEND_URL_ENV: &str = "EMAILPRO_BACKEND_URL";

const fn default_timeout_secs() -> u64 {
    30
}

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL; endpoint paths are appended to it.
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads the base URL from `EMAILPRO_BACKEND_URL`, falling back to the default.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(BACKEND_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parses the base URL.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidUrl` if the URL does not parse or cannot carry a path
    /// (e.g. `mailto:` URLs).
    pub fn base_url(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| Error::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(self.base_url.clone()));
        }
        Ok(url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_base_url_rejects_garbage() {
        assert!(ClientConfig::new("not a url").base_url().is_err());
        assert!(ClientConfig::new("mailto:someone@example.com").base_url().is_err());
        assert!(ClientConfig::new("http://10.0.0.5:8080/api").base_url().is_ok());
    }

    #[test]
    fn test_missing_timeout_uses_default() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url":"http://example.com"}"#).unwrap();
        assert_eq!(config.timeout_secs, 30);
    }
}
