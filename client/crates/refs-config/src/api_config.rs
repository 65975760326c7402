use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_REGISTRATION_PATH};

use serde::Deserialize;

/// Where the pre-registration backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme + host (+ optional port and prefix), e.g. "http://localhost:8080"
    pub base_url: String,
    /// Registration endpoint, relative to `base_url`
    pub registration_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
            registration_path: String::from(DEFAULT_REGISTRATION_PATH),
        }
    }
}

impl ApiConfig {
    /// The HTTP client is built without a TLS backend, so only plain
    /// `http://` endpoints are reachable.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.starts_with("https://") {
            return Err(ConfigError::api(format!(
                "api.base_url uses https://, which this build cannot reach (no TLS support): '{}'",
                self.base_url
            )));
        }

        let rest = self.base_url.strip_prefix("http://").ok_or_else(|| {
            ConfigError::api(format!(
                "api.base_url must start with http://, got '{}'",
                self.base_url
            ))
        })?;

        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() || host.starts_with(':') {
            return Err(ConfigError::api(format!(
                "api.base_url has no host: '{}'",
                self.base_url
            )));
        }

        if !self.registration_path.starts_with('/') {
            return Err(ConfigError::api(format!(
                "api.registration_path must start with '/', got '{}'",
                self.registration_path
            )));
        }

        Ok(())
    }
}
