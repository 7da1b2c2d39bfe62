//! Streaming-catalog API configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};

/// Streaming-catalog API configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog Web API
    pub api_url: String,

    /// URL of the client-credentials token endpoint
    pub token_url: String,

    /// Application client ID
    pub client_id: String,

    /// Application client secret
    pub client_secret: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Returns an error if `CATALOG_CLIENT_ID` or `CATALOG_CLIENT_SECRET`
    /// is not set.
    pub fn from_env() -> ConfigResult<Self> {
        let client_id = get_required_env("CATALOG_CLIENT_ID")?;
        let client_secret = get_required_env("CATALOG_CLIENT_SECRET")?;

        if client_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "CATALOG_CLIENT_ID".to_string(),
                "client ID cannot be empty".to_string(),
            ));
        }

        if client_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "CATALOG_CLIENT_SECRET".to_string(),
                "client secret cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            api_url: get_env_or_default("CATALOG_API_URL", "https://api.spotify.com/v1"),
            token_url: get_env_or_default(
                "CATALOG_TOKEN_URL",
                "https://accounts.spotify.com/api/token",
            ),
            client_id,
            client_secret,
            timeout_secs: parse_env("CATALOG_TIMEOUT", 10)?,
        })
    }

    /// Create a configuration with custom endpoints (useful for testing)
    pub fn new(
        api_url: impl Into<String>,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_secs: 10,
        }
    }

    /// Get the full URL for a Web API endpoint
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}
