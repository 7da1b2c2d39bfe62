//! Chart-provider configuration types

use crate::{get_env_or_default, parse_env, ConfigResult};

/// Chart-provider API configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Base URL of the chart provider API
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ChartConfig {
    /// Load chart configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            base_url: get_env_or_default("CHART_BASE_URL", "https://charts.example.com/api"),
            timeout_secs: parse_env("CHART_TIMEOUT", 10)?,
        })
    }

    /// Create a configuration with a custom base URL (useful for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }

    /// Get the full URL for a named chart
    pub fn chart_url(&self, slug: &str) -> String {
        format!("{}/charts/{}", self.base_url.trim_end_matches('/'), slug)
    }
}
