//! Chart provider client implementation

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};
use tracklift_shared_config::ChartConfig;

use crate::error::{ChartError, ChartResult};
use crate::models::{Chart, ChartEntry, ChartResponse};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Chart provider client
#[derive(Debug, Clone)]
pub struct ChartClient {
    http_client: Client,
    config: ChartConfig,
}

impl ChartClient {
    /// Create a new chart client from configuration
    pub fn new(config: &ChartConfig) -> ChartResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .user_agent("Tracklift/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Fetch the current entries of one chart
    ///
    /// # Errors
    /// - `ChartError::Api` if the provider returns a non-success status
    /// - `ChartError::Http` on transport failures
    #[instrument(skip(self))]
    pub async fn fetch_chart(&self, chart: Chart) -> ChartResult<Vec<ChartEntry>> {
        let url = self.config.chart_url(chart.slug());

        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChartError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed: ChartResponse = serde_json::from_str(&text)?;

        debug!(
            chart = %chart,
            entry_count = parsed.entries.len(),
            "fetched chart entries"
        );
        Ok(parsed.entries)
    }
}
