//! Mock chart-provider server
//!
//! Provides a [`MockChartServer`] that simulates the chart provider's
//! per-chart entry listings.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock chart server for testing chart fetching
///
/// # Example
///
/// ```rust,ignore
/// use tracklift_test_utils::MockChartServer;
///
/// #[tokio::test]
/// async fn test_chart_fetch() {
///     let server = MockChartServer::start().await;
///     server
///         .mock_chart_entries("hot-100", &[("Test Song", "Artist A")])
///         .await;
///     server.mock_charts_empty().await;
///
///     // Configure your client with server.url()
/// }
/// ```
pub struct MockChartServer {
    server: MockServer,
}

impl MockChartServer {
    /// Start a new mock chart server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the server base URL
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Access the underlying mock server for custom mounts
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock serving the given entries for one chart
    pub async fn mock_chart_entries(&self, slug: &str, entries: &[(&str, &str)]) {
        let entries_json: Vec<Value> = entries
            .iter()
            .map(|(title, artist)| json!({ "title": title, "artist": artist }))
            .collect();

        Mock::given(method("GET"))
            .and(path(format!("/charts/{}", slug)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "entries": entries_json
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a catch-all mock serving empty listings for every chart
    ///
    /// Lower priority than [`Self::mock_chart_entries`] mounts, so named
    /// charts still serve their entries.
    pub async fn mock_charts_empty(&self) {
        Mock::given(method("GET"))
            .and(path_regex(r"^/charts/[a-z0-9-]+$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "entries": [] })))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// Mount a failing chart listing
    pub async fn mock_chart_failure(&self, slug: &str, status_code: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/charts/{}", slug)))
            .respond_with(ResponseTemplate::new(status_code).set_body_string("chart unavailable"))
            .mount(&self.server)
            .await;
    }
}
