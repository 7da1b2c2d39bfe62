//! Common test utilities for enricher integration tests

#![allow(dead_code)]

use std::path::Path;

use tracklift_enricher::Config;
use tracklift_shared_config::{CatalogConfig, ChartConfig};
use tracklift_test_utils::{MockCatalogServer, MockChartServer};

/// Build a pipeline configuration pointed at mock servers, with cache and
/// output files under the given directory
pub fn test_config(catalog: &MockCatalogServer, charts: &MockChartServer, dir: &Path) -> Config {
    Config::new(
        CatalogConfig::new(
            catalog.api_url(),
            catalog.token_url(),
            "test-client-id",
            "test-client-secret",
        ),
        ChartConfig::with_base_url(charts.url()),
        dir,
        dir.join("tracks.csv"),
    )
}
