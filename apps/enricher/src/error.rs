//! Error types for the enricher pipeline

use thiserror::Error;
use tracklift_catalog_client::CatalogError;
use tracklift_chart_client::ChartError;
use tracklift_shared_config::ConfigError;

/// Enricher pipeline errors
///
/// Every variant except a not-found resolution (which is reported by
/// omission, not as an error) aborts the run: a silently partial dataset
/// is worse than a hard stop.
#[derive(Error, Debug)]
pub enum EnricherError {
    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A catalog API call failed
    #[error("catalog call failed: {0}")]
    Catalog(#[from] CatalogError),

    /// A chart fetch failed
    #[error("chart fetch failed: {0}")]
    Chart(#[from] ChartError),

    /// Cache or dataset file I/O failed
    #[error("file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A cache file could not be encoded or decoded
    #[error("cache data is invalid: {0}")]
    CacheFormat(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset write attempted with zero records
    #[error("cannot write dataset: no tracks were resolved")]
    EmptyDataset,
}

/// Result type for enricher operations
pub type EnricherResult<T> = Result<T, EnricherError>;
