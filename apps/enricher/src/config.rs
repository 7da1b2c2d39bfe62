//! Enricher configuration loaded from environment variables

use std::path::PathBuf;

use tracklift_shared_config::{get_env_or_default, parse_env, CatalogConfig, ChartConfig};

use crate::error::EnricherResult;

/// Enricher pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog API configuration
    pub catalog: CatalogConfig,

    /// Chart provider configuration
    pub chart: ChartConfig,

    /// Directory holding the per-stage cache files
    pub cache_dir: PathBuf,

    /// Path of the CSV dataset to write
    pub output_path: PathBuf,

    /// Whether existing cache files are reused
    pub use_cache: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> EnricherResult<Self> {
        Ok(Self {
            catalog: CatalogConfig::from_env()?,
            chart: ChartConfig::from_env()?,
            cache_dir: PathBuf::from(get_env_or_default("TRACKLIFT_CACHE_DIR", "./bin")),
            output_path: PathBuf::from(get_env_or_default(
                "TRACKLIFT_OUTPUT",
                "./bin/tracks.csv",
            )),
            use_cache: parse_env("TRACKLIFT_USE_CACHE", true)?,
        })
    }

    /// Create a configuration with explicit paths (useful for testing)
    pub fn new(
        catalog: CatalogConfig,
        chart: ChartConfig,
        cache_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog,
            chart,
            cache_dir: cache_dir.into(),
            output_path: output_path.into(),
            use_cache: true,
        }
    }

    /// Cache file for the aggregated chart entries
    pub fn chart_entries_cache(&self) -> PathBuf {
        self.cache_dir.join("chart_entries.json")
    }

    /// Cache file for the resolved track identifiers
    pub fn track_ids_cache(&self) -> PathBuf {
        self.cache_dir.join("track_ids.json")
    }
}
