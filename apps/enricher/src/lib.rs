//! Tracklift enricher pipeline
//!
//! Enriches chart-song listings with streaming-catalog metadata and audio
//! features, producing one flat CSV row per matched track. The pipeline
//! stages are: fetch chart entries (cached), resolve entries to catalog
//! track identifiers via candidate-ordered fuzzy search (cached), enrich
//! the resolved set in two batched passes, and write the dataset.

pub mod artists;
pub mod cache;
pub mod config;
pub mod dataset;
pub mod enrich;
pub mod error;
pub mod pipeline;
pub mod resolve;
pub mod search;

pub use config::Config;
pub use error::{EnricherError, EnricherResult};
