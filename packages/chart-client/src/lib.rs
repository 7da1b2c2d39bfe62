//! Music-chart provider client for Tracklift
//!
//! This crate fetches the entries of published song charts. One call per
//! chart; aggregation and deduplication across charts belong to the
//! consumer.
//!
//! # Example
//!
//! ```rust,no_run
//! use tracklift_chart_client::{Chart, ChartClient};
//! use tracklift_shared_config::ChartConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ChartClient::new(&ChartConfig::from_env()?)?;
//! let entries = client.fetch_chart(Chart::Hot100).await?;
//! for entry in entries {
//!     println!("{} by {}", entry.title, entry.artist);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::ChartClient;
pub use error::{ChartError, ChartResult};
pub use models::{Chart, ChartEntry};
