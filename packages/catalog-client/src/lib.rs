//! Streaming-catalog API client for Tracklift
//!
//! This crate provides a client for the catalog Web API, enabling:
//! - Track search by title and artist
//! - Batch track metadata lookup
//! - Batch audio-feature lookup
//!
//! # Example
//!
//! ```rust,no_run
//! use tracklift_catalog_client::CatalogClient;
//! use tracklift_shared_config::CatalogConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CatalogConfig::from_env()?;
//! let mut client = CatalogClient::new(&config)?;
//! client.authenticate().await?;
//!
//! if let Some(summary) = client.search_track("Yesterday", "The Beatles").await? {
//!     let tracks = client.lookup_tracks(&[summary.id]).await?;
//!     println!("popularity: {}", tracks[0].popularity);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `CATALOG_CLIENT_ID`: application client ID (required)
//! - `CATALOG_CLIENT_SECRET`: application client secret (required)

mod client;
mod error;
mod models;

pub use client::{CatalogClient, MAX_AUDIO_FEATURES_PER_LOOKUP, MAX_TRACKS_PER_LOOKUP};
pub use error::{CatalogError, CatalogResult};
pub use models::{AudioFeatures, Track, TrackArtist, TrackSummary};
