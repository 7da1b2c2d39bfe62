//! Shared test utilities for the Tracklift workspace
//!
//! This crate provides mock implementations of the external services the
//! pipeline talks to, for testing without network dependencies. The mocks
//! are shared between the client crates' test suites and the enricher's
//! integration tests.
//!
//! # Mock Services
//!
//! - [`MockCatalogServer`] - mock streaming-catalog API (token, search,
//!   batch track and audio-feature lookups)
//! - [`MockChartServer`] - mock chart provider
//!
//! # Example
//!
//! ```rust,ignore
//! use tracklift_test_utils::MockCatalogServer;
//!
//! #[tokio::test]
//! async fn test_with_mock_catalog() {
//!     let catalog = MockCatalogServer::start().await;
//!     catalog.mock_token_success().await;
//!     catalog.mock_search_empty().await;
//!
//!     // Configure your client with catalog.api_url() and catalog.token_url()
//! }
//! ```

mod catalog;
mod chart;

pub use catalog::{audio_features_fixture, track_fixture, MockCatalogServer, TEST_TOKEN};
pub use chart::MockChartServer;
