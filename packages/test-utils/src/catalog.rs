//! Mock streaming-catalog server for testing search and enrichment
//!
//! Provides a [`MockCatalogServer`] that simulates the catalog Web API
//! (token endpoint, track search, batch lookups) for testing resolution
//! and enrichment without a real catalog account.

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bearer token issued by [`MockCatalogServer::mock_token_success`]
pub const TEST_TOKEN: &str = "test-token";

/// Mock catalog server for testing catalog client calls
///
/// Data-endpoint mocks require the `Bearer test-token` authorization
/// header, so a client that skips authentication will not match them.
///
/// # Example
///
/// ```rust,ignore
/// use tracklift_test_utils::{track_fixture, MockCatalogServer};
///
/// #[tokio::test]
/// async fn test_lookup() {
///     let server = MockCatalogServer::start().await;
///     server.mock_token_success().await;
///     server
///         .mock_tracks(vec![track_fixture("abc123", "Test Song", &["Artist A"], 50)])
///         .await;
///
///     // Configure your client with server.api_url() and server.token_url()
/// }
/// ```
pub struct MockCatalogServer {
    server: MockServer,
}

impl MockCatalogServer {
    /// Start a new mock catalog server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get the Web API base URL
    pub fn api_url(&self) -> String {
        format!("{}/v1", self.server.uri())
    }

    /// Get the token endpoint URL
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.server.uri())
    }

    /// Access the underlying mock server for custom mounts
    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mount a mock for a successful client-credentials token grant
    pub async fn mock_token_success(&self) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TEST_TOKEN,
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for a rejected token grant
    pub async fn mock_token_failure(&self, status_code: u16) {
        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": "invalid_client"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a search mock matching one exact title/artist query
    ///
    /// The query must equal `track:{title} artist:{artist}` exactly, i.e.
    /// the already-sanitized form the client sends.
    pub async fn mock_search_result(&self, title: &str, artist: &str, id: &str, name: &str) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", format!("track:{} artist:{}", title, artist)))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [ { "id": id, "name": name } ] }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a catch-all search mock returning zero results
    ///
    /// Lower priority than [`Self::mock_search_result`] mounts, so
    /// specific queries still hit their mocks.
    pub async fn mock_search_empty(&self) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": { "items": [] }
            })))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the batch track lookup endpoint
    pub async fn mock_tracks(&self, tracks: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/v1/tracks"))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tracks": tracks })))
            .mount(&self.server)
            .await;
    }

    /// Mount a failing batch track lookup
    pub async fn mock_tracks_failure(&self, status_code: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path("/v1/tracks"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": { "status": status_code, "message": message }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a mock for the batch audio-feature lookup endpoint
    pub async fn mock_audio_features(&self, features: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/v1/audio-features"))
            .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "audio_features": features })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a failing batch audio-feature lookup
    pub async fn mock_audio_features_failure(&self, status_code: u16, message: &str) {
        Mock::given(method("GET"))
            .and(path("/v1/audio-features"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": { "status": status_code, "message": message }
            })))
            .mount(&self.server)
            .await;
    }
}

/// Build a batch-lookup track response object
pub fn track_fixture(id: &str, name: &str, artists: &[&str], popularity: u32) -> Value {
    let artists_json: Vec<Value> = artists.iter().map(|a| json!({ "name": a })).collect();
    json!({
        "id": id,
        "name": name,
        "artists": artists_json,
        "popularity": popularity
    })
}

/// Build an audio-feature response object with a distinguishing danceability
pub fn audio_features_fixture(id: &str, danceability: f64) -> Value {
    json!({
        "id": id,
        "danceability": danceability,
        "energy": 0.8,
        "key": 5,
        "loudness": -6.5,
        "mode": 1,
        "speechiness": 0.04,
        "acousticness": 0.12,
        "instrumentalness": 0.0,
        "liveness": 0.1,
        "valence": 0.6,
        "tempo": 120.0,
        "duration_ms": 210000u64,
        "time_signature": 4
    })
}
