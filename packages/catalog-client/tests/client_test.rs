//! Integration tests for the catalog client
//!
//! Exercises the token flow, search, batch lookups, error mapping and
//! retry behavior against a wiremock catalog.

use serde_json::json;
use tracklift_catalog_client::{CatalogClient, CatalogError};
use tracklift_shared_config::CatalogConfig;
use tracklift_test_utils::{audio_features_fixture, track_fixture, MockCatalogServer, TEST_TOKEN};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn config_for(server: &MockCatalogServer) -> CatalogConfig {
    CatalogConfig::new(
        server.api_url(),
        server.token_url(),
        "test-client-id",
        "test-client-secret",
    )
}

async fn authed_client(server: &MockCatalogServer) -> CatalogClient {
    server.mock_token_success().await;
    let mut client = CatalogClient::new(&config_for(server)).unwrap();
    client.authenticate().await.unwrap();
    client
}

#[tokio::test]
async fn test_search_returns_top_result() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;

    server
        .mock_search_result("Test Song", "Artist A", "abc123", "Test Song")
        .await;

    let summary = client.search_track("Test Song", "Artist A").await.unwrap();

    let summary = summary.expect("expected a search hit");
    assert_eq!(summary.id, "abc123");
    assert_eq!(summary.name, "Test Song");
}

#[tokio::test]
async fn test_search_returns_none_on_zero_results() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;
    server.mock_search_empty().await;

    let summary = client.search_track("Unknown", "Nobody").await.unwrap();

    assert!(summary.is_none());
}

#[tokio::test]
async fn test_rejected_credentials_fail_authentication() {
    let server = MockCatalogServer::start().await;
    server.mock_token_failure(401).await;

    let mut client = CatalogClient::new(&config_for(&server)).unwrap();
    let result = client.authenticate().await;

    assert!(matches!(result, Err(CatalogError::AuthFailed(_))));
}

#[tokio::test]
async fn test_lookup_tracks_drops_null_entries() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;

    server
        .mock_tracks(vec![
            track_fixture("abc123", "Test Song", &["Artist A"], 50),
            json!(null),
        ])
        .await;

    let tracks = client
        .lookup_tracks(&["abc123".to_string(), "gone".to_string()])
        .await
        .unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "abc123");
    assert_eq!(tracks[0].popularity, 50);
}

#[tokio::test]
async fn test_lookup_tracks_rejects_oversized_batches() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;

    let ids: Vec<String> = (0..51).map(|i| format!("id{}", i)).collect();
    let result = client.lookup_tracks(&ids).await;

    assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
}

#[tokio::test]
async fn test_lookup_audio_features_drops_null_entries() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;

    server
        .mock_audio_features(vec![audio_features_fixture("abc123", 0.5), json!(null)])
        .await;

    let features = client
        .lookup_audio_features(&["abc123".to_string(), "gone".to_string()])
        .await
        .unwrap();

    assert_eq!(features.len(), 1);
    assert_eq!(features[0].id, "abc123");
    assert!((features[0].danceability - 0.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_api_error_body_is_surfaced() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;
    server.mock_tracks_failure(403, "insufficient scope").await;

    let result = client.lookup_tracks(&["abc123".to_string()]).await;

    match result {
        Err(CatalogError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert_eq!(message, "insufficient scope");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_transient_server_errors_are_retried() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;

    // first call fails with a 500, the retry hits the success mock
    Mock::given(method("GET"))
        .and(path("/v1/tracks"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .up_to_n_times(1)
        .mount(server.server())
        .await;
    server
        .mock_tracks(vec![track_fixture("abc123", "Test Song", &["Artist A"], 50)])
        .await;

    let tracks = client.lookup_tracks(&["abc123".to_string()]).await.unwrap();

    assert_eq!(tracks.len(), 1);
}

#[tokio::test]
async fn test_client_errors_are_not_retried() {
    let server = MockCatalogServer::start().await;
    let client = authed_client(&server).await;

    // expect(1) verifies on drop that no retry was attempted
    Mock::given(method("GET"))
        .and(path("/v1/tracks"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "status": 404, "message": "invalid id" }
        })))
        .expect(1)
        .mount(server.server())
        .await;

    let result = client.lookup_tracks(&["nope".to_string()]).await;

    assert!(matches!(result, Err(CatalogError::Api { status: 404, .. })));
}
