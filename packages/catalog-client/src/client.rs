//! Catalog Web API client implementation

use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use tracklift_shared_config::CatalogConfig;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    ApiErrorResponse, AudioFeaturesResponse, SearchResponse, TokenResponse, TracksResponse,
};
use crate::models::{AudioFeatures, Track, TrackSummary};

/// Maximum identifiers per batch track lookup (endpoint limit)
pub const MAX_TRACKS_PER_LOOKUP: usize = 50;

/// Maximum identifiers per batch audio-feature lookup (endpoint limit)
pub const MAX_AUDIO_FEATURES_PER_LOOKUP: usize = 100;

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Maximum length of a search query field
const MAX_QUERY_FIELD_LENGTH: usize = 256;

/// Default number of retry attempts for transient failures
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds)
const RETRY_BASE_DELAY_MS: u64 = 100;

/// Maximum error body size carried into error messages
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// Catalog Web API client
///
/// Data calls require a bearer token obtained via [`CatalogClient::authenticate`].
#[derive(Clone)]
pub struct CatalogClient {
    http_client: Client,
    config: CatalogConfig,
    token: Option<String>,
    max_retries: u32,
}

impl fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogClient")
            .field("api_url", &self.config.api_url)
            .field("client_id", &self.config.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

impl CatalogClient {
    /// Create a new catalog client from configuration
    ///
    /// # Errors
    /// Returns `CatalogError::MissingCredentials` if the client ID or
    /// secret is empty
    pub fn new(config: &CatalogConfig) -> CatalogResult<Self> {
        if config.client_id.is_empty() || config.client_secret.is_empty() {
            return Err(CatalogError::MissingCredentials);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent("Tracklift/1.0")
            .build()?;

        Ok(Self {
            http_client,
            config: config.clone(),
            token: None,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set retry configuration
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exchange the client credentials for a bearer token
    ///
    /// Performs the client-credentials grant against the configured token
    /// endpoint and stores the resulting token for subsequent data calls.
    ///
    /// # Errors
    /// - `CatalogError::AuthFailed` if the token endpoint rejects the request
    /// - `CatalogError::Http` / `CatalogError::Timeout` on transport failures
    pub async fn authenticate(&mut self) -> CatalogResult<()> {
        debug!("requesting client-credentials token");

        let response = self
            .http_client
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else {
                    CatalogError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::AuthFailed(format!(
                "token endpoint returned {}: {}",
                status.as_u16(),
                truncate_body(&body)
            )));
        }

        let text = response.text().await.map_err(CatalogError::Http)?;
        let token: TokenResponse = serde_json::from_str(&text)?;
        self.token = Some(token.access_token);

        debug!("catalog authentication succeeded");
        Ok(())
    }

    /// Validate a search query field
    fn validate_field<'a>(name: &str, value: &'a str) -> CatalogResult<&'a str> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidInput(format!(
                "{} cannot be empty",
                name
            )));
        }
        if trimmed.len() > MAX_QUERY_FIELD_LENGTH {
            return Err(CatalogError::InvalidInput(format!(
                "{} too long (max {} characters)",
                name, MAX_QUERY_FIELD_LENGTH
            )));
        }
        Ok(trimmed)
    }

    /// Validate a batch identifier list against an endpoint limit
    fn validate_batch(endpoint: &str, len: usize, max: usize) -> CatalogResult<()> {
        if len == 0 {
            return Err(CatalogError::InvalidInput(format!(
                "{} lookup requires at least one identifier",
                endpoint
            )));
        }
        if len > max {
            return Err(CatalogError::InvalidInput(format!(
                "{} lookup accepts at most {} identifiers, got {}",
                endpoint, max, len
            )));
        }
        Ok(())
    }

    /// Execute an operation with retry logic for transient failures
    async fn with_retry<T, F, Fut>(&self, operation: F) -> CatalogResult<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = CatalogResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay_ms = RETRY_BASE_DELAY_MS * 2u64.pow(attempt);
                    warn!(
                        attempt = attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "catalog request failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Make an authenticated GET request and deserialize the response
    async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> CatalogResult<T> {
        let token = self.token.as_deref().ok_or(CatalogError::NotAuthenticated)?;

        let response = self
            .http_client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else {
                    CatalogError::Http(e)
                }
            })?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            warn!("catalog API rate limited");
            return Err(CatalogError::RateLimited);
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(parse_api_error(status.as_u16(), &body));
        }

        let text = response.text().await.map_err(CatalogError::Http)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Search the catalog for a track by title and artist
    ///
    /// Issues a single structured search combining a title filter and an
    /// artist filter, requesting at most one top result.
    ///
    /// # Errors
    /// - `CatalogError::InvalidInput` if a field is empty or too long
    /// - `CatalogError::NotAuthenticated` before `authenticate()`
    /// - `CatalogError::Api` / `CatalogError::Http` on call failures
    #[instrument(skip(self))]
    pub async fn search_track(
        &self,
        title: &str,
        artist: &str,
    ) -> CatalogResult<Option<TrackSummary>> {
        let title = Self::validate_field("title", title)?;
        let artist = Self::validate_field("artist", artist)?;
        let query = format!("track:{} artist:{}", title, artist);
        let url = self.config.endpoint("search");

        let response: SearchResponse = self
            .with_retry(|| async {
                self.request(
                    &url,
                    &[("q", query.as_str()), ("type", "track"), ("limit", "1")],
                )
                .await
            })
            .await?;

        let summary = response.tracks.items.into_iter().next();
        debug!(
            title = %title,
            artist = %artist,
            found = summary.is_some(),
            "catalog search completed"
        );
        Ok(summary)
    }

    /// Look up full metadata for a batch of track identifiers
    ///
    /// Accepts between 1 and [`MAX_TRACKS_PER_LOOKUP`] identifiers.
    /// Identifiers unknown to the catalog are dropped from the result.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn lookup_tracks(&self, ids: &[String]) -> CatalogResult<Vec<Track>> {
        Self::validate_batch("track", ids.len(), MAX_TRACKS_PER_LOOKUP)?;
        let joined = ids.join(",");
        let url = self.config.endpoint("tracks");

        let response: TracksResponse = self
            .with_retry(|| async { self.request(&url, &[("ids", joined.as_str())]).await })
            .await?;

        let tracks: Vec<Track> = response.tracks.into_iter().flatten().collect();
        debug!(
            requested = ids.len(),
            returned = tracks.len(),
            "track metadata lookup completed"
        );
        Ok(tracks)
    }

    /// Look up audio features for a batch of track identifiers
    ///
    /// Accepts between 1 and [`MAX_AUDIO_FEATURES_PER_LOOKUP`] identifiers.
    /// Identifiers unknown to the catalog are dropped from the result.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn lookup_audio_features(&self, ids: &[String]) -> CatalogResult<Vec<AudioFeatures>> {
        Self::validate_batch("audio-feature", ids.len(), MAX_AUDIO_FEATURES_PER_LOOKUP)?;
        let joined = ids.join(",");
        let url = self.config.endpoint("audio-features");

        let response: AudioFeaturesResponse = self
            .with_retry(|| async { self.request(&url, &[("ids", joined.as_str())]).await })
            .await?;

        let features: Vec<AudioFeatures> = response.audio_features.into_iter().flatten().collect();
        debug!(
            requested = ids.len(),
            returned = features.len(),
            "audio-feature lookup completed"
        );
        Ok(features)
    }
}

/// Interpret a non-success response body as a catalog API error
fn parse_api_error(status: u16, body: &str) -> CatalogError {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        return CatalogError::Api {
            status: parsed.error.status,
            message: parsed.error.message,
        };
    }
    CatalogError::Api {
        status,
        message: truncate_body(body),
    }
}

/// Bound an error body so oversized responses don't balloon error messages
fn truncate_body(body: &str) -> String {
    if body.len() > MAX_ERROR_BODY_SIZE {
        let mut end = MAX_ERROR_BODY_SIZE;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> CatalogConfig {
        CatalogConfig::new(
            "http://localhost:9000/v1",
            "http://localhost:9000/api/token",
            "test-client-id",
            "test-client-secret",
        )
    }

    #[test]
    fn test_client_requires_credentials() {
        let config = CatalogConfig::new("http://api", "http://token", "", "secret");
        assert!(matches!(
            CatalogClient::new(&config),
            Err(CatalogError::MissingCredentials)
        ));

        let config = CatalogConfig::new("http://api", "http://token", "id", "");
        assert!(matches!(
            CatalogClient::new(&config),
            Err(CatalogError::MissingCredentials)
        ));
    }

    #[test]
    fn test_client_accepts_credentials() {
        assert!(CatalogClient::new(&test_config()).is_ok());
    }

    #[test]
    fn test_client_debug_redacts_secret() {
        let client = CatalogClient::new(&test_config()).unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("test-client-secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_validate_field_empty() {
        let result = CatalogClient::validate_field("title", "   ");
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_field_too_long() {
        let long = "a".repeat(MAX_QUERY_FIELD_LENGTH + 1);
        let result = CatalogClient::validate_field("title", &long);
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_field_trims() {
        let result = CatalogClient::validate_field("artist", "  Radiohead  ");
        assert!(matches!(result, Ok("Radiohead")));
    }

    #[test]
    fn test_validate_batch_limits() {
        assert!(CatalogClient::validate_batch("track", 0, 50).is_err());
        assert!(CatalogClient::validate_batch("track", 1, 50).is_ok());
        assert!(CatalogClient::validate_batch("track", 50, 50).is_ok());
        assert!(CatalogClient::validate_batch("track", 51, 50).is_err());
    }

    #[tokio::test]
    async fn test_data_call_requires_authentication() {
        let client = CatalogClient::new(&test_config()).unwrap();
        let result = client.search_track("Yesterday", "The Beatles").await;
        assert!(matches!(result, Err(CatalogError::NotAuthenticated)));
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(CatalogError::Timeout.is_retryable());
        assert!(CatalogError::RateLimited.is_retryable());
        assert!(CatalogError::Api {
            status: 503,
            message: "unavailable".to_string()
        }
        .is_retryable());
        assert!(!CatalogError::Api {
            status: 404,
            message: "not found".to_string()
        }
        .is_retryable());
        assert!(!CatalogError::MissingCredentials.is_retryable());
        assert!(!CatalogError::NotAuthenticated.is_retryable());
    }

    #[test]
    fn test_parse_api_error_structured() {
        let body = r#"{"error": {"status": 404, "message": "invalid id"}}"#;
        match parse_api_error(404, body) {
            CatalogError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "invalid id");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_api_error_unstructured() {
        match parse_api_error(502, "bad gateway") {
            CatalogError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_truncate_body_bounds_length() {
        let long = "x".repeat(MAX_ERROR_BODY_SIZE * 2);
        let truncated = truncate_body(&long);
        assert!(truncated.len() <= MAX_ERROR_BODY_SIZE + 3);
        assert!(truncated.ends_with("..."));
    }
}
