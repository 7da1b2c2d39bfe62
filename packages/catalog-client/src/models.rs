//! Catalog API response models

use serde::{Deserialize, Serialize};

/// A track summary returned by the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackSummary {
    /// Catalog track identifier
    pub id: String,
    /// Track name
    pub name: String,
}

/// Full track metadata from the batch lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Catalog track identifier
    pub id: String,
    /// Track name
    pub name: String,
    /// Artists credited on the track
    pub artists: Vec<TrackArtist>,
    /// Popularity score (0 - 100)
    pub popularity: u32,
}

impl Track {
    /// Display names of all credited artists, in catalog order
    pub fn artist_names(&self) -> Vec<&str> {
        self.artists.iter().map(|a| a.name.as_str()).collect()
    }
}

/// An artist credited on a track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    /// Artist display name
    pub name: String,
}

/// Catalog-computed audio features for one track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Catalog track identifier
    pub id: String,
    pub danceability: f64,
    pub energy: f64,
    pub key: i32,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub duration_ms: u64,
    pub time_signature: i32,
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub tracks: SearchTracksPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchTracksPage {
    pub items: Vec<TrackSummary>,
}

/// Batch track lookup response; unknown identifiers come back as `null`
#[derive(Debug, Deserialize)]
pub(crate) struct TracksResponse {
    pub tracks: Vec<Option<Track>>,
}

/// Batch audio-feature response; unknown identifiers come back as `null`
#[derive(Debug, Deserialize)]
pub(crate) struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

/// Client-credentials token response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[allow(dead_code)] // present in every token response, not used in code
    pub token_type: String,
    #[allow(dead_code)] // token outlives a single pipeline run, expiry unused
    pub expires_in: u64,
}

/// Catalog API error response body
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}
