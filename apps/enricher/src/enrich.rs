//! Batched track enrichment
//!
//! Two independent passes populate the record mapping: basic metadata
//! (batches of at most 50, the track-lookup limit) and audio features
//! (batches of at most 100). Both are idempotent and may run in either
//! order; a failed batch call aborts the pass because the dataset writer
//! assumes a uniform schema across records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracklift_catalog_client::{
    AudioFeatures, CatalogClient, Track, MAX_AUDIO_FEATURES_PER_LOOKUP, MAX_TRACKS_PER_LOOKUP,
};

use crate::error::EnricherResult;

/// One dataset row, keyed externally by catalog track identifier
///
/// Field declaration order is the CSV column order. Fields stay `None`
/// until the corresponding enrichment pass fills them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub track: Option<String>,
    pub artist: Option<String>,
    pub popularity: Option<u32>,
    pub danceability: Option<f64>,
    pub energy: Option<f64>,
    pub key: Option<i32>,
    pub loudness: Option<f64>,
    pub mode: Option<i32>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub liveness: Option<f64>,
    pub valence: Option<f64>,
    pub tempo: Option<f64>,
    pub duration_ms: Option<u64>,
    pub time_signature: Option<i32>,
}

impl TrackRecord {
    /// Copy the fixed audio-feature attribute set from a catalog response
    fn apply_features(&mut self, features: &AudioFeatures) {
        self.danceability = Some(features.danceability);
        self.energy = Some(features.energy);
        self.key = Some(features.key);
        self.loudness = Some(features.loudness);
        self.mode = Some(features.mode);
        self.speechiness = Some(features.speechiness);
        self.acousticness = Some(features.acousticness);
        self.instrumentalness = Some(features.instrumentalness);
        self.liveness = Some(features.liveness);
        self.valence = Some(features.valence);
        self.tempo = Some(features.tempo);
        self.duration_ms = Some(features.duration_ms);
        self.time_signature = Some(features.time_signature);
    }
}

/// Build an empty record for every resolved identifier
///
/// Map insertion deduplicates repeated identifiers; iteration order (and
/// so CSV row order) is sorted by identifier.
pub fn record_map(ids: &[String]) -> BTreeMap<String, TrackRecord> {
    ids.iter()
        .map(|id| (id.clone(), TrackRecord::default()))
        .collect()
}

/// Merge a metadata response into the record mapping
///
/// Response items whose identifier is not already a key are ignored, so
/// the mapping never grows past the resolved identifier set.
fn apply_metadata(records: &mut BTreeMap<String, TrackRecord>, tracks: &[Track]) {
    for track in tracks {
        if let Some(record) = records.get_mut(&track.id) {
            record.track = Some(track.name.clone());
            record.artist = Some(track.artist_names().join(","));
            record.popularity = Some(track.popularity);
        }
    }
}

/// Merge an audio-feature response into the record mapping
fn apply_audio_features(records: &mut BTreeMap<String, TrackRecord>, features: &[AudioFeatures]) {
    for item in features {
        if let Some(record) = records.get_mut(&item.id) {
            record.apply_features(item);
        }
    }
}

/// Populate every record with basic metadata (pass 1)
pub async fn fetch_metadata(
    catalog: &CatalogClient,
    records: &mut BTreeMap<String, TrackRecord>,
) -> EnricherResult<()> {
    let ids: Vec<String> = records.keys().cloned().collect();

    for chunk in ids.chunks(MAX_TRACKS_PER_LOOKUP) {
        let tracks = catalog.lookup_tracks(chunk).await?;
        apply_metadata(records, &tracks);
    }

    debug!(record_count = records.len(), "metadata pass finished");
    Ok(())
}

/// Populate every record with audio features (pass 2)
pub async fn fetch_audio_features(
    catalog: &CatalogClient,
    records: &mut BTreeMap<String, TrackRecord>,
) -> EnricherResult<()> {
    let ids: Vec<String> = records.keys().cloned().collect();

    for chunk in ids.chunks(MAX_AUDIO_FEATURES_PER_LOOKUP) {
        let features = catalog.lookup_audio_features(chunk).await?;
        apply_audio_features(records, &features);
    }

    debug!(record_count = records.len(), "audio-feature pass finished");
    Ok(())
}
