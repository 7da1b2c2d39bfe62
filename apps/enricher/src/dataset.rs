//! CSV dataset writer

use std::collections::BTreeMap;
use std::path::Path;

use tracing::info;

use crate::enrich::TrackRecord;
use crate::error::{EnricherError, EnricherResult};

/// Write the enriched records as a CSV dataset
///
/// The header row carries [`TrackRecord`]'s field names in declaration
/// order; the map key (the track identifier) is not emitted. An empty
/// mapping is an error reported before any file is created, since there
/// is no schema to infer from zero rows.
pub fn write_dataset(path: &Path, records: &BTreeMap<String, TrackRecord>) -> EnricherResult<()> {
    if records.is_empty() {
        return Err(EnricherError::EmptyDataset);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    for record in records.values() {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(
        path = %path.display(),
        rows = records.len(),
        "wrote tracks dataset"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(popularity: u32) -> TrackRecord {
        TrackRecord {
            track: Some("Song".to_string()),
            artist: Some("Artist".to_string()),
            popularity: Some(popularity),
            danceability: Some(0.5),
            energy: Some(0.8),
            key: Some(5),
            loudness: Some(-6.5),
            mode: Some(1),
            speechiness: Some(0.04),
            acousticness: Some(0.12),
            instrumentalness: Some(0.0),
            liveness: Some(0.1),
            valence: Some(0.6),
            tempo: Some(120.0),
            duration_ms: Some(210_000),
            time_signature: Some(4),
        }
    }

    #[test]
    fn test_header_plus_one_row_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.csv");

        let records: BTreeMap<String, TrackRecord> = [
            ("a".to_string(), record(1)),
            ("b".to_string(), record(2)),
            ("c".to_string(), record(3)),
        ]
        .into_iter()
        .collect();

        write_dataset(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_header_matches_field_declaration_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.csv");

        let records: BTreeMap<String, TrackRecord> =
            [("a".to_string(), record(1))].into_iter().collect();

        write_dataset(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "track,artist,popularity,danceability,energy,key,loudness,mode,\
             speechiness,acousticness,instrumentalness,liveness,valence,tempo,\
             duration_ms,time_signature"
        );
    }

    #[test]
    fn test_identifier_key_is_not_a_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.csv");

        let records: BTreeMap<String, TrackRecord> =
            [("abc123".to_string(), record(1))].into_iter().collect();

        write_dataset(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("abc123"));
    }

    #[test]
    fn test_empty_mapping_fails_without_creating_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.csv");

        let result = write_dataset(&path, &BTreeMap::new());

        assert!(matches!(result, Err(EnricherError::EmptyDataset)));
        assert!(!path.exists());
    }
}
