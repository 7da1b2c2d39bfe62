//! Pipeline orchestration
//!
//! Stages run strictly in sequence: chart fetch (cached) → track
//! resolution (cached) → metadata pass → audio-feature pass → CSV write.
//! Any failure except a not-found resolution aborts the remaining stages.

use std::collections::HashSet;

use tracing::info;
use tracklift_catalog_client::CatalogClient;
use tracklift_chart_client::{Chart, ChartClient, ChartEntry};

use crate::cache::with_cache;
use crate::config::Config;
use crate::dataset::write_dataset;
use crate::enrich::{fetch_audio_features, fetch_metadata, record_map};
use crate::error::EnricherResult;
use crate::resolve::resolve_tracks;

/// Fetch every chart and collapse repeated appearances to one entry
///
/// A song charting on several lists (or at several positions over the
/// aggregation window) keeps its first occurrence; order follows
/// [`Chart::ALL`] and within each chart the provider's listing.
async fn fetch_chart_entries(charts: &ChartClient) -> EnricherResult<Vec<ChartEntry>> {
    let mut seen = HashSet::new();
    let mut entries = Vec::new();

    for chart in Chart::ALL {
        for entry in charts.fetch_chart(*chart).await? {
            if seen.insert(entry.dedup_key()) {
                entries.push(entry);
            }
        }
    }

    Ok(entries)
}

/// Run the enrichment pipeline end to end
///
/// All side-effecting work happens here; clients are constructed from the
/// passed configuration and credentials are exchanged once at the start.
pub async fn run(config: &Config) -> EnricherResult<()> {
    let mut catalog = CatalogClient::new(&config.catalog)?;
    catalog.authenticate().await?;
    let charts = ChartClient::new(&config.chart)?;

    info!("fetching songs from charts");
    let entries: Vec<ChartEntry> = with_cache(
        &config.chart_entries_cache(),
        config.use_cache,
        || async { fetch_chart_entries(&charts).await },
    )
    .await?;
    info!(entry_count = entries.len(), "chart entries collected");

    info!("resolving track identifiers");
    let ids: Vec<String> = with_cache(&config.track_ids_cache(), config.use_cache, || async {
        resolve_tracks(&catalog, &entries).await
    })
    .await?;
    info!(
        resolved = ids.len(),
        total = entries.len(),
        "track resolution finished"
    );

    let mut records = record_map(&ids);

    info!("populating tracks with basic metadata");
    fetch_metadata(&catalog, &mut records).await?;

    info!("populating tracks with audio features");
    fetch_audio_features(&catalog, &mut records).await?;

    info!(path = %config.output_path.display(), "writing tracks dataset");
    write_dataset(&config.output_path, &records)?;

    Ok(())
}
