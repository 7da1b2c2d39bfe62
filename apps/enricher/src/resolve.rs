//! Chart entry to catalog track resolution
//!
//! One chart entry may credit several artists under one string; each
//! parsed candidate is tried against catalog search in order until one
//! matches. Entries with no match resolve to nothing and are dropped by
//! the batch form; the record mapping downstream only ever sees resolved
//! identifiers.

use tracing::debug;
use tracklift_catalog_client::CatalogClient;
use tracklift_chart_client::ChartEntry;

use crate::artists::split_artists;
use crate::error::EnricherResult;
use crate::search::search_params;

/// Resolve one chart entry to a catalog track identifier
///
/// Candidate order is significant: the first-listed artist is most often
/// the one the catalog credits, so earlier candidates take precedence.
/// Exactly one search request is issued per candidate tried. Exhausting
/// all candidates is not an error; network failures are.
pub async fn resolve_track(
    catalog: &CatalogClient,
    entry: &ChartEntry,
) -> EnricherResult<Option<String>> {
    for candidate in split_artists(&entry.artist) {
        let (title, artist) = search_params(&entry.title, &candidate);

        if let Some(summary) = catalog.search_track(&title, &artist).await? {
            return Ok(Some(summary.id));
        }

        debug!(
            title = %entry.title,
            candidate = %candidate,
            "no catalog match for artist candidate"
        );
    }

    debug!(
        title = %entry.title,
        artist = %entry.artist,
        "chart entry not found in catalog"
    );
    Ok(None)
}

/// Resolve a batch of chart entries, dropping those with no match
///
/// Successful resolutions keep input order.
pub async fn resolve_tracks(
    catalog: &CatalogClient,
    entries: &[ChartEntry],
) -> EnricherResult<Vec<String>> {
    let mut ids = Vec::new();

    for entry in entries {
        if let Some(id) = resolve_track(catalog, entry).await? {
            ids.push(id);
        }
    }

    debug!(
        resolved = ids.len(),
        total = entries.len(),
        "batch resolution finished"
    );
    Ok(ids)
}
