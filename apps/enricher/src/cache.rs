//! Disk-backed read-through cache
//!
//! Each pipeline stage's result is memoized in one JSON file so repeated
//! runs skip the expensive network work. The cache is a transparent value
//! store: what comes back from a hit is structurally identical to what the
//! computation would have produced.

use std::future::Future;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::EnricherResult;

/// Run `compute` at most once per cache-file lifetime
///
/// With `use_cache` set and a file present at `path`, the stored value is
/// returned and `compute` never runs; a file that fails to deserialize is
/// an error, not a recompute. Otherwise `compute` runs exactly once and
/// its result is persisted to `path` before being returned. A failed
/// computation or write leaves no file behind.
pub async fn with_cache<T, F, Fut>(path: &Path, use_cache: bool, compute: F) -> EnricherResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = EnricherResult<T>>,
{
    if use_cache && path.exists() {
        debug!(path = %path.display(), "cache hit");
        let contents = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&contents)?);
    }

    debug!(path = %path.display(), "cache miss, computing");
    let value = compute().await?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let encoded = serde_json::to_string(&value)?;
    if let Err(e) = std::fs::write(path, encoded) {
        // an interrupted write must not survive as a corrupt cache file
        let _ = std::fs::remove_file(path);
        return Err(e.into());
    }

    Ok(value)
}
