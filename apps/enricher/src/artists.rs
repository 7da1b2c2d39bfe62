//! Multi-artist string parsing
//!
//! Chart providers credit collaborations in one free-form string
//! ("Artist A & Artist B", "Someone Featuring Someone Else"). Catalog
//! search wants a single artist per query, so the raw credit is split into
//! ordered candidates.

use once_cell::sync::Lazy;
use regex::Regex;

/// Separators chart providers use between co-credited artists.
/// `vs.` matches case-insensitively; `x` only when it stands alone
/// between spaces, so names like "Xscape" survive.
static MULTI_ARTIST_DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+&/]|, |Featuring|With|[Vv]s\.| [Xx] ").unwrap());

/// Split a raw artist credit into individual artist name candidates
///
/// Order follows the input, so the primary listed artist comes first.
/// Fragments that are empty after trimming are dropped; an input with no
/// delimiter yields a single trimmed candidate.
pub fn split_artists(raw: &str) -> Vec<String> {
    MULTI_ARTIST_DELIMITERS
        .split(raw)
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}
