//! Search parameter preparation
//!
//! Turns a chart title and one artist candidate into a catalog-search-safe
//! query pair: a static override table corrects titles whose charted
//! artist never matches the catalog, and apostrophes are stripped because
//! the catalog search endpoint fails to match strings containing them.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Title/artist edge cases that don't turn up in catalog searches as
/// charted, but are clearly in the catalog. Keyed by exact chart title;
/// the value replaces the artist candidate. Extend this table for new
/// mismatches; resolution logic never needs to change.
static ARTIST_OVERRIDES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // The chart and the catalog list different artists.
        ("Me Vale Perderte", "Banda Rancho"),
        // The charted artist turns up nothing for these tracks; the
        // co-credited artist does.
        ("Freedom of Speech", "Dreamville"),
        ("Stick", "Dreamville"),
        // Charted as "Silk Sonic (Bruno Mars & Anderson .Paak)".
        ("Leave The Door Open", "Silk Sonic"),
    ])
});

/// Build the cleaned (title, artist) pair for a catalog search
///
/// The override lookup happens before sanitization so table values are
/// sanitized the same way as chart-sourced artists. Pure function.
pub fn search_params(title: &str, artist: &str) -> (String, String) {
    let artist = ARTIST_OVERRIDES.get(title).copied().unwrap_or(artist);
    (sanitize(title), sanitize(artist))
}

/// Replace apostrophes with spaces; the catalog search endpoint fails to
/// match titles and artists containing them.
fn sanitize(text: &str) -> String {
    text.replace('\'', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_replaces_artist() {
        let (title, artist) = search_params("Leave The Door Open", "Silk Sonic (Bruno Mars");
        assert_eq!(title, "Leave The Door Open");
        assert_eq!(artist, "Silk Sonic");
    }

    #[test]
    fn test_non_override_title_keeps_artist() {
        let (title, artist) = search_params("Some Song", "Some Artist");
        assert_eq!(title, "Some Song");
        assert_eq!(artist, "Some Artist");
    }

    #[test]
    fn test_apostrophes_become_spaces() {
        let (title, artist) = search_params("Don't Stop Believin'", "Guns N' Roses");
        assert_eq!(title, "Don t Stop Believin ");
        assert_eq!(artist, "Guns N  Roses");
    }

    #[test]
    fn test_override_value_is_sanitized() {
        // Overrides pass through the same sanitization as chart artists
        for (&title, &replacement) in ARTIST_OVERRIDES.iter() {
            let (_, artist) = search_params(title, "ignored");
            assert_eq!(artist, sanitize(replacement));
        }
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let once = sanitize("Don't'");
        let twice = sanitize(&once);
        assert_eq!(once, twice);
        assert!(!twice.contains('\''));
    }
}
