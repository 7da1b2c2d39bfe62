//! Chart provider models

use serde::{Deserialize, Serialize};

/// One title/artist pair from a song chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Song title as listed on the chart
    pub title: String,
    /// Raw artist credit, possibly naming several artists
    pub artist: String,
}

impl ChartEntry {
    /// Printable key used to collapse repeated chart appearances
    pub fn dedup_key(&self) -> String {
        format!("{} by {}", self.title, self.artist)
    }
}

/// Song charts published by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    Hot100,
    RapSongs,
    PopSongs,
    CountrySongs,
    RockSong,
    AlternativeSongs,
    DanceElectronicSongs,
    LatinSongs,
    ChristianSongs,
    JazzSongs,
    HolidaySongs,
    GospelSongs,
    Global,
    Dance,
    SummerSongs,
    Bubbling,
    Hot,
    Gospel,
    Rhythmic,
}

impl Chart {
    /// Every chart the pipeline aggregates, in fetch order
    pub const ALL: &'static [Chart] = &[
        Chart::Hot100,
        Chart::RapSongs,
        Chart::PopSongs,
        Chart::CountrySongs,
        Chart::RockSong,
        Chart::AlternativeSongs,
        Chart::DanceElectronicSongs,
        Chart::LatinSongs,
        Chart::ChristianSongs,
        Chart::JazzSongs,
        Chart::HolidaySongs,
        Chart::GospelSongs,
        Chart::Global,
        Chart::Dance,
        Chart::SummerSongs,
        Chart::Bubbling,
        Chart::Hot,
        Chart::Gospel,
        Chart::Rhythmic,
    ];

    /// URL slug of the chart as published by the provider
    pub fn slug(&self) -> &'static str {
        match self {
            Chart::Hot100 => "hot-100",
            Chart::RapSongs => "rap-songs",
            Chart::PopSongs => "pop-songs",
            Chart::CountrySongs => "country-songs",
            Chart::RockSong => "rock-song",
            Chart::AlternativeSongs => "alternative-songs",
            Chart::DanceElectronicSongs => "dance-electronic-songs",
            Chart::LatinSongs => "latin-songs",
            Chart::ChristianSongs => "christian-songs",
            Chart::JazzSongs => "jazz-songs",
            Chart::HolidaySongs => "holiday-songs",
            Chart::GospelSongs => "gospel-songs",
            Chart::Global => "global",
            Chart::Dance => "dance",
            Chart::SummerSongs => "summer-songs",
            Chart::Bubbling => "bubbling",
            Chart::Hot => "hot",
            Chart::Gospel => "gospel",
            Chart::Rhythmic => "rhythmic",
        }
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    pub entries: Vec<ChartEntry>,
}
