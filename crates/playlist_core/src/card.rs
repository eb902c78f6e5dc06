use crate::{format_duration, RowRecord};

/// Artwork shown when the remote service supplied none.
pub const PLACEHOLDER_ARTWORK_URL: &str = "https://via.placeholder.com/64?text=No+Art";
pub const EMBED_BASE_URL: &str = "https://open.spotify.com/embed/track/";

/// Per-track metadata fetched from the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Enrichment {
    pub artwork_url: Option<String>,
    pub popularity: Option<u32>,
}

/// Presentation-neutral description of one track card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub artwork_url: String,
    pub artwork_alt: String,
    pub title: String,
    pub artist_line: String,
    pub album_line: String,
    pub release_line: Option<String>,
    pub duration_line: String,
    pub popularity_line: Option<String>,
    pub embed_url: String,
}

/// Trailing segment of a track reference, e.g. the id in `spotify:track:<id>`.
pub fn track_id(track_uri: &str) -> &str {
    track_uri.rsplit(':').next().unwrap_or(track_uri)
}

pub fn embed_url(track_uri: &str) -> String {
    format!("{EMBED_BASE_URL}{}", track_id(track_uri))
}

pub fn build_card(row: &RowRecord, enrichment: Option<&Enrichment>) -> CardView {
    let artwork_url = enrichment
        .and_then(|data| data.artwork_url.clone())
        .unwrap_or_else(|| PLACEHOLDER_ARTWORK_URL.to_string());
    let release_line = match row.release_date() {
        "" => None,
        date => Some(format!("Released: {date}")),
    };
    let popularity_line = enrichment
        .and_then(|data| data.popularity)
        .map(|popularity| format!("Popularity: {popularity}"));

    CardView {
        artwork_url,
        artwork_alt: row.track_name().to_string(),
        title: row.track_name().to_string(),
        artist_line: format!("Artist: {}", row.artist_names()),
        album_line: format!("Album: {}", row.album_name()),
        release_line,
        duration_line: format!("Duration: {}", format_duration(row.duration_ms())),
        popularity_line,
        embed_url: embed_url(row.track_uri()),
    }
}
