use playlist_core::{
    build_card, columns, format_duration, track_id, Enrichment, RowRecord,
    PLACEHOLDER_ARTWORK_URL,
};
use pretty_assertions::assert_eq;

fn row(release: &str) -> RowRecord {
    RowRecord::from_iter([
        (columns::TRACK_URI, "spotify:track:4uLU6hMCjMI75M1A2tKUQC"),
        (columns::TRACK_NAME, "Never Gonna Give You Up"),
        (columns::ARTIST_NAMES, "Rick Astley"),
        (columns::ALBUM_NAME, "Whenever You Need Somebody"),
        (columns::RELEASE_DATE, release),
        (columns::DURATION_MS, "213573"),
    ])
}

#[test]
fn duration_wraps_at_the_hour() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(61_000), "1:01");
    assert_eq!(format_duration(3_599_000), "59:59");
    assert_eq!(format_duration(3_600_000), "0:00");
    assert_eq!(format_duration(999), "0:00");
}

#[test]
fn track_id_is_the_trailing_segment() {
    assert_eq!(track_id("spotify:track:abc"), "abc");
    assert_eq!(track_id("abc"), "abc");
    assert_eq!(track_id(""), "");
}

#[test]
fn card_without_enrichment_uses_placeholder() {
    let card = build_card(&row("1987-11-12"), None);

    assert_eq!(card.artwork_url, PLACEHOLDER_ARTWORK_URL);
    assert_eq!(card.artwork_alt, "Never Gonna Give You Up");
    assert_eq!(card.title, "Never Gonna Give You Up");
    assert_eq!(card.artist_line, "Artist: Rick Astley");
    assert_eq!(card.album_line, "Album: Whenever You Need Somebody");
    assert_eq!(card.release_line.as_deref(), Some("Released: 1987-11-12"));
    assert_eq!(card.duration_line, "Duration: 3:33");
    assert_eq!(card.popularity_line, None);
    assert_eq!(
        card.embed_url,
        "https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn card_with_enrichment_shows_artwork_and_popularity() {
    let enrichment = Enrichment {
        artwork_url: Some("https://i.scdn.co/image/300".to_string()),
        popularity: Some(77),
    };
    let card = build_card(&row(""), Some(&enrichment));

    assert_eq!(card.artwork_url, "https://i.scdn.co/image/300");
    assert_eq!(card.popularity_line.as_deref(), Some("Popularity: 77"));
    assert_eq!(card.release_line, None);
}

#[test]
fn partial_enrichment_falls_back_per_field() {
    let enrichment = Enrichment {
        artwork_url: None,
        popularity: Some(0),
    };
    let card = build_card(&row(""), Some(&enrichment));

    assert_eq!(card.artwork_url, PLACEHOLDER_ARTWORK_URL);
    assert_eq!(card.popularity_line.as_deref(), Some("Popularity: 0"));
}
