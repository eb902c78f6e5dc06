use crate::RowRecord;

/// Rows whose title, artist or album contains `query`, ignoring case.
///
/// Order is preserved and an empty query keeps every row.
pub fn filter_rows(rows: &[RowRecord], query: &str) -> Vec<RowRecord> {
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| matches_query(row, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
pub fn matches_query(row: &RowRecord, needle: &str) -> bool {
    needle.is_empty()
        || [row.track_name(), row.artist_names(), row.album_name()]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}
