use std::collections::BTreeMap;

/// Column headers of a playlist export that the player reads.
pub mod columns {
    pub const TRACK_URI: &str = "Track URI";
    pub const TRACK_NAME: &str = "Track Name";
    pub const ARTIST_NAMES: &str = "Artist Name(s)";
    pub const ALBUM_NAME: &str = "Album Name";
    pub const RELEASE_DATE: &str = "Release Date";
    pub const DURATION_MS: &str = "Duration (ms)";
}

/// One CSV data line keyed by the header's column names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowRecord {
    fields: BTreeMap<String, String>,
}

impl RowRecord {
    /// Pairs header names with cells; cells past the header are dropped and
    /// missing trailing cells become empty strings.
    pub fn from_cells(columns: &[String], cells: Vec<String>) -> Self {
        let mut cells = cells.into_iter();
        let fields = columns
            .iter()
            .map(|column| (column.clone(), cells.next().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Value for `column`, or `""` when the column is unknown.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn track_uri(&self) -> &str {
        self.get(columns::TRACK_URI)
    }

    pub fn track_name(&self) -> &str {
        self.get(columns::TRACK_NAME)
    }

    pub fn artist_names(&self) -> &str {
        self.get(columns::ARTIST_NAMES)
    }

    pub fn album_name(&self) -> &str {
        self.get(columns::ALBUM_NAME)
    }

    pub fn release_date(&self) -> &str {
        self.get(columns::RELEASE_DATE)
    }

    /// Leading integer of the duration column.
    ///
    /// No leading digits (including a negative sign) reads as 0; a digit run
    /// too large for `u64` saturates.
    pub fn duration_ms(&self) -> u64 {
        let raw = self.get(columns::DURATION_MS).trim_start();
        let raw = raw.strip_prefix('+').unwrap_or(raw);
        let digits_end = raw
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_digit())
            .map_or(raw.len(), |(idx, _)| idx);
        let digits = &raw[..digits_end];
        if digits.is_empty() {
            return 0;
        }
        digits.parse().unwrap_or(u64::MAX)
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_duration(raw: &str) -> RowRecord {
        RowRecord::from_iter([(columns::DURATION_MS, raw)])
    }

    #[test]
    fn duration_reads_leading_digits_only() {
        assert_eq!(row_with_duration("215000").duration_ms(), 215_000);
        assert_eq!(row_with_duration(" 61000ms").duration_ms(), 61_000);
        assert_eq!(row_with_duration("12.9").duration_ms(), 12);
        assert_eq!(row_with_duration("abc").duration_ms(), 0);
        assert_eq!(row_with_duration("-5").duration_ms(), 0);
        assert_eq!(RowRecord::default().duration_ms(), 0);
        assert_eq!(
            row_with_duration("99999999999999999999999").duration_ms(),
            u64::MAX
        );
    }

    #[test]
    fn from_cells_pads_and_truncates() {
        let columns = vec!["a".to_string(), "b".to_string()];
        let short = RowRecord::from_cells(&columns, vec!["1".into()]);
        assert_eq!(short.get("a"), "1");
        assert_eq!(short.get("b"), "");

        let long = RowRecord::from_cells(&columns, vec!["1".into(), "2".into(), "3".into()]);
        assert_eq!(long.len(), 2);
        assert_eq!(long.get("b"), "2");
    }
}
