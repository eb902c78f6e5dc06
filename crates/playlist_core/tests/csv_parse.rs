use playlist_core::{columns, parse_csv, CsvError};
use pretty_assertions::assert_eq;

const HEADER: &str = "Track URI,Track Name,Artist Name(s),Album Name,Release Date,Duration (ms)";

#[test]
fn yields_one_record_per_data_line_with_every_column() {
    let text = format!(
        "{HEADER}\n\
         spotify:track:1,One,Band,Album,2020-01-01,1000\n\
         spotify:track:2,Two,Band\n\
         spotify:track:3,Three,Band,Album,,3000\n"
    );

    let rows = parse_csv(&text).unwrap();

    let mut expected_columns: Vec<&str> = HEADER.split(',').collect();
    expected_columns.sort_unstable();

    assert_eq!(rows.len(), 3);
    for row in &rows {
        assert_eq!(row.columns().collect::<Vec<_>>(), expected_columns);
    }
    assert_eq!(rows[1].track_name(), "Two");
    assert_eq!(rows[1].album_name(), "");
    assert_eq!(rows[1].get(columns::DURATION_MS), "");
    assert_eq!(rows[2].release_date(), "");
    assert_eq!(rows[2].duration_ms(), 3000);
}

#[test]
fn header_names_are_trimmed() {
    let rows = parse_csv(" Track Name , Album Name \nSong,Record").unwrap();
    assert_eq!(rows[0].track_name(), "Song");
    assert_eq!(rows[0].album_name(), "Record");
}

#[test]
fn quoted_fields_keep_commas_and_quotes() {
    let literal = r#"Hello, "World""#;
    let quoted = format!("\"{}\"", literal.replace('"', "\"\""));
    let text = format!("Track Name,Artist Name(s)\n{quoted},\"A, B & C\"");

    let rows = parse_csv(&text).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].track_name(), literal);
    assert_eq!(rows[0].artist_names(), "A, B & C");
}

#[test]
fn windows_line_endings_are_accepted() {
    let rows = parse_csv("Track Name,Duration (ms)\r\nSong,61000\r\nOther,0\r\n").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].duration_ms(), 61_000);
    assert_eq!(rows[1].track_name(), "Other");
}

#[test]
fn header_only_yields_no_records() {
    assert!(parse_csv(HEADER).unwrap().is_empty());
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(parse_csv(""), Err(CsvError::MissingHeader));
    assert_eq!(parse_csv("  \n\n"), Err(CsvError::MissingHeader));
}

#[test]
fn unterminated_quote_reports_its_line() {
    let text = "Track Name,Album Name\nok,fine\n\"broken,field\nlater,row";
    assert_eq!(
        parse_csv(text),
        Err(CsvError::UnterminatedQuote { line: 3 })
    );
}
