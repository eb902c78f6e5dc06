use crate::RowRecord;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    #[error("playlist file is empty")]
    MissingHeader,
    #[error("unterminated quoted field on line {line}")]
    UnterminatedQuote { line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    FieldStart,
    Unquoted,
    InQuotes,
    InQuotesSawQuote,
}

/// Parses a playlist export into one record per data line.
///
/// The header is split on plain commas; data lines honour double-quoted
/// fields with `""` as an escaped quote. An unterminated quote rejects the
/// whole input.
pub fn parse_csv(text: &str) -> Result<Vec<RowRecord>, CsvError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CsvError::MissingHeader);
    }

    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));
    let header = lines.next().ok_or(CsvError::MissingHeader)?;
    let columns: Vec<String> = header
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();

    lines
        .enumerate()
        .map(|(idx, line)| {
            // Line numbers are 1-based and the header is line 1.
            let cells = split_fields(line).ok_or(CsvError::UnterminatedQuote { line: idx + 2 })?;
            Ok(RowRecord::from_cells(&columns, cells))
        })
        .collect()
}

/// Splits one data line into cells, or `None` when a quote is left open.
fn split_fields(line: &str) -> Option<Vec<String>> {
    let mut cells = Vec::new();
    let mut field = String::new();
    let mut state = ScanState::FieldStart;

    for ch in line.chars() {
        state = match (state, ch) {
            (ScanState::FieldStart, '"') => ScanState::InQuotes,
            (ScanState::FieldStart | ScanState::Unquoted | ScanState::InQuotesSawQuote, ',') => {
                cells.push(std::mem::take(&mut field));
                ScanState::FieldStart
            }
            (ScanState::FieldStart | ScanState::Unquoted, other) => {
                field.push(other);
                ScanState::Unquoted
            }
            (ScanState::InQuotes, '"') => ScanState::InQuotesSawQuote,
            (ScanState::InQuotes, other) => {
                field.push(other);
                ScanState::InQuotes
            }
            (ScanState::InQuotesSawQuote, '"') => {
                field.push('"');
                ScanState::InQuotes
            }
            // Text after a closing quote is kept verbatim: `"ab"c` reads as `abc`.
            (ScanState::InQuotesSawQuote, other) => {
                field.push(other);
                ScanState::Unquoted
            }
        };
    }

    if state == ScanState::InQuotes {
        return None;
    }
    cells.push(field);
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_and_quoted_fields() {
        assert_eq!(
            split_fields(r#"a,"b,c","say ""hi""",d"#).unwrap(),
            vec!["a", "b,c", r#"say "hi""#, "d"]
        );
    }

    #[test]
    fn keeps_empty_fields() {
        assert_eq!(split_fields(",,").unwrap(), vec!["", "", ""]);
        assert_eq!(split_fields("").unwrap(), vec![""]);
        assert_eq!(split_fields(r#""""#).unwrap(), vec![""]);
    }

    #[test]
    fn quote_inside_unquoted_field_is_literal() {
        assert_eq!(split_fields(r#"12" vinyl,x"#).unwrap(), vec![r#"12" vinyl"#, "x"]);
    }

    #[test]
    fn text_after_closing_quote_is_appended() {
        assert_eq!(split_fields(r#""ab"c,d"#).unwrap(), vec!["abc", "d"]);
    }

    #[test]
    fn open_quote_is_rejected() {
        assert_eq!(split_fields(r#"a,"unterminated"#), None);
        assert_eq!(split_fields(r#""ends with escaped quote""#), None);
    }
}
