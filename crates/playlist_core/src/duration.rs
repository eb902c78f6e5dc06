/// Formats milliseconds as `m:ss`.
///
/// Minutes wrap at 60 and no hour component is shown, so one hour renders as
/// `0:00`. Fractions of a second are truncated.
pub fn format_duration(duration_ms: u64) -> String {
    let seconds = (duration_ms / 1_000) % 60;
    let minutes = (duration_ms / 60_000) % 60;
    format!("{minutes}:{seconds:02}")
}
