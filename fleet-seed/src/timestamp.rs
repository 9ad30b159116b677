use chrono::{NaiveDateTime, Timelike};

/// Renders `at` the way downstream importers expect it: ISO-8601 with
/// microseconds only when present, followed by a literal `Z`.
///
/// The value is wall-clock local time; the `Z` is kept for compatibility with
/// existing consumers and does not mean the timestamp was converted to UTC.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    let micros = (at.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        format!("{}Z", at.format("%Y-%m-%dT%H:%M:%S"))
    } else {
        format!("{}.{micros:06}Z", at.format("%Y-%m-%dT%H:%M:%S"))
    }
}
