//! Capture-time parsing.

use crate::constants::EXIF_DATETIME_FORMAT;
use crate::record::TimestampSource;
use chrono::NaiveDateTime;

/// Parse an EXIF date-time string (`YYYY:MM:DD HH:MM:SS`).
pub fn parse_capture_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT).ok()
}

/// Pick the first candidate that parses, else fall back to `now`.
pub fn resolve_timestamp<'a, I>(candidates: I, now: NaiveDateTime) -> (NaiveDateTime, TimestampSource)
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .find_map(parse_capture_time)
        .map_or((now, TimestampSource::Fallback), |ts| {
            (ts, TimestampSource::Capture)
        })
}
