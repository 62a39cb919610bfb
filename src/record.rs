//! Extracted GPS data points.

use chrono::NaiveDateTime;

/// Where a record's timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    /// Parsed from the file's capture-time tag.
    Capture,
    /// Tag missing or malformed; wall-clock time at extraction.
    Fallback,
}

/// One geotagged file, reduced to a point in time and space.
///
/// Coordinates are signed decimal degrees (south and west negative) and are
/// always within range. Timestamps are naive and written out as UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoRecord {
    /// Latitude in decimal degrees, within [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, within [-180, 180].
    pub longitude: f64,
    /// Altitude in metres relative to sea level, if tagged.
    pub altitude: Option<f64>,
    /// Capture time, or extraction time when the file had none.
    pub timestamp: NaiveDateTime,
    /// Origin of `timestamp`.
    pub timestamp_source: TimestampSource,
    /// Label used for the waypoint, normally the file's base name.
    pub name: String,
}

impl GeoRecord {
    /// Whether the coordinates are finite and inside the geographic range.
    pub fn has_valid_coordinates(&self) -> bool {
        is_valid_position(self.latitude, self.longitude)
    }
}

/// Check a latitude/longitude pair against the geographic bounds.
pub fn is_valid_position(latitude: f64, longitude: f64) -> bool {
    use crate::constants::coordinates::{MAX_LATITUDE, MAX_LONGITUDE};

    latitude.is_finite()
        && longitude.is_finite()
        && (-MAX_LATITUDE..=MAX_LATITUDE).contains(&latitude)
        && (-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&longitude)
}
