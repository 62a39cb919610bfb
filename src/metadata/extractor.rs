//! GPS record extraction from a single file.

use crate::error::{Error, Result};
use crate::metadata::numeric::{apply_hemisphere, components, triplet_to_decimal};
use crate::metadata::reader::ReaderChain;
use crate::metadata::timestamp::resolve_timestamp;
use crate::record::{GeoRecord, is_valid_position};
use chrono::{Local, NaiveDateTime};
use exif::{Context, Exif, In, Tag, Value};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Capture-time tags in order of preference.
const CAPTURE_TIME_TAGS: [Tag; 2] = [Tag::DateTimeOriginal, Tag::DateTime];

/// Why a file produced no record.
///
/// None of these are errors: the file is simply left out of the track.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Metadata could not be read or decoded.
    Unreadable {
        /// Reader failure message.
        reason: String,
    },
    /// Metadata has no GPS tag group.
    NoGpsGroup,
    /// GPS group lacks a usable latitude or longitude triplet.
    MissingCoordinate,
    /// Converted coordinates are out of range or not finite.
    InvalidCoordinate {
        /// Converted latitude.
        latitude: f64,
        /// Converted longitude.
        longitude: f64,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { reason } => write!(f, "unreadable metadata ({reason})"),
            Self::NoGpsGroup => write!(f, "no GPS data"),
            Self::MissingCoordinate => write!(f, "GPS data lacks latitude or longitude"),
            Self::InvalidCoordinate {
                latitude,
                longitude,
            } => write!(f, "coordinates out of range ({latitude}, {longitude})"),
        }
    }
}

/// Outcome of inspecting one file.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// The file yielded a record.
    Record(GeoRecord),
    /// The file was left out.
    Skipped(SkipReason),
}

impl Extraction {
    /// Keep the record, drop the skip reason.
    pub fn into_record(self) -> Option<GeoRecord> {
        match self {
            Self::Record(record) => Some(record),
            Self::Skipped(_) => None,
        }
    }
}

/// Source of "now" for files without a usable capture time.
pub type Clock = fn() -> NaiveDateTime;

/// Local wall-clock time, on the same naive timeline as camera capture times.
fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Extracts GPS records from files through a reader chain.
#[derive(Debug)]
pub struct Extractor {
    readers: ReaderChain,
    clock: Clock,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ReaderChain::default())
    }
}

impl Extractor {
    /// Create an extractor over the given readers.
    pub fn new(readers: ReaderChain) -> Self {
        Self {
            readers,
            clock: local_now,
        }
    }

    /// Replace the wall-clock source used for timestamp fallback.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Inspect `path` and report either a record or why it has none.
    ///
    /// Fails only when `path` does not exist. Unreadable or corrupt files are
    /// reported as skipped.
    pub fn inspect(&self, path: &Path) -> Result<Extraction> {
        if !path.exists() {
            return Err(Error::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let exif = match self.readers.read(path) {
            Ok(exif) => exif,
            Err(e) => {
                debug!("No readable metadata in {}: {}", path.display(), e);
                return Ok(Extraction::Skipped(SkipReason::Unreadable {
                    reason: e.to_string(),
                }));
            }
        };

        Ok(build_record(&exif, file_label(path), (self.clock)()))
    }

    /// Extract a record from `path`, or `None` when it has no GPS position.
    pub fn extract(&self, path: &Path) -> Result<Option<GeoRecord>> {
        Ok(self.inspect(path)?.into_record())
    }
}

/// Extract a record from `path` with the default reader chain.
pub fn extract(path: &Path) -> Result<Option<GeoRecord>> {
    Extractor::default().extract(path)
}

fn build_record(exif: &Exif, name: String, now: NaiveDateTime) -> Extraction {
    if !exif.fields().any(|f| f.tag.context() == Context::Gps) {
        return Extraction::Skipped(SkipReason::NoGpsGroup);
    }

    let (Some(latitude), Some(longitude)) = (
        coordinate(exif, Tag::GPSLatitude, Tag::GPSLatitudeRef, "S"),
        coordinate(exif, Tag::GPSLongitude, Tag::GPSLongitudeRef, "W"),
    ) else {
        return Extraction::Skipped(SkipReason::MissingCoordinate);
    };

    if !is_valid_position(latitude, longitude) {
        return Extraction::Skipped(SkipReason::InvalidCoordinate {
            latitude,
            longitude,
        });
    }

    let capture_times: Vec<String> = CAPTURE_TIME_TAGS
        .iter()
        .filter_map(|tag| ascii_field(exif, *tag))
        .collect();
    let (timestamp, timestamp_source) =
        resolve_timestamp(capture_times.iter().map(String::as_str), now);

    Extraction::Record(GeoRecord {
        latitude,
        longitude,
        altitude: altitude(exif),
        timestamp,
        timestamp_source,
        name,
    })
}

/// Signed decimal degrees from a DMS tag and its hemisphere reference.
fn coordinate(exif: &Exif, value_tag: Tag, ref_tag: Tag, negative: &str) -> Option<f64> {
    let field = exif.get_field(value_tag, In::PRIMARY)?;
    let decimal = triplet_to_decimal(&components(&field.value))?;
    let reference = ascii_field(exif, ref_tag);
    Some(apply_hemisphere(decimal, reference.as_deref(), negative))
}

/// Altitude in metres; reference 1 means below sea level.
fn altitude(exif: &Exif) -> Option<f64> {
    let field = exif.get_field(Tag::GPSAltitude, In::PRIMARY)?;
    let metres = components(&field.value).first()?.resolve();
    if !metres.is_finite() {
        return None;
    }

    let below_sea_level = exif
        .get_field(Tag::GPSAltitudeRef, In::PRIMARY)
        .and_then(|f| f.value.get_uint(0))
        == Some(1);

    Some(if below_sea_level { -metres } else { metres })
}

/// First string of an ASCII field, without padding or NUL terminators.
fn ascii_field(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(strings) => strings
            .first()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .map(|s| s.trim_matches(|c: char| c == '\0' || c.is_whitespace()))
            .map(str::to_string),
        _ => None,
    }
}

/// Base name of `path`, used as the waypoint label.
fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
