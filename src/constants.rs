//! Application-wide constants.
//!
//! All magic numbers and strings are defined here to ensure consistency
//! and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "phototrack";

/// Default output file name, placed next to (or inside) the first input.
pub const DEFAULT_OUTPUT_FILENAME: &str = "phototrack.gpx";

/// Default value of the GPX `creator` attribute.
pub const DEFAULT_CREATOR: &str = "phototrack";

/// Name given to the single track in the output document.
pub const TRACK_NAME: &str = "Photo track";

/// EXIF date-time layout (`YYYY:MM:DD HH:MM:SS`).
pub const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Marker that precedes an embedded EXIF payload (JPEG APP1 layout).
pub const EXIF_PAYLOAD_MARKER: &[u8; 6] = b"Exif\0\0";

/// Image file extensions picked up when scanning directories.
///
/// Matched case-insensitively. Files named explicitly on the command line
/// bypass this list.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "tif", "tiff", "webp", "heic", "heif", "arw", "dng", "nef", "cr2", "orf",
    "rw2",
];

/// Coordinate bounds in decimal degrees.
pub mod coordinates {
    /// Largest absolute latitude.
    pub const MAX_LATITUDE: f64 = 90.0;
    /// Largest absolute longitude.
    pub const MAX_LONGITUDE: f64 = 180.0;
    /// Minutes per degree.
    pub const MINUTES_PER_DEGREE: f64 = 60.0;
    /// Seconds per degree.
    pub const SECONDS_PER_DEGREE: f64 = 3600.0;
}
