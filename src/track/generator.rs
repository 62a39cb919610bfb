//! Track file generation.

use crate::constants::DEFAULT_CREATOR;
use crate::error::{Error, Result};
use crate::record::GeoRecord;
use crate::track::document::build_document;
use crate::utils::paths::{ensure_directory, normalize_path};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// What was written by a successful [`TrackGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    /// Normalized path of the written file.
    pub path: PathBuf,
    /// Number of waypoints written.
    pub waypoints: usize,
    /// Number of track points written.
    pub track_points: usize,
    /// Records left out for invalid coordinates.
    pub skipped: usize,
}

/// Writes GPX track files from extracted records.
#[derive(Debug, Clone)]
pub struct TrackGenerator {
    creator: String,
}

impl Default for TrackGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CREATOR)
    }
}

impl TrackGenerator {
    /// Create a generator stamping documents with `creator`.
    pub fn new(creator: impl Into<String>) -> Self {
        Self {
            creator: creator.into(),
        }
    }

    /// Sort `records` by timestamp and write them to `output_path`.
    ///
    /// Records with equal timestamps keep their relative order. Missing
    /// parent directories are created and an existing file is overwritten.
    /// Fails without touching the filesystem when there is nothing to write.
    pub fn generate(&self, records: &[GeoRecord], output_path: &Path) -> Result<TrackSummary> {
        if records.is_empty() {
            return Err(Error::NoGpsData);
        }

        let mut sorted: Vec<&GeoRecord> = records.iter().collect();
        sorted.sort_by_key(|record| record.timestamp);

        let document = build_document(&sorted, &self.creator);
        let written = document.gpx.waypoints.len();
        if written == 0 {
            return Err(Error::NoGpsData);
        }

        let path = resolve_output_path(output_path)?;
        write_document(&document.gpx, &path).inspect_err(|e| {
            error!("Failed to write track file {}: {}", path.display(), e);
        })?;

        debug!("Wrote {} points to {}", written, path.display());

        Ok(TrackSummary {
            path,
            waypoints: written,
            track_points: document
                .gpx
                .tracks
                .iter()
                .flat_map(|t| &t.segments)
                .map(|s| s.points.len())
                .sum(),
            skipped: document.skipped,
        })
    }
}

/// Write `records` to `output_path` with the default creator.
pub fn generate(records: &[GeoRecord], output_path: &Path) -> Result<TrackSummary> {
    TrackGenerator::default().generate(records, output_path)
}

/// Normalize the output path, check it names a file and create its parents.
fn resolve_output_path(output_path: &Path) -> Result<PathBuf> {
    let path = normalize_path(output_path);
    if path.file_name().is_none() {
        return Err(Error::InvalidOutputPath {
            path: output_path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    Ok(path)
}

fn write_document(gpx: &gpx::Gpx, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::OutputCreate {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    gpx::write(gpx, &mut writer).map_err(|e| Error::TrackSerialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    writer.flush().map_err(|e| Error::OutputCreate {
        path: path.to_path_buf(),
        source: e,
    })
}
