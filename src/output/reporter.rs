//! Run reporting.
//!
//! The pipeline never writes to the console directly. It emits events to a
//! [`Reporter`], which the CLI backs with `tracing` and tests back with an
//! in-memory collector.

use crate::error::Error;
use crate::metadata::SkipReason;
use crate::record::GeoRecord;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Trait for reporting progress during a run.
pub trait Reporter: Send + Sync {
    /// Candidate files have been collected.
    fn run_started(&self, total_files: usize);

    /// A top-level input path does not exist.
    fn input_missing(&self, path: &Path);

    /// A top-level input exists but could not be scanned.
    fn input_failed(&self, path: &Path, error: &Error);

    /// A file yielded a record.
    fn record_extracted(&self, path: &Path, record: &GeoRecord);

    /// A file was left out of the track.
    fn file_skipped(&self, path: &Path, reason: &SkipReason);

    /// A file could not be processed at all.
    fn file_failed(&self, path: &Path, error: &Error);

    /// The track file has been written.
    fn run_completed(&self, summary: &RunSummary);
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Candidate files examined.
    pub files_scanned: usize,
    /// Files that yielded a record.
    pub records: usize,
    /// Files without usable GPS data.
    pub files_skipped: usize,
    /// Files that failed outright.
    pub files_failed: usize,
    /// Path of the written track file.
    pub output: PathBuf,
}

/// Reporter that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn run_started(&self, total_files: usize) {
        info!("Found {} candidate file(s)", total_files);
    }

    fn input_missing(&self, path: &Path) {
        warn!("Input path does not exist: {}", path.display());
    }

    fn input_failed(&self, path: &Path, error: &Error) {
        warn!("Cannot scan {}: {}", path.display(), error);
    }

    fn record_extracted(&self, path: &Path, record: &GeoRecord) {
        debug!(
            "GPS {:.6}, {:.6} at {} from {}",
            record.latitude,
            record.longitude,
            record.timestamp,
            path.display()
        );
    }

    fn file_skipped(&self, path: &Path, reason: &SkipReason) {
        match reason {
            SkipReason::Unreadable { .. } => info!("Skipping {}: {}", path.display(), reason),
            _ => debug!("Skipping {}: {}", path.display(), reason),
        }
    }

    fn file_failed(&self, path: &Path, error: &Error) {
        warn!("Failed to process {}: {}", path.display(), error);
    }

    fn run_completed(&self, summary: &RunSummary) {
        info!(
            "Complete: {} of {} file(s) with GPS data, {} skipped, {} failed",
            summary.records, summary.files_scanned, summary.files_skipped, summary.files_failed
        );
        info!("Track written to {}", summary.output.display());
    }
}

/// A reported event, as recorded by [`CollectingReporter`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    /// See [`Reporter::run_started`].
    RunStarted(usize),
    /// See [`Reporter::input_missing`].
    InputMissing(PathBuf),
    /// See [`Reporter::input_failed`].
    InputFailed(PathBuf),
    /// See [`Reporter::record_extracted`].
    RecordExtracted(PathBuf),
    /// See [`Reporter::file_skipped`].
    FileSkipped(PathBuf, SkipReason),
    /// See [`Reporter::file_failed`].
    FileFailed(PathBuf),
    /// See [`Reporter::run_completed`].
    RunCompleted(RunSummary),
}

/// Reporter that keeps every event in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl CollectingReporter {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events so far.
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn push(&self, event: ReportEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl Reporter for CollectingReporter {
    fn run_started(&self, total_files: usize) {
        self.push(ReportEvent::RunStarted(total_files));
    }

    fn input_missing(&self, path: &Path) {
        self.push(ReportEvent::InputMissing(path.to_path_buf()));
    }

    fn input_failed(&self, path: &Path, _error: &Error) {
        self.push(ReportEvent::InputFailed(path.to_path_buf()));
    }

    fn record_extracted(&self, path: &Path, _record: &GeoRecord) {
        self.push(ReportEvent::RecordExtracted(path.to_path_buf()));
    }

    fn file_skipped(&self, path: &Path, reason: &SkipReason) {
        self.push(ReportEvent::FileSkipped(path.to_path_buf(), reason.clone()));
    }

    fn file_failed(&self, path: &Path, _error: &Error) {
        self.push(ReportEvent::FileFailed(path.to_path_buf()));
    }

    fn run_completed(&self, summary: &RunSummary) {
        self.push(ReportEvent::RunCompleted(summary.clone()));
    }
}
