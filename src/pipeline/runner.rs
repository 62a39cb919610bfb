//! End-to-end run: collect inputs, extract records, write the track.

use crate::constants::{DEFAULT_CREATOR, DEFAULT_OUTPUT_FILENAME};
use crate::error::{Error, Result};
use crate::metadata::Extractor;
use crate::output::{Reporter, RunSummary, progress};
use crate::pipeline::{collect_input_files, default_output_path, extract_all};
use crate::track::TrackGenerator;
use std::path::PathBuf;

/// Options for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Explicit output file; defaults next to the first existing input.
    pub output: Option<PathBuf>,
    /// Descend into sub-directories.
    pub recursive: bool,
    /// File name used when `output` is not given.
    pub output_filename: String,
    /// GPX creator attribute.
    pub creator: String,
    /// Show a progress bar.
    pub progress: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            output: None,
            recursive: false,
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            creator: DEFAULT_CREATOR.to_string(),
            progress: false,
        }
    }
}

/// Turn the geotagged files under `inputs` into one track file.
///
/// Per-file and per-input problems are reported and skipped. The run fails
/// only when nothing was given, nothing exists, nothing had GPS data, or the
/// output could not be written.
pub fn run_pipeline(
    inputs: &[PathBuf],
    options: &RunOptions,
    extractor: &Extractor,
    reporter: &dyn Reporter,
) -> Result<RunSummary> {
    if inputs.is_empty() {
        return Err(Error::NoInputs);
    }

    let collected = collect_input_files(inputs, options.recursive, reporter);
    let Some(first_input) = collected.existing.first() else {
        return Err(Error::NoExistingInputs {
            paths: collected
                .missing
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        });
    };

    reporter.run_started(collected.files.len());

    let file_progress = progress::create_file_progress(collected.files.len(), options.progress);
    let batch = extract_all(
        &collected.files,
        extractor,
        reporter,
        file_progress.as_ref(),
    );
    progress::finish_progress(file_progress, "Complete");

    if batch.records.is_empty() {
        return Err(Error::NoGpsData);
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(first_input, &options.output_filename));

    let track = TrackGenerator::new(options.creator.as_str()).generate(&batch.records, &output)?;

    let summary = RunSummary {
        files_scanned: collected.files.len(),
        records: track.waypoints,
        files_skipped: batch.skipped + track.skipped,
        files_failed: batch.failed,
        output: track.path,
    };
    reporter.run_completed(&summary);

    Ok(summary)
}
