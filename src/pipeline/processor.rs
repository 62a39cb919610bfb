//! Sequential metadata extraction over candidate files.

use crate::metadata::{Extraction, Extractor};
use crate::output::Reporter;
use crate::output::progress;
use crate::record::GeoRecord;
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Records gathered from a batch of files.
#[derive(Debug, Default)]
pub struct ExtractionBatch {
    /// Records in file order.
    pub records: Vec<GeoRecord>,
    /// Files without usable GPS data.
    pub skipped: usize,
    /// Files that could not be processed.
    pub failed: usize,
}

/// Run `extractor` over `files` one at a time.
///
/// A failing file is reported and counted; it never stops the batch.
pub fn extract_all(
    files: &[PathBuf],
    extractor: &Extractor,
    reporter: &dyn Reporter,
    progress_bar: Option<&ProgressBar>,
) -> ExtractionBatch {
    let mut batch = ExtractionBatch::default();

    for file in files {
        match extractor.inspect(file) {
            Ok(Extraction::Record(record)) => {
                reporter.record_extracted(file, &record);
                batch.records.push(record);
            }
            Ok(Extraction::Skipped(reason)) => {
                reporter.file_skipped(file, &reason);
                batch.skipped += 1;
            }
            Err(e) => {
                reporter.file_failed(file, &e);
                batch.failed += 1;
            }
        }
        progress::inc_progress(progress_bar);
    }

    batch
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::metadata::SkipReason;
    use crate::metadata::test_support::ExifFixture;
    use crate::output::{CollectingReporter, ReportEvent};
    use tempfile::TempDir;

    #[test]
    fn test_batch_counts_each_outcome() {
        let temp = TempDir::new().unwrap();
        let with_gps = temp.path().join("a.tiff");
        let without_gps = temp.path().join("b.tiff");
        let vanished = temp.path().join("c.tiff");
        ExifFixture::new()
            .gps((10, 0, 0), "N", (20, 0, 0), "E")
            .write_tiff(&with_gps);
        ExifFixture::new().write_tiff(&without_gps);

        let reporter = CollectingReporter::new();
        let batch = extract_all(
            &[with_gps.clone(), without_gps.clone(), vanished.clone()],
            &Extractor::default(),
            &reporter,
            None,
        );

        assert_eq!(batch.records.len(), 1);
        assert_eq!(batch.skipped, 1);
        assert_eq!(batch.failed, 1);
        assert_eq!(
            reporter.events(),
            vec![
                ReportEvent::RecordExtracted(with_gps),
                ReportEvent::FileSkipped(without_gps, SkipReason::NoGpsGroup),
                ReportEvent::FileFailed(vanished),
            ]
        );
    }
}
