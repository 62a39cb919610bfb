//! Console progress while photos are read.

use indicatif::{ProgressBar, ProgressStyle};

const FILE_TEMPLATE: &str = "{spinner} {pos}/{len} photos [{bar:30}] {elapsed} {wide_msg}";

/// Bar over `total_files` photos, or `None` when hidden or there is nothing to read.
pub fn create_file_progress(total_files: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_files == 0 {
        return None;
    }

    let style = ProgressStyle::with_template(FILE_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    Some(ProgressBar::new(total_files as u64).with_style(style))
}

/// Advance by one photo.
pub fn inc_progress(pb: Option<&ProgressBar>) {
    if let Some(pb) = pb {
        pb.inc(1);
    }
}

/// Finish the bar, leaving `message` on screen.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}
