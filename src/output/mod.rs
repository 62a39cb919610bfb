//! Run reporting and console progress.

pub mod progress;
mod reporter;

pub use reporter::{CollectingReporter, ReportEvent, Reporter, RunSummary, TracingReporter};
