//! GPX track generation from extracted records.

mod document;
mod generator;

pub use document::{TrackDocument, build_document};
pub use generator::{TrackGenerator, TrackSummary, generate};
