//! Processing pipeline components.

mod coordinator;
mod processor;
mod runner;

pub use coordinator::{
    CollectedInputs, collect_candidate_files, collect_input_files, default_output_path,
};
pub use processor::{ExtractionBatch, extract_all};
pub use runner::{RunOptions, run_pipeline};
