//! Configuration type definitions.

use crate::constants::{DEFAULT_CREATOR, DEFAULT_OUTPUT_FILENAME};
use serde::{Deserialize, Serialize};

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default run settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Default run settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Descend into sub-directories of directory inputs.
    pub recursive: bool,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name used when no output path is given.
    pub filename: String,

    /// Creator attribute written into the GPX document.
    pub creator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            creator: DEFAULT_CREATOR.to_string(),
        }
    }
}
