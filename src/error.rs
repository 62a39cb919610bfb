//! Error types for phototrack.

/// Result type alias for phototrack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for phototrack.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// No input paths were given.
    #[error("no input files or directories given (usage: phototrack <PATH>... [OPTIONS])")]
    NoInputs,

    /// An input path does not exist.
    #[error("input path does not exist: {path}")]
    InputNotFound {
        /// The missing path.
        path: std::path::PathBuf,
    },

    /// None of the given input paths exist.
    #[error("no input paths exist: {paths}")]
    NoExistingInputs {
        /// Display form of the missing paths, comma-separated.
        paths: String,
    },

    /// No file yielded GPS data.
    #[error("no GPS data found to write")]
    NoGpsData,

    /// Output path cannot name a file.
    #[error("invalid output path: {path}")]
    InvalidOutputPath {
        /// The rejected path.
        path: std::path::PathBuf,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or flush the output file.
    #[error("failed to write output file '{path}'")]
    OutputCreate {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the GPX document.
    #[error("failed to serialize GPX document to '{path}'")]
    TrackSerialize {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying GPX error.
        #[source]
        source: gpx::errors::GpxError,
    },
}
