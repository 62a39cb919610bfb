//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_output(config)
}

fn validate_output(config: &Config) -> Result<()> {
    let output = &config.output;

    if output.filename.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output.filename must not be empty".to_string(),
        });
    }

    // A bare file name; the directory comes from the inputs
    if output.filename.contains(['/', '\\']) || output.filename == "." || output.filename == ".."
    {
        return Err(Error::ConfigValidation {
            message: format!(
                "output.filename must be a file name without directories, got {:?}",
                output.filename
            ),
        });
    }

    if output.creator.trim().is_empty() {
        return Err(Error::ConfigValidation {
            message: "output.creator must not be empty".to_string(),
        });
    }

    Ok(())
}
