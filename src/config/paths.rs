//! Where the config file lives.

use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Per-user directory holding `config.toml`.
///
/// Follows the platform convention, so `XDG_CONFIG_HOME` is honoured on
/// Linux. Fails when no home directory can be determined.
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME).ok_or(Error::ConfigDirNotFound)?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Path of the config file, whether or not it exists yet.
pub fn config_file_path() -> Result<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}
