//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Build a GPX track from the GPS tags of geotagged photos.
#[derive(Debug, Parser)]
#[command(name = "phototrack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Photo files or directories to scan.
    pub inputs: Vec<PathBuf>,

    /// Common options for track generation.
    #[command(flatten)]
    pub track: TrackArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for track generation.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct TrackArgs {
    /// Output GPX file (default: inside the first input directory).
    #[arg(short, long, env = "PHOTOTRACK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Scan sub-directories of directory inputs.
    #[arg(short, long, env = "PHOTOTRACK_RECURSIVE", overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Only scan the top level of directory inputs, whatever the config says.
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Only log warnings and errors; hides the progress bar.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,
}

impl TrackArgs {
    /// Whether to recurse, with the config value used when no flag was given.
    pub const fn recursive_or(&self, configured: bool) -> bool {
        if self.recursive {
            true
        } else if self.no_recursive {
            false
        } else {
            configured
        }
    }
}
