//! Phototrack - build GPX tracks from geotagged photos.
//!
//! Reads the EXIF GPS tags of photo files, orders the positions by capture
//! time and writes them as waypoints plus a single track to a GPX 1.1 file.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod track;
pub mod utils;

use clap::Parser;
use cli::{Cli, Command, TrackArgs};
use config::{Config, config_file_path, load_default_config, save_default_config};
use metadata::Extractor;
use output::TracingReporter;
use pipeline::{RunOptions, run_pipeline};
use std::path::PathBuf;
use tracing::info;

pub use error::{Error, Result};
pub use metadata::extract;
pub use record::GeoRecord;
pub use track::generate;

/// Main entry point for the phototrack CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.track.verbose, cli.track.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let config = load_default_config()?;
    build_track(&cli.inputs, &cli.track, &config)
}

/// Extract records from the inputs and write the track file.
fn build_track(inputs: &[PathBuf], args: &TrackArgs, config: &Config) -> Result<()> {
    use std::time::Instant;

    let start = Instant::now();

    let options = RunOptions {
        output: args.output.clone(),
        recursive: args.recursive_or(config.defaults.recursive),
        output_filename: config.output.filename.clone(),
        creator: config.output.creator.clone(),
        progress: !args.no_progress && !args.quiet,
    };

    let summary = run_pipeline(inputs, &options, &Extractor::default(), &TracingReporter)?;

    info!(
        "Finished in {:.2}s ({} file(s) scanned)",
        start.elapsed().as_secs_f64(),
        summary.files_scanned
    );

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            let text =
                toml::to_string_pretty(&config).map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{text}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
