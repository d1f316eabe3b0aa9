//! Media Renamer CLI
//!
//! A command-line tool that infers title/year/season/episode metadata from
//! messy media filenames and directory names.

use clap::Parser;
use media_renamer::cli::{
    args::{Cli, Commands},
    commands::{identify, scan, season},
};
use media_renamer::models::config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match cli.command {
        Commands::Scan {
            path,
            media_type,
            format,
            output,
        } => {
            let config = config::load_config();
            scan::execute_scan(&path, media_type, format, output.as_deref(), &config)?;
        }

        Commands::Identify {
            filename,
            parent,
            grandparent,
            series,
            media_type,
            json,
        } => {
            identify::execute_identify(&filename, parent, grandparent, series, media_type, json)?;
        }

        Commands::Season { name } => {
            season::execute_season(&name)?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_renamer=debug")
    } else {
        EnvFilter::new("media_renamer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
