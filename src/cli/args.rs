//! Command line argument definitions.

use crate::models::media::PreferredKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Media Renamer - Infer metadata from messy media filenames
#[derive(Parser, Debug)]
#[command(name = "media-renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory tree and classify every video file
    Scan {
        /// Root directory to scan
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Force a media kind instead of auto-detecting
        #[arg(short, long, value_enum, value_name = "KIND")]
        media_type: Option<PreferredKind>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write the JSON report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Classify a single filename
    Identify {
        /// Filename to classify (extension included)
        #[arg(value_name = "FILENAME")]
        filename: String,

        /// Simulated parent directory name
        #[arg(long, value_name = "DIR")]
        parent: Option<String>,

        /// Simulated grandparent directory name
        #[arg(long, value_name = "DIR")]
        grandparent: Option<String>,

        /// Series name to assume (normally inferred from directories)
        #[arg(long, value_name = "NAME")]
        series: Option<String>,

        /// Force a media kind instead of auto-detecting
        #[arg(short, long, value_enum, value_name = "KIND")]
        media_type: Option<PreferredKind>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a directory name denotes a season
    Season {
        /// Directory name to probe
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Output format for the scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
