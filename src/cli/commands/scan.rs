//! Scan command implementation.

use crate::cli::args::OutputFormat;
use crate::core::engine::IdentificationEngine;
use crate::core::scanner::ContextScanner;
use crate::models::config::Config;
use crate::models::media::{MediaKind, PreferredKind};
use crate::models::result::ParseResult;
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One classified file in the scan report.
#[derive(Debug, Serialize)]
struct ScanRecord {
    path: PathBuf,
    #[serde(flatten)]
    result: ParseResult,
}

/// JSON report envelope.
#[derive(Debug, Serialize)]
struct ScanReport {
    root: PathBuf,
    generated_at: chrono::DateTime<chrono::Utc>,
    media_type: Option<PreferredKind>,
    files: Vec<ScanRecord>,
}

/// Execute scan command.
pub fn execute_scan(
    path: &Path,
    media_type: Option<PreferredKind>,
    format: OutputFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<()> {
    let preferred = media_type.or(config.scan.default_media_kind);

    let scanner = ContextScanner::new(path)
        .with_preferred_kind(preferred)
        .with_extra_extensions(config.scan.extra_extensions.clone());
    let files = scanner.scan()?;

    if files.is_empty() {
        println!("No video files found.");
        return Ok(());
    }

    println!("Found {} video files to classify", files.len());
    println!();

    // Progress bar
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );

    let engine = IdentificationEngine::new();
    let mut records = Vec::with_capacity(files.len());

    for file in &files {
        pb.set_message(format!("Classifying: {}", file.context.file_name));
        let result = engine.identify(&file.context);
        records.push(ScanRecord {
            path: file.path.clone(),
            result,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();

    match format {
        OutputFormat::Json => {
            let report = ScanReport {
                root: path.to_path_buf(),
                generated_at: chrono::Utc::now(),
                media_type: preferred,
                files: records,
            };
            let json = serde_json::to_string_pretty(&report)?;
            match output {
                Some(file) => {
                    std::fs::write(file, json)?;
                    println!("Report written to {}", file.display());
                }
                None => println!("{json}"),
            }
        }
        OutputFormat::Table => print_table(&records),
    }

    Ok(())
}

/// Print records as a colored table with a summary.
fn print_table(records: &[ScanRecord]) {
    println!(
        "{:<8} {:<6} {:<4} {:<4} {:<5} TITLE",
        "KIND", "YEAR", "S", "E", "CONF"
    );

    let mut movies = 0usize;
    let mut shows = 0usize;
    let mut unknown = 0usize;
    let mut guesses = 0usize;

    for record in records {
        let r = &record.result;
        match r.media_kind {
            MediaKind::Movie => movies += 1,
            MediaKind::TvShow => shows += 1,
            MediaKind::Unknown => unknown += 1,
        }
        if r.is_low_confidence() {
            guesses += 1;
        }

        let kind = match r.media_kind {
            MediaKind::Movie => "movie".green(),
            MediaKind::TvShow => "tvshow".cyan(),
            MediaKind::Unknown => "unknown".red(),
        };
        let confidence = format!("{:.2}", r.confidence);
        let confidence = if r.is_low_confidence() {
            confidence.yellow()
        } else {
            confidence.normal()
        };

        println!(
            "{:<8} {:<6} {:<4} {:<4} {:<5} {}",
            kind,
            opt(r.year),
            opt(r.season),
            opt(r.episode),
            confidence,
            r.title,
        );
    }

    println!();
    println!(
        "{} files: {} movies, {} tv episodes, {} unknown",
        records.len(),
        movies,
        shows,
        unknown
    );
    if guesses > 0 {
        println!(
            "{}",
            format!("{guesses} low-confidence guesses (<= 0.30), review before renaming").yellow()
        );
    }
}

fn opt(value: Option<u16>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
