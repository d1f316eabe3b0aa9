//! Identify command implementation.

use crate::core::engine::IdentificationEngine;
use crate::core::season;
use crate::models::context::ParsingContext;
use crate::models::media::PreferredKind;
use anyhow::Result;
use colored::Colorize;

/// Execute identify command for a single filename.
pub fn execute_identify(
    filename: &str,
    parent: Option<String>,
    grandparent: Option<String>,
    series: Option<String>,
    media_type: Option<PreferredKind>,
    json: bool,
) -> Result<()> {
    let parent_is_season_folder = parent
        .as_deref()
        .map_or(false, season::is_season_folder);

    // When no explicit series name is given, infer one the way the scanner
    // would: season-folder parent -> grandparent, else the parent itself.
    let detected_series_name = series.or_else(|| {
        if parent_is_season_folder {
            grandparent.clone().or_else(|| parent.clone())
        } else {
            parent.clone()
        }
    });

    let ctx = ParsingContext {
        parent_directory: parent,
        grand_parent_directory: grandparent,
        preferred_kind: media_type,
        detected_series_name,
        parent_is_season_folder,
        ..ParsingContext::from_file_name(filename)
    };

    let engine = IdentificationEngine::new();
    let result = engine.identify(&ctx);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}: {}", "kind".bold(), result.media_kind);
    println!("{}: {}", "title".bold(), result.title);
    if let Some(year) = result.year {
        println!("{}: {}", "year".bold(), year);
    }
    if let Some(season) = result.season {
        println!("{}: {}", "season".bold(), season);
    }
    if let Some(episode) = result.episode {
        println!("{}: {}", "episode".bold(), episode);
    }
    println!(
        "{}: {:.2} (strategy: {})",
        "confidence".bold(),
        result.confidence,
        result.strategy
    );
    if result.is_low_confidence() {
        println!("{}", "low-confidence guess, treat as a weak search term".yellow());
    }

    Ok(())
}
