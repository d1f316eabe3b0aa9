//! Season command implementation.

use crate::core::season::{self, SeasonMatchKind};
use anyhow::Result;
use colored::Colorize;

/// Execute season command: probe the season-folder matcher.
pub fn execute_season(name: &str) -> Result<()> {
    match season::parse_season_folder(name) {
        Some(info) => {
            let kind = match info.kind {
                SeasonMatchKind::Standard => "standard",
                SeasonMatchKind::Short => "short",
                SeasonMatchKind::Chinese => "chinese",
                SeasonMatchKind::Specials => "specials",
            };
            if info.number == 0 {
                println!("{}: specials bucket (season 0, {kind} form)", name.green());
            } else {
                println!("{}: season {} ({kind} form)", name.green(), info.number);
            }
        }
        None => {
            println!("{}: not a season folder", name.red());
        }
    }

    Ok(())
}
