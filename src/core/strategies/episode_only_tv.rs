//! Bare-episode-number TV strategy (title taken from directory context).
//!
//! Formats:
//! - `01 _ 郭女俠怒砸同福店.mkv`
//! - `第01集 剧集标题.mkv`
//! - `001.mkv`
//!
//! The filename carries no series name, so this strategy only applies when
//! the scanner inferred one from the directory structure. Lowest-priority TV
//! fallback.

use super::{normalize_separators, Strategy};
use crate::core::season;
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::ParseResult;
use regex::Regex;
use std::sync::LazyLock;

static TV_EPISODE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:第)?(\d{1,3})(?:集)?[\s_-]*(.*)$").unwrap());

static PRECHECK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(?:第)?\d{1,3}").unwrap());

pub struct EpisodeOnlyTv;

impl Strategy for EpisodeOnlyTv {
    fn name(&self) -> &'static str {
        "episode_only_tv"
    }

    fn supported_kind(&self) -> MediaKind {
        MediaKind::TvShow
    }

    fn priority(&self) -> u8 {
        30
    }

    fn can_apply(&self, ctx: &ParsingContext) -> bool {
        ctx.series_name().is_some() && PRECHECK.is_match(&ctx.file_stem)
    }

    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult> {
        let series_name = ctx.series_name()?;
        let caps = TV_EPISODE_ONLY.captures(&ctx.file_stem)?;

        let episode: u16 = caps[1].parse().ok()?;
        let episode_title = caps[2].trim();
        let title = normalize_separators(series_name);

        // Season comes from the parent folder when it names one, else
        // defaults to 1 (a series name was detected, so a season exists).
        let season = ctx
            .parent_directory
            .as_deref()
            .and_then(season::parse_season_folder)
            .map(|info| info.number)
            .unwrap_or(1);

        if episode_title.is_empty() {
            tracing::debug!(
                "TV match (episode only): {} -> title={}, S{}E{}",
                ctx.file_stem,
                title,
                season,
                episode
            );
        } else {
            tracing::debug!(
                "TV match (episode only): {} -> title={}, S{}E{}, episode title={}",
                ctx.file_stem,
                title,
                season,
                episode,
                episode_title
            );
        }

        Some(ParseResult {
            media_kind: MediaKind::TvShow,
            title,
            year: None,
            season: Some(season),
            episode: Some(episode),
            confidence: 0.6,
            strategy: self.name(),
        })
    }
}
