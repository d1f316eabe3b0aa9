//! Full-word `season N episode M` TV strategy.
//!
//! Formats:
//! - `Show.Season.1.Episode.5.mkv`
//! - `Show season1 episode5.mkv`

use super::{normalize_separators, Strategy};
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::ParseResult;
use regex::Regex;
use std::sync::LazyLock;

static TV_SEASON_EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)[.\s_-]+season[.\s_-]*(\d{1,2})[.\s_-]+episode[.\s_-]*(\d{1,3}).*$")
        .unwrap()
});

pub struct SeasonEpisodeTv;

impl Strategy for SeasonEpisodeTv {
    fn name(&self) -> &'static str {
        "season_episode_tv"
    }

    fn supported_kind(&self) -> MediaKind {
        MediaKind::TvShow
    }

    fn priority(&self) -> u8 {
        80
    }

    fn can_apply(&self, ctx: &ParsingContext) -> bool {
        // Both literal words must be present before a regex is worth running.
        let stem = ctx.file_stem.to_lowercase();
        stem.contains("season") && stem.contains("episode")
    }

    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult> {
        let caps = TV_SEASON_EPISODE.captures(&ctx.file_stem)?;

        let title = normalize_separators(&caps[1]);
        let season: u16 = caps[2].parse().ok()?;
        let episode: u16 = caps[3].parse().ok()?;

        tracing::debug!(
            "TV match (season/episode words): {} -> title={}, S{}E{}",
            ctx.file_stem,
            title,
            season,
            episode
        );

        Some(ParseResult {
            media_kind: MediaKind::TvShow,
            title,
            year: None,
            season: Some(season),
            episode: Some(episode),
            confidence: 0.85,
            strategy: self.name(),
        })
    }
}
