//! Standard `SxxEyy` TV-show strategy.
//!
//! Formats:
//! - `Breaking.Bad.S01E01.mkv`
//! - `Minuscule.2006.S01E01.mkv` (optional embedded year)

use super::{normalize_separators, Strategy};
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::{valid_year, ParseResult};
use regex::Regex;
use std::sync::LazyLock;

static TV_SXX_EXX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(?:[.\s_-]+(\d{4}))?[.\s_-]+S(\d{1,2})E(\d{1,3}).*$").unwrap()
});

static PRECHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S\d{1,2}E\d{1,3}").unwrap());

pub struct StandardTv;

impl Strategy for StandardTv {
    fn name(&self) -> &'static str {
        "standard_tv"
    }

    fn supported_kind(&self) -> MediaKind {
        MediaKind::TvShow
    }

    fn priority(&self) -> u8 {
        90
    }

    fn can_apply(&self, ctx: &ParsingContext) -> bool {
        PRECHECK.is_match(&ctx.file_stem)
    }

    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult> {
        let caps = TV_SXX_EXX.captures(&ctx.file_stem)?;

        let title = normalize_separators(&caps[1]);
        let year = caps
            .get(2)
            .and_then(|m| m.as_str().parse::<u16>().ok())
            .and_then(valid_year);
        let season: u16 = caps[3].parse().ok()?;
        let episode: u16 = caps[4].parse().ok()?;

        tracing::debug!(
            "TV match (SxxExx): {} -> title={}, S{}E{}",
            ctx.file_stem,
            title,
            season,
            episode
        );

        Some(ParseResult {
            media_kind: MediaKind::TvShow,
            title,
            year,
            season: Some(season),
            episode: Some(episode),
            confidence: 0.95,
            strategy: self.name(),
        })
    }
}
