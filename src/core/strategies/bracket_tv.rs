//! Bracketed episode-marker TV strategy.
//!
//! Formats:
//! - `Show [S01E01].mkv`
//! - `Show.[1x01].mkv`

use super::{normalize_separators, Strategy};
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::ParseResult;
use regex::Regex;
use std::sync::LazyLock;

static TV_BRACKET_SXX_EXX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)[.\s_-]*\[S(\d{1,2})E(\d{1,3})\].*$").unwrap());

static TV_BRACKET_CROSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)[.\s_-]*\[(\d{1,2})x(\d{1,3})\].*$").unwrap());

static PRECHECK_SXX_EXX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[.*[se]\d+.*\]").unwrap());

static PRECHECK_CROSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[\d{1,2}x\d{1,3}\]").unwrap());

pub struct BracketTv;

impl BracketTv {
    fn build(&self, caps: &regex::Captures<'_>) -> Option<ParseResult> {
        let title = normalize_separators(&caps[1]);
        let season: u16 = caps[2].parse().ok()?;
        let episode: u16 = caps[3].parse().ok()?;

        Some(ParseResult {
            media_kind: MediaKind::TvShow,
            title,
            year: None,
            season: Some(season),
            episode: Some(episode),
            confidence: 0.88,
            strategy: self.name(),
        })
    }
}

impl Strategy for BracketTv {
    fn name(&self) -> &'static str {
        "bracket_tv"
    }

    fn supported_kind(&self) -> MediaKind {
        MediaKind::TvShow
    }

    fn priority(&self) -> u8 {
        82
    }

    fn can_apply(&self, ctx: &ParsingContext) -> bool {
        PRECHECK_SXX_EXX.is_match(&ctx.file_stem) || PRECHECK_CROSS.is_match(&ctx.file_stem)
    }

    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult> {
        if let Some(caps) = TV_BRACKET_SXX_EXX.captures(&ctx.file_stem) {
            let result = self.build(&caps)?;
            tracing::debug!(
                "TV match (bracket SxxExx): {} -> title={}, S{:?}E{:?}",
                ctx.file_stem,
                result.title,
                result.season,
                result.episode
            );
            return Some(result);
        }

        if let Some(caps) = TV_BRACKET_CROSS.captures(&ctx.file_stem) {
            let result = self.build(&caps)?;
            tracing::debug!(
                "TV match (bracket 1x01): {} -> title={}, S{:?}E{:?}",
                ctx.file_stem,
                result.title,
                result.season,
                result.episode
            );
            return Some(result);
        }

        None
    }
}
