//! `1x01` cross-notation TV strategy.
//!
//! Formats:
//! - `Breaking.Bad.1x01.mkv`
//! - `Show.10x05.mkv`

use super::{normalize_separators, Strategy};
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::ParseResult;
use regex::Regex;
use std::sync::LazyLock;

static TV_CROSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)[.\s_-]+(\d{1,2})x(\d{1,3}).*$").unwrap());

static PRECHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d{1,2}x\d{1,3}").unwrap());

pub struct HyphenTv;

impl Strategy for HyphenTv {
    fn name(&self) -> &'static str {
        "hyphen_tv"
    }

    fn supported_kind(&self) -> MediaKind {
        MediaKind::TvShow
    }

    fn priority(&self) -> u8 {
        85
    }

    fn can_apply(&self, ctx: &ParsingContext) -> bool {
        PRECHECK.is_match(&ctx.file_stem)
    }

    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult> {
        let caps = TV_CROSS.captures(&ctx.file_stem)?;

        let title = normalize_separators(&caps[1]);
        let season: u16 = caps[2].parse().ok()?;
        let episode: u16 = caps[3].parse().ok()?;

        tracing::debug!(
            "TV match (1x01): {} -> title={}, {}x{}",
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
            confidence: 0.90,
            strategy: self.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> Option<ParseResult> {
        let ctx = ParsingContext::from_file_name(name);
        HyphenTv.can_apply(&ctx).then(|| HyphenTv.try_parse(&ctx)).flatten()
    }

    #[test]
    fn test_cross_notation() {
        let result = parse("Breaking.Bad.1x01.mkv").unwrap();
        assert_eq!(result.title, "Breaking Bad");
        assert_eq!(result.season, Some(1));
        assert_eq!(result.episode, Some(1));
        assert_eq!(result.confidence, 0.90);
    }

    #[test]
    fn test_double_digit_season() {
        let result = parse("Show.10x05.mkv").unwrap();
        assert_eq!(result.season, Some(10));
        assert_eq!(result.episode, Some(5));
    }

    #[test]
    fn test_no_match() {
        assert!(parse("Movie.2010.1080p.mkv").is_none());
    }
}
