//! `E##` / `EP##` TV strategy (title carried in the filename).
//!
//! Formats:
//! - `不眠日.E01.mp4`
//! - `ShowName.EP03.mkv`
//! - `Show.E10.1080p.mkv`
//!
//! The season is not part of the format, so it defaults to 1.

use super::{normalize_separators, Strategy};
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::ParseResult;
use regex::Regex;
use std::sync::LazyLock;

static TV_E_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)[.\s_-]+EP?(\d{1,3}).*$").unwrap());

static PRECHECK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bep?\d{1,3}\b").unwrap());

pub struct EpisodeNumberTv;

impl Strategy for EpisodeNumberTv {
    fn name(&self) -> &'static str {
        "episode_number_tv"
    }

    fn supported_kind(&self) -> MediaKind {
        MediaKind::TvShow
    }

    fn priority(&self) -> u8 {
        70
    }

    fn can_apply(&self, ctx: &ParsingContext) -> bool {
        PRECHECK.is_match(&ctx.file_stem)
    }

    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult> {
        let caps = TV_E_FORMAT.captures(&ctx.file_stem)?;

        let title = normalize_separators(&caps[1]);
        let episode: u16 = caps[2].parse().ok()?;

        tracing::debug!(
            "TV match (E##): {} -> title={}, E{}",
            ctx.file_stem,
            title,
            episode
        );

        Some(ParseResult {
            media_kind: MediaKind::TvShow,
            title,
            year: None,
            season: Some(1),
            episode: Some(episode),
            confidence: 0.75,
            strategy: self.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> Option<ParseResult> {
        let ctx = ParsingContext::from_file_name(name);
        EpisodeNumberTv
            .can_apply(&ctx)
            .then(|| EpisodeNumberTv.try_parse(&ctx))
            .flatten()
    }

    #[test]
    fn test_e_format() {
        let result = parse("不眠日.E01.mp4").unwrap();
        assert_eq!(result.title, "不眠日");
        assert_eq!(result.season, Some(1));
        assert_eq!(result.episode, Some(1));
        assert_eq!(result.confidence, 0.75);
    }

    #[test]
    fn test_ep_format() {
        let result = parse("ShowName.EP03.mkv").unwrap();
        assert_eq!(result.title, "ShowName");
        assert_eq!(result.episode, Some(3));
    }

    #[test]
    fn test_trailing_tags_ignored() {
        let result = parse("Show.E10.1080p.mkv").unwrap();
        assert_eq!(result.episode, Some(10));
    }

    #[test]
    fn test_no_marker() {
        assert!(parse("Show.2020.mkv").is_none());
    }
}
