//! Flexible movie strategy.
//!
//! Tries several movie naming conventions, most specific first:
//!
//! 1. parenthesized year: `The.Dark.Knight.(2008).mkv` (0.95)
//! 2. separator-embedded year: `Inception.2010.1080p.BluRay.mkv` (0.90)
//! 3. technical tag with no year, forced-movie mode only:
//!    `Inception.1080p.BluRay.mkv` (0.70)
//! 4. literal filename, forced-movie mode only (0.30)
//!
//! Filenames that look like any TV episode pattern are rejected up front to
//! avoid false positives on embedded numbers, and a year or technical tag is
//! required before the strategy applies at all, forced mode included.

use super::{normalize_separators, Strategy};
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::{valid_year, ParseResult};
use regex::Regex;
use std::sync::LazyLock;

static MOVIE_PAREN_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)[.\s_-]*\((\d{4})\).*$").unwrap());

static MOVIE_EMBEDDED_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.+?)[.\s_-]+(\d{4})[.\s_-]+.*$").unwrap());

static MOVIE_TECH_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)[.\s_-]+(1080p|720p|2160p|4K|UHD|BluRay|WEB-DL|HDRip|BRRip|DVDRip).*$")
        .unwrap()
});

static LOOKS_LIKE_TV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S\d{1,2}E\d{1,3}|\d{1,2}x\d{1,3}|\be\d{1,3}\b").unwrap());

static HAS_MOVIE_SIGNAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d{4}|1080p|720p|4K|BluRay|WEB-DL|HDRip").unwrap());

pub struct FlexibleMovie;

impl FlexibleMovie {
    fn movie_result(&self, title: String, year: Option<u16>, confidence: f32) -> ParseResult {
        ParseResult {
            media_kind: MediaKind::Movie,
            title,
            year,
            season: None,
            episode: None,
            confidence,
            strategy: self.name(),
        }
    }

    /// `Title (Year)` form.
    fn try_paren_year(&self, stem: &str) -> Option<ParseResult> {
        let caps = MOVIE_PAREN_YEAR.captures(stem)?;
        let year = valid_year(caps[2].parse().ok()?)?;
        Some(self.movie_result(normalize_separators(&caps[1]), Some(year), 0.95))
    }

    /// `Title.Year.rest` form.
    fn try_embedded_year(&self, stem: &str) -> Option<ParseResult> {
        let caps = MOVIE_EMBEDDED_YEAR.captures(stem)?;
        let year = valid_year(caps[2].parse().ok()?)?;
        Some(self.movie_result(normalize_separators(&caps[1]), Some(year), 0.90))
    }

    /// `Title.1080p...` form, no year. Weak signal, forced mode only.
    fn try_tech_tag(&self, stem: &str) -> Option<ParseResult> {
        let caps = MOVIE_TECH_TAG.captures(stem)?;
        Some(self.movie_result(normalize_separators(&caps[1]), None, 0.70))
    }
}

impl Strategy for FlexibleMovie {
    fn name(&self) -> &'static str {
        "flexible_movie"
    }

    fn supported_kind(&self) -> MediaKind {
        MediaKind::Movie
    }

    fn priority(&self) -> u8 {
        50
    }

    fn can_apply(&self, ctx: &ParsingContext) -> bool {
        // Reject anything resembling a TV episode marker. A year or
        // technical tag is required even in forced-movie mode; names with
        // neither are left to the engine's fallback.
        if LOOKS_LIKE_TV.is_match(&ctx.file_stem) {
            return false;
        }
        HAS_MOVIE_SIGNAL.is_match(&ctx.file_stem)
    }

    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult> {
        let stem = &ctx.file_stem;

        if let Some(result) = self.try_paren_year(stem) {
            tracing::debug!(
                "Movie match (paren year): {} -> title={}, year={:?}",
                stem,
                result.title,
                result.year
            );
            return Some(result);
        }

        if let Some(result) = self.try_embedded_year(stem) {
            tracing::debug!(
                "Movie match (embedded year): {} -> title={}, year={:?}",
                stem,
                result.title,
                result.year
            );
            return Some(result);
        }

        if ctx.is_forced_movie() {
            if let Some(result) = self.try_tech_tag(stem) {
                tracing::debug!("Movie match (tech tag): {} -> title={}", stem, result.title);
                return Some(result);
            }

            // Forced mode never fails outright: the filename itself is a
            // usable, if weak, search term.
            tracing::debug!("Movie fallback to literal filename: {}", stem);
            return Some(self.movie_result(stem.to_string(), None, 0.30));
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::PreferredKind;

    fn parse(name: &str) -> Option<ParseResult> {
        let ctx = ParsingContext::from_file_name(name);
        FlexibleMovie
            .can_apply(&ctx)
            .then(|| FlexibleMovie.try_parse(&ctx))
            .flatten()
    }

    fn parse_forced(name: &str) -> Option<ParseResult> {
        let ctx = ParsingContext {
            preferred_kind: Some(PreferredKind::Movie),
            ..ParsingContext::from_file_name(name)
        };
        FlexibleMovie
            .can_apply(&ctx)
            .then(|| FlexibleMovie.try_parse(&ctx))
            .flatten()
    }

    #[test]
    fn test_paren_year() {
        let result = parse("The.Dark.Knight.(2008).mkv").unwrap();
        assert_eq!(result.title, "The Dark Knight");
        assert_eq!(result.year, Some(2008));
        assert_eq!(result.confidence, 0.95);
    }

    #[test]
    fn test_embedded_year() {
        let result = parse("Inception.2010.1080p.BluRay.mkv").unwrap();
        assert_eq!(result.title, "Inception");
        assert_eq!(result.year, Some(2010));
        assert_eq!(result.confidence, 0.90);
    }

    #[test]
    fn test_year_out_of_range_rejected() {
        // 0815 is not a plausible release year.
        assert!(parse("Odd.Numbers.0815.1080p.mkv").is_none());
    }

    #[test]
    fn test_tech_tag_requires_forced_mode() {
        assert!(parse("Inception.1080p.BluRay.mkv").is_none());

        let result = parse_forced("Inception.1080p.BluRay.mkv").unwrap();
        assert_eq!(result.title, "Inception");
        assert_eq!(result.year, None);
        assert_eq!(result.confidence, 0.70);
    }

    #[test]
    fn test_forced_mode_literal_fallback() {
        // Year signal present, but no pattern captures it as a movie form.
        let result = parse_forced("Movie.2010.mkv").unwrap();
        assert_eq!(result.title, "Movie.2010");
        assert_eq!(result.confidence, 0.30);
    }

    #[test]
    fn test_forced_mode_requires_movie_signal() {
        // No year or technical tag: the strategy declines even when forced.
        assert!(parse_forced("obscure_home_video.mkv").is_none());
    }

    #[test]
    fn test_tv_markers_rejected() {
        assert!(parse("Show.S01E02.1080p.mkv").is_none());
        assert!(parse("Show.2x05.mkv").is_none());
        assert!(parse("Show.E07.1080p.mkv").is_none());
        // Even under forced-movie mode the pre-check rejects TV shapes.
        assert!(parse_forced("Show.S01E02.1080p.mkv").is_none());
    }
}
