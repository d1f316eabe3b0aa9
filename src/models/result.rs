//! Parse result model.

use crate::models::media::MediaKind;
use serde::Serialize;

/// Outcome of one classification.
///
/// Strategies that cannot match their pattern return `None` from
/// `try_parse`; every `ParseResult` that exists describes a match. The
/// engine itself is total and always produces one, falling back to a
/// low-confidence guess when nothing matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseResult {
    /// Inferred media kind.
    pub media_kind: MediaKind,
    /// Extracted title (normalized centrally by the engine).
    pub title: String,
    /// Release year, 1900..=2099 when present.
    pub year: Option<u16>,
    /// Season number. 0 is valid and reserved for specials.
    pub season: Option<u16>,
    /// Episode number.
    pub episode: Option<u16>,
    /// Certainty of this interpretation, 0.0..=1.0. Used only for ranking.
    pub confidence: f32,
    /// Name of the strategy that produced the result, for diagnostics.
    pub strategy: &'static str,
}

impl ParseResult {
    /// Low-confidence result for a file no strategy could classify.
    pub fn unknown(title: &str) -> Self {
        Self {
            media_kind: MediaKind::Unknown,
            title: title.to_string(),
            year: None,
            season: None,
            episode: None,
            confidence: 0.1,
            strategy: "fallback",
        }
    }

    /// True when the engine had to guess (fallback or unknown path).
    pub fn is_low_confidence(&self) -> bool {
        self.confidence <= 0.3
    }
}

/// Validate a captured year against the supported range.
///
/// Out-of-range captures fail the sub-pattern that produced them instead of
/// leaking an invalid field into a result.
pub fn valid_year(year: u16) -> Option<u16> {
    (1900..=2099).contains(&year).then_some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_result() {
        let result = ParseResult::unknown("raw.file.name");
        assert_eq!(result.media_kind, MediaKind::Unknown);
        assert_eq!(result.title, "raw.file.name");
        assert!(result.is_low_confidence());
    }

    #[test]
    fn test_valid_year_range() {
        assert_eq!(valid_year(1900), Some(1900));
        assert_eq!(valid_year(2099), Some(2099));
        assert_eq!(valid_year(1899), None);
        assert_eq!(valid_year(2100), None);
    }
}
