//! Season-folder matcher.
//!
//! Recognizes directory names that denote an entire season (or the specials
//! bucket) of a show:
//!
//! - `Season 01`, `Season 1` (standard English)
//! - `S1`, `S02` (short form, whole-name only, never matches inside `S01E01`)
//! - `Specials`, `Special` (season 0)
//! - `第1季`, `第一季` (Chinese, Arabic digits or numerals 一..二十)

use regex::Regex;
use std::sync::LazyLock;

/// How a season folder name was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonMatchKind {
    Standard,
    Short,
    Chinese,
    Specials,
}

/// Result of a successful season-folder match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonInfo {
    /// Season number. 0 means the specials bucket.
    pub number: u16,
    /// Folder name as given, untrimmed.
    pub folder_name: String,
    /// Which pattern matched.
    pub kind: SeasonMatchKind,
}

static SEASON_STANDARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Season\s*(\d+)$").unwrap());

static SEASON_SHORT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^S(\d+)$").unwrap());

static SEASON_SPECIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Specials?$").unwrap());

static SEASON_CHINESE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^第\s*(\d+|[一二三四五六七八九十]+)\s*季$").unwrap());

/// Chinese numerals supported in `第N季` folder names. Compound numerals
/// above 二十 are out of range and yield no match.
const CHINESE_NUMERALS: &[(&str, u16)] = &[
    ("一", 1),
    ("二", 2),
    ("三", 3),
    ("四", 4),
    ("五", 5),
    ("六", 6),
    ("七", 7),
    ("八", 8),
    ("九", 9),
    ("十", 10),
    ("十一", 11),
    ("十二", 12),
    ("十三", 13),
    ("十四", 14),
    ("十五", 15),
    ("十六", 16),
    ("十七", 17),
    ("十八", 18),
    ("十九", 19),
    ("二十", 20),
];

/// Parse a directory name as a season folder.
///
/// Patterns are tried in a fixed order and the first match wins. Names that
/// match none of them (including `S01E01`-style strings and bare digits)
/// return `None`.
pub fn parse_season_folder(name: &str) -> Option<SeasonInfo> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = SEASON_STANDARD.captures(trimmed) {
        let number: u16 = caps[1].parse().ok()?;
        return Some(SeasonInfo {
            number,
            folder_name: name.to_string(),
            kind: SeasonMatchKind::Standard,
        });
    }

    if let Some(caps) = SEASON_SHORT.captures(trimmed) {
        let number: u16 = caps[1].parse().ok()?;
        return Some(SeasonInfo {
            number,
            folder_name: name.to_string(),
            kind: SeasonMatchKind::Short,
        });
    }

    if SEASON_SPECIALS.is_match(trimmed) {
        return Some(SeasonInfo {
            number: 0,
            folder_name: name.to_string(),
            kind: SeasonMatchKind::Specials,
        });
    }

    if let Some(caps) = SEASON_CHINESE.captures(trimmed) {
        // Season 0 only exists via the Specials form.
        let number = parse_chinese_number(&caps[1]).filter(|n| *n > 0)?;
        return Some(SeasonInfo {
            number,
            folder_name: name.to_string(),
            kind: SeasonMatchKind::Chinese,
        });
    }

    None
}

/// Check whether a directory name is a season folder.
pub fn is_season_folder(name: &str) -> bool {
    parse_season_folder(name).is_some()
}

/// Convert a `第N季` numeral capture to an integer.
///
/// Arabic digits parse directly; Chinese numerals go through the
/// [`CHINESE_NUMERALS`] table.
fn parse_chinese_number(numeral: &str) -> Option<u16> {
    if let Ok(n) = numeral.parse::<u16>() {
        return Some(n);
    }

    match CHINESE_NUMERALS.iter().find(|(cn, _)| *cn == numeral) {
        Some((_, n)) => Some(*n),
        None => {
            tracing::warn!("Chinese numeral out of supported range: {}", numeral);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_form() {
        let info = parse_season_folder("Season 01").unwrap();
        assert_eq!(info.number, 1);
        assert_eq!(info.kind, SeasonMatchKind::Standard);

        let info = parse_season_folder("season 12").unwrap();
        assert_eq!(info.number, 12);
    }

    #[test]
    fn test_short_form() {
        let info = parse_season_folder("S02").unwrap();
        assert_eq!(info.number, 2);
        assert_eq!(info.kind, SeasonMatchKind::Short);
    }

    #[test]
    fn test_short_form_does_not_match_episode_markers() {
        assert!(parse_season_folder("S01E01").is_none());
        assert!(parse_season_folder("Show S01").is_none());
    }

    #[test]
    fn test_specials() {
        let info = parse_season_folder("Specials").unwrap();
        assert_eq!(info.number, 0);
        assert_eq!(info.kind, SeasonMatchKind::Specials);
        assert_eq!(parse_season_folder("special").unwrap().number, 0);
    }

    #[test]
    fn test_chinese_numerals() {
        let info = parse_season_folder("第三季").unwrap();
        assert_eq!(info.number, 3);
        assert_eq!(info.kind, SeasonMatchKind::Chinese);

        assert_eq!(parse_season_folder("第2季").unwrap().number, 2);
        assert_eq!(parse_season_folder("第 10 季").unwrap().number, 10);
        assert_eq!(parse_season_folder("第二十季").unwrap().number, 20);
    }

    #[test]
    fn test_chinese_numeral_out_of_range() {
        // 二十一 is composed of supported characters but exceeds the table.
        assert!(parse_season_folder("第二十一季").is_none());
    }

    #[test]
    fn test_chinese_season_zero_rejected() {
        assert!(parse_season_folder("第0季").is_none());
    }

    #[test]
    fn test_non_season_names() {
        assert!(parse_season_folder("Season 1 - 第一季").is_none());
        assert!(parse_season_folder("01").is_none());
        assert!(parse_season_folder("Breaking Bad").is_none());
        assert!(parse_season_folder("").is_none());
        assert!(parse_season_folder("   ").is_none());
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(parse_season_folder("  Season 3  ").unwrap().number, 3);
    }
}
