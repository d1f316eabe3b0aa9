//! Title normalization pipeline.
//!
//! Strips the noise that release naming conventions pile onto titles:
//!
//! 1. trailing bracketed digit index (`Show [1]` → `Show`)
//! 2. book-title extraction (`[4K]《Tiny World》` → `Tiny World`)
//! 3. leading bracket tags, stripped to a fixpoint (`[4K][合集]Show` → `Show`)
//! 4. trailing technical tokens (resolution, source, codec, audio,
//!    subtitle/language markers, release groups), each removing the matched
//!    token and everything after it
//!
//! The pipeline is total and never empties a non-blank title: if everything
//! gets stripped, the original input is returned unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Cap on the strip loops, against pathological input.
const MAX_CLEANING_PASSES: usize = 10;

/// Trailing index: `[1]`, `(2)`, `【3】`.
static TAIL_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[(【]\s*\d+\s*[\])】]\s*$").unwrap());

/// Book-title quotation: `《...》`.
static BOOK_TITLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"《(.+?)》").unwrap());

/// Leading tag: `[...]` or `【...】` at the start of the string.
static HEAD_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\[【][^\]】]+[\]】]\s*").unwrap());

static RESOLUTION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(1080p|720p|2160p|4K|UHD|HD|SD|FHD|QHD)\b.*").unwrap());

static SOURCE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(BluRay|BRRip|WEB-DL|WEBRip|HDRip|DVDRip|HDTV|BDRip|Remux|REPACK|PROPER)\b.*")
        .unwrap()
});

static CODEC_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(x264|x265|H264|H265|HEVC|AVC|VP9|AV1)\b.*").unwrap());

static AUDIO_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(AAC|AC3|DTS|DD5\.1|DD2\.0|Atmos|TrueHD)\b.*").unwrap());

static SUBTITLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(中字|中英|双语|简繁|内封|外挂|SUB|字幕组|内嵌|繁体|简体|英字|日字|韩字|CHT|CHS)\b.*")
        .unwrap()
});

static RELEASE_GROUP_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[.\s_-]*[-\[(【](RARBG|YIFY|YTS|ETRG|PublicHD|FGT|EVO|ION10|SPARKS|AMZN|NF|HBO)[\])】].*")
        .unwrap()
});

/// Clean a raw title.
pub fn clean(title: &str) -> String {
    if title.trim().is_empty() {
        return title.to_string();
    }

    // Stripping a trailing technical block can expose another trailing
    // index, so the stages run to a fixpoint rather than once each.
    let mut cleaned = title.to_string();
    for _ in 0..MAX_CLEANING_PASSES {
        let pass = clean_once(&cleaned);
        if pass == cleaned {
            break;
        }
        cleaned = pass;
    }

    if cleaned.trim().is_empty() {
        tracing::debug!("Title emptied by cleaning, keeping original: {}", title);
        return title.to_string();
    }

    if cleaned != title {
        tracing::debug!("Cleaned title: {} -> {}", title, cleaned);
    }

    cleaned
}

/// One pass over the four stages.
fn clean_once(title: &str) -> String {
    let mut cleaned = strip_trailing_index(title);
    cleaned = extract_book_title(&cleaned);
    cleaned = strip_leading_tags(&cleaned);
    strip_technical_tags(&cleaned)
}

/// Remove a trailing bracketed digit index.
fn strip_trailing_index(title: &str) -> String {
    TAIL_INDEX.replace(title, "").trim().to_string()
}

/// Replace the whole string with the `《...》` content when the string starts
/// with a bracket tag. This override wins over the rest of the pipeline.
fn extract_book_title(title: &str) -> String {
    if (title.starts_with('[') || title.starts_with('【')) && title.contains('《') {
        if let Some(caps) = BOOK_TITLE.captures(title) {
            let quoted = caps[1].trim();
            if !quoted.is_empty() {
                return quoted.to_string();
            }
        }
    }
    title.to_string()
}

/// Strip leading bracket tags until none remain, capped at
/// [`MAX_CLEANING_PASSES`] iterations.
fn strip_leading_tags(title: &str) -> String {
    let mut cleaned = title.to_string();

    for _ in 0..MAX_CLEANING_PASSES {
        let stripped = HEAD_TAG.replace(&cleaned, "").trim().to_string();
        if stripped == cleaned {
            break;
        }
        cleaned = stripped;
    }

    cleaned
}

/// Strip trailing technical vocabulary, one category at a time. Each match
/// removes the token and everything after it; technical tags are assumed to
/// appear as a trailing block.
fn strip_technical_tags(title: &str) -> String {
    let mut cleaned = title.to_string();

    for tag in [
        &RESOLUTION_TAG,
        &SOURCE_TAG,
        &CODEC_TAG,
        &AUDIO_TAG,
        &SUBTITLE_TAG,
        &RELEASE_GROUP_TAG,
    ] {
        cleaned = tag.replace(&cleaned, "").trim().to_string();
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_index() {
        assert_eq!(clean("Show [1]"), "Show");
        assert_eq!(clean("剧名【3】"), "剧名");
        assert_eq!(clean("Show (2)"), "Show");
    }

    #[test]
    fn test_book_title_extraction() {
        assert_eq!(clean("[4K]《Tiny World》"), "Tiny World");
        assert_eq!(clean("【合集】《微观世界》第一季"), "微观世界");
    }

    #[test]
    fn test_book_title_requires_leading_tag() {
        // Without a leading bracket tag the quotation is left alone.
        assert_eq!(clean("微观《世界》"), "微观《世界》");
    }

    #[test]
    fn test_strip_leading_tags() {
        assert_eq!(clean("[4K]Show"), "Show");
        assert_eq!(clean("[4K][HDR]【字幕】Show"), "Show");
    }

    #[test]
    fn test_strip_technical_tags() {
        assert_eq!(clean("Inception 1080p BluRay x264"), "Inception");
        assert_eq!(clean("Movie BluRay"), "Movie");
        assert_eq!(clean("Show 中字"), "Show");
        assert_eq!(clean("Movie 2160p AAC"), "Movie");
    }

    #[test]
    fn test_release_group() {
        assert_eq!(clean("Movie [RARBG]"), "Movie");
        assert_eq!(clean("Movie -[YIFY]"), "Movie");
    }

    #[test]
    fn test_never_empties_nonblank_input() {
        // A title that is nothing but a technical tag survives unchanged.
        assert_eq!(clean("1080p"), "1080p");
        assert_eq!(clean("[4K]"), "[4K]");
    }

    #[test]
    fn test_blank_input_unchanged() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   "), "   ");
    }

    #[test]
    fn test_index_behind_technical_block() {
        // The technical block hides the trailing index on the first pass.
        assert_eq!(clean("Show [2] 1080p"), "Show");
        assert_eq!(clean("剧名【3】 BluRay 中字"), "剧名");
    }

    #[test]
    fn test_idempotent() {
        for title in [
            "Show [2] 1080p",
            "Show [1]",
            "[4K]《Tiny World》",
            "[4K][HDR]Show",
            "Inception 1080p BluRay x264",
            "Plain Title",
            "1080p",
        ] {
            let once = clean(title);
            assert_eq!(clean(&once), once, "not idempotent for {title:?}");
        }
    }
}
