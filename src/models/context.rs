//! Parsing context model.
//!
//! A `ParsingContext` bundles everything the identification engine is allowed
//! to look at for one file: the filename itself plus the names of the two
//! enclosing directories. It is built once per file by the scanner and never
//! mutated afterwards.

use crate::models::media::PreferredKind;
use serde::{Deserialize, Serialize};

/// Immutable input bundle for one classification call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsingContext {
    /// Original filename, extension included.
    pub file_name: String,
    /// Filename without its extension.
    pub file_stem: String,
    /// Extension without the dot (empty if the file has none).
    pub extension: String,
    /// Name of the directory containing the file.
    pub parent_directory: Option<String>,
    /// Name of the directory above that. Unset when the parent is the
    /// scan root (never backtrack past the root).
    pub grand_parent_directory: Option<String>,
    /// User-declared media kind. `None` or `Mixed` means auto mode.
    pub preferred_kind: Option<PreferredKind>,
    /// Series name inferred from the directory structure, if any.
    pub detected_series_name: Option<String>,
    /// Whether the parent directory is a season folder.
    pub parent_is_season_folder: bool,
}

impl ParsingContext {
    /// Build a context from a bare filename, splitting the extension on the
    /// last `.`. Directory fields start unset; callers fill them with struct
    /// update syntax.
    pub fn from_file_name(file_name: &str) -> Self {
        let (stem, ext) = split_extension(file_name);
        Self {
            file_name: file_name.to_string(),
            file_stem: stem.to_string(),
            extension: ext.to_string(),
            ..Default::default()
        }
    }

    /// True if the user declared a concrete media kind (`Mixed` counts as
    /// undeclared).
    pub fn has_preferred_kind(&self) -> bool {
        matches!(
            self.preferred_kind,
            Some(PreferredKind::Movie) | Some(PreferredKind::TvShow)
        )
    }

    /// True if the user forced movie classification.
    pub fn is_forced_movie(&self) -> bool {
        self.preferred_kind == Some(PreferredKind::Movie)
    }

    /// True if the user forced TV-show classification.
    pub fn is_forced_tv(&self) -> bool {
        self.preferred_kind == Some(PreferredKind::TvShow)
    }

    /// True if every strategy may compete (no kind declared, or `Mixed`).
    pub fn is_auto(&self) -> bool {
        !self.has_preferred_kind()
    }

    /// Series name with surrounding whitespace removed, `None` if blank.
    pub fn series_name(&self) -> Option<&str> {
        self.detected_series_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Split a filename into (stem, extension) on the last dot.
///
/// A name with no dot, or one that starts with its only dot (".hidden"),
/// has an empty extension.
pub fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, ext),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("show.s01e01.mkv"), ("show.s01e01", "mkv"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
    }

    #[test]
    fn test_stem_plus_extension_roundtrip() {
        let ctx = ParsingContext::from_file_name("Breaking.Bad.S01E02.mkv");
        assert_eq!(
            format!("{}.{}", ctx.file_stem, ctx.extension),
            ctx.file_name
        );
    }

    #[test]
    fn test_mode_predicates() {
        let mut ctx = ParsingContext::from_file_name("a.mkv");
        assert!(ctx.is_auto());
        assert!(!ctx.has_preferred_kind());

        ctx.preferred_kind = Some(PreferredKind::Mixed);
        assert!(ctx.is_auto());

        ctx.preferred_kind = Some(PreferredKind::Movie);
        assert!(ctx.is_forced_movie());
        assert!(!ctx.is_auto());

        ctx.preferred_kind = Some(PreferredKind::TvShow);
        assert!(ctx.is_forced_tv());
    }

    #[test]
    fn test_series_name_blank_is_none() {
        let mut ctx = ParsingContext::from_file_name("01.mkv");
        ctx.detected_series_name = Some("   ".to_string());
        assert!(ctx.series_name().is_none());

        ctx.detected_series_name = Some(" MyShow ".to_string());
        assert_eq!(ctx.series_name(), Some("MyShow"));
    }
}
