//! Media-kind enums shared across the crate.

use serde::{Deserialize, Serialize};

/// Classification of a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    TvShow,
    Unknown,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::TvShow => write!(f, "tvshow"),
            MediaKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// User-declared media kind for a scan.
///
/// `Mixed` (or leaving the kind unset) puts the engine in auto mode, where
/// every strategy competes on confidence. `Movie`/`TvShow` restrict the
/// strategy set to that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PreferredKind {
    Movie,
    TvShow,
    Mixed,
}

impl std::fmt::Display for PreferredKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferredKind::Movie => write!(f, "movie"),
            PreferredKind::TvShow => write!(f, "tvshow"),
            PreferredKind::Mixed => write!(f, "mixed"),
        }
    }
}
