//! Directory scanner.
//!
//! Walks a directory tree, filters for video files, and builds one
//! [`ParsingContext`] per file: stem/extension split, parent and grandparent
//! directory names subject to the scan-root boundary rule, season-folder
//! flag, and series-name inference.
//!
//! The engine itself never touches the filesystem; this module is the
//! collaborator that feeds it.

use crate::core::season;
use crate::models::context::{split_extension, ParsingContext};
use crate::models::media::PreferredKind;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &[
    // Common formats
    "mkv", "mp4", "avi", "mov", "wmv", // Additional formats
    "m4v", "ts", "m2ts", "flv", "webm", // Less common but supported
    "mpg", "mpeg", "vob", "rm", "rmvb", "3gp", "asf", "f4v",
];

/// A discovered video file with its prepared classification context.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// Context ready to hand to the engine.
    pub context: ParsingContext,
}

/// Builds parsing contexts for every video file under a scan root.
pub struct ContextScanner {
    root: PathBuf,
    preferred_kind: Option<PreferredKind>,
    extra_extensions: Vec<String>,
}

impl ContextScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            preferred_kind: None,
            extra_extensions: Vec::new(),
        }
    }

    /// Declare a media kind that every built context carries.
    pub fn with_preferred_kind(mut self, kind: Option<PreferredKind>) -> Self {
        self.preferred_kind = kind;
        self
    }

    /// Recognize additional video extensions beyond the built-in list.
    pub fn with_extra_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extra_extensions = extensions;
        self
    }

    /// Walk the tree and build a context for every video file found.
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        if !self.root.exists() {
            return Err(Error::PathNotFound(self.root.display().to_string()));
        }
        if !self.root.is_dir() {
            return Err(Error::NotADirectory(self.root.display().to_string()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry.map_err(|e| Error::Other(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non-UTF8 filename: {}", entry.path().display());
                continue;
            };

            if !self.is_video(file_name) {
                continue;
            }

            files.push(ScannedFile {
                path: entry.path().to_path_buf(),
                context: self.build_context(entry.path(), file_name),
            });
        }

        tracing::debug!(
            "Scan of {} found {} video files",
            self.root.display(),
            files.len()
        );

        Ok(files)
    }

    /// Build the classification context for one file.
    pub fn build_context(&self, path: &Path, file_name: &str) -> ParsingContext {
        let mut ctx = ParsingContext::from_file_name(file_name);
        ctx.preferred_kind = self.preferred_kind;

        let parent = path.parent();
        let parent_name = parent.and_then(dir_name);

        ctx.parent_directory = parent_name.clone();
        ctx.parent_is_season_folder = parent_name
            .as_deref()
            .map_or(false, season::is_season_folder);

        // Grandparent is only exposed when it sits strictly inside the scan
        // root; contexts never see anything at or above the root boundary.
        let grand_parent = parent.and_then(Path::parent);
        ctx.grand_parent_directory = grand_parent
            .filter(|gp| *gp != self.root && gp.starts_with(&self.root))
            .and_then(dir_name);

        ctx.detected_series_name = detect_series_name(parent_name.as_deref(), grand_parent);

        ctx
    }

    fn is_video(&self, file_name: &str) -> bool {
        let (_, ext) = split_extension(file_name);
        if ext.is_empty() {
            return false;
        }
        let ext = ext.to_lowercase();
        VIDEO_EXTENSIONS.contains(&ext.as_str())
            || self.extra_extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

/// Infer the series name from the directory structure.
///
/// A season-folder parent means the series name lives one level up; any
/// other parent names the series itself, including the scan root. When a
/// season folder has no named directory above it, its own name is the best
/// candidate available.
fn detect_series_name(parent_name: Option<&str>, grand_parent: Option<&Path>) -> Option<String> {
    let parent_name = parent_name?;

    if season::is_season_folder(parent_name) {
        if let Some(series) = grand_parent.and_then(dir_name) {
            tracing::debug!("Series from backtracking: {} -> {}", parent_name, series);
            return Some(series);
        }
    }

    Some(parent_name.to_string())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}
