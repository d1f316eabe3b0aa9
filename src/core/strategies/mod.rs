//! Classification strategies.
//!
//! Each strategy is a stateless rule for one family of filename formats. The
//! set is closed and known at compile time, so the engine holds a statically
//! constructed list of trait objects rather than any kind of runtime
//! registry.

pub mod bracket_tv;
pub mod episode_number_tv;
pub mod episode_only_tv;
pub mod flexible_movie;
pub mod hyphen_tv;
pub mod season_episode_tv;
pub mod standard_tv;

use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::ParseResult;

/// A single filename-classification rule.
///
/// Strategies carry no state and are safe to share across threads. A
/// strategy that cannot match its pattern returns `None` from `try_parse`;
/// that is the only failure signal the engine understands.
pub trait Strategy: Send + Sync {
    /// Strategy name, for diagnostics and deterministic tie-breaking.
    fn name(&self) -> &'static str;

    /// The media kind this strategy can produce.
    fn supported_kind(&self) -> MediaKind;

    /// Dispatch priority; higher runs first.
    fn priority(&self) -> u8;

    /// Cheap pre-check to skip full pattern matching when the context
    /// obviously cannot fit.
    fn can_apply(&self, ctx: &ParsingContext) -> bool;

    /// Attempt to parse the context.
    fn try_parse(&self, ctx: &ParsingContext) -> Option<ParseResult>;
}

/// The full strategy set, in registration order. The engine sorts it by
/// priority at construction.
pub fn default_strategies() -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(standard_tv::StandardTv),
        Box::new(bracket_tv::BracketTv),
        Box::new(hyphen_tv::HyphenTv),
        Box::new(season_episode_tv::SeasonEpisodeTv),
        Box::new(episode_number_tv::EpisodeNumberTv),
        Box::new(episode_only_tv::EpisodeOnlyTv),
        Box::new(flexible_movie::FlexibleMovie),
    ]
}

/// Collapse runs of separator characters (`.`, `_`, `-`, whitespace) in a
/// captured title into single spaces.
pub(crate) fn normalize_separators(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_separator = false;

    for c in title.chars() {
        if c == '.' || c == '_' || c == '-' || c.is_whitespace() {
            in_separator = true;
        } else {
            if in_separator && !out.is_empty() {
                out.push(' ');
            }
            in_separator = false;
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_separators("Breaking.Bad"), "Breaking Bad");
        assert_eq!(normalize_separators("a__b--c d"), "a b c d");
        assert_eq!(normalize_separators(".leading.and.trailing."), "leading and trailing");
        assert_eq!(normalize_separators("无间道"), "无间道");
    }
}
