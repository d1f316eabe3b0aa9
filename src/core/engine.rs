//! Identification engine.
//!
//! Holds the strategy set sorted once by descending priority and arbitrates
//! among them. `identify` is total: every call returns a concrete result,
//! bottoming out in low-confidence fallbacks when nothing matches.

use crate::core::strategies::{default_strategies, Strategy};
use crate::core::{season, title};
use crate::models::context::ParsingContext;
use crate::models::media::MediaKind;
use crate::models::result::ParseResult;
use std::cmp::Reverse;

/// Confidence at or above which the auto-mode scan stops early. Reserved for
/// the highest-certainty strategies, so stopping never discards a better
/// result.
const SHORT_CIRCUIT_CONFIDENCE: f32 = 0.9;

/// Confidence assigned to forced-mode fallback results.
const FALLBACK_CONFIDENCE: f32 = 0.2;

/// Stateless classification engine. Safe to share across threads.
pub struct IdentificationEngine {
    strategies: Vec<Box<dyn Strategy>>,
}

impl IdentificationEngine {
    /// Build the engine with the default strategy set.
    pub fn new() -> Self {
        Self::with_strategies(default_strategies())
    }

    /// Build the engine from an explicit strategy set.
    ///
    /// Strategies are sorted by descending priority; equal priorities fall
    /// back to name order so dispatch stays deterministic.
    pub fn with_strategies(mut strategies: Vec<Box<dyn Strategy>>) -> Self {
        strategies.sort_by_key(|s| (Reverse(s.priority()), s.name()));

        tracing::debug!("Registered {} strategies:", strategies.len());
        for strategy in &strategies {
            tracing::debug!(
                "  - {} (priority={}, kind={})",
                strategy.name(),
                strategy.priority(),
                strategy.supported_kind()
            );
        }

        Self { strategies }
    }

    /// Classify one file.
    pub fn identify(&self, ctx: &ParsingContext) -> ParseResult {
        tracing::debug!("Identifying: {}", ctx.file_name);

        let mut result = if ctx.is_forced_movie() {
            self.identify_forced(ctx, MediaKind::Movie)
        } else if ctx.is_forced_tv() {
            self.identify_forced(ctx, MediaKind::TvShow)
        } else {
            self.identify_auto(ctx)
        };

        if !result.title.is_empty() {
            result.title = title::clean(&result.title);
        }

        if result.is_low_confidence() {
            tracing::debug!(
                "Low-confidence fallback for {}: {} ({:.2})",
                ctx.file_name,
                result.strategy,
                result.confidence
            );
        }

        result
    }

    /// Forced mode: only strategies of the requested kind run, first success
    /// wins.
    fn identify_forced(&self, ctx: &ParsingContext, kind: MediaKind) -> ParseResult {
        for strategy in &self.strategies {
            if strategy.supported_kind() != kind || !strategy.can_apply(ctx) {
                continue;
            }

            if let Some(result) = strategy.try_parse(ctx) {
                tracing::debug!(
                    "Forced-{} match: strategy={}, confidence={:.2}",
                    kind,
                    result.strategy,
                    result.confidence
                );
                return result;
            }
        }

        self.forced_fallback(ctx, kind)
    }

    /// Auto mode: every strategy competes; the best confidence wins, and a
    /// result at or above [`SHORT_CIRCUIT_CONFIDENCE`] returns immediately.
    fn identify_auto(&self, ctx: &ParsingContext) -> ParseResult {
        let mut best: Option<ParseResult> = None;

        for strategy in &self.strategies {
            if !strategy.can_apply(ctx) {
                continue;
            }

            let Some(result) = strategy.try_parse(ctx) else {
                continue;
            };

            tracing::debug!(
                "Candidate: strategy={}, kind={}, confidence={:.2}",
                result.strategy,
                result.media_kind,
                result.confidence
            );

            if result.confidence >= SHORT_CIRCUIT_CONFIDENCE {
                return result;
            }

            if best
                .as_ref()
                .map_or(true, |b| result.confidence > b.confidence)
            {
                best = Some(result);
            }
        }

        best.unwrap_or_else(|| ParseResult::unknown(&ctx.file_stem))
    }

    /// Synthesize a result when forced mode found no match at all.
    fn forced_fallback(&self, ctx: &ParsingContext, kind: MediaKind) -> ParseResult {
        let season = if kind == MediaKind::TvShow {
            self.infer_fallback_season(ctx)
        } else {
            None
        };

        ParseResult {
            media_kind: kind,
            title: ctx.file_stem.clone(),
            year: None,
            season,
            episode: None,
            confidence: FALLBACK_CONFIDENCE,
            strategy: "fallback",
        }
    }

    /// Season for the forced-TV fallback: the parent season folder when there
    /// is one, else 1 when a series name was detected, else unset.
    fn infer_fallback_season(&self, ctx: &ParsingContext) -> Option<u16> {
        if ctx.parent_is_season_folder {
            if let Some(info) = ctx
                .parent_directory
                .as_deref()
                .and_then(season::parse_season_folder)
            {
                return Some(info.number);
            }
        }

        ctx.series_name().map(|_| 1)
    }
}

impl Default for IdentificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        name: &'static str,
        priority: u8,
    }

    impl Strategy for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn supported_kind(&self) -> MediaKind {
            MediaKind::Movie
        }
        fn priority(&self) -> u8 {
            self.priority
        }
        fn can_apply(&self, _: &ParsingContext) -> bool {
            false
        }
        fn try_parse(&self, _: &ParsingContext) -> Option<ParseResult> {
            None
        }
    }

    #[test]
    fn test_sort_is_priority_then_name() {
        let engine = IdentificationEngine::with_strategies(vec![
            Box::new(Fixed { name: "zeta", priority: 50 }),
            Box::new(Fixed { name: "alpha", priority: 50 }),
            Box::new(Fixed { name: "low", priority: 10 }),
            Box::new(Fixed { name: "high", priority: 90 }),
        ]);

        let order: Vec<&str> = engine.strategies.iter().map(|s| s.name()).collect();
        assert_eq!(order, vec!["high", "alpha", "zeta", "low"]);
    }

    #[test]
    fn test_default_strategy_order() {
        let engine = IdentificationEngine::new();
        let order: Vec<&str> = engine.strategies.iter().map(|s| s.name()).collect();
        assert_eq!(
            order,
            vec![
                "standard_tv",
                "hyphen_tv",
                "bracket_tv",
                "season_episode_tv",
                "episode_number_tv",
                "flexible_movie",
                "episode_only_tv",
            ]
        );
    }
}
