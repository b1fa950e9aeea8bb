//! # Market Scorer
//!
//! Bundles a validated [`ScoringConfig`] with every scoring operation, for
//! callers that load weights from a config file. The free functions in each
//! module are equivalent to `MarketScorer::default()`.

use crate::compare::{compare_with, MetricValue};
use crate::config::ScoringConfig;
use crate::display::{build_leaderboard, LeaderboardEntry, PlatformComparison, PlatformMetrics, UserStats};
use crate::error::Result;
use crate::leveling::{level_with, xp_for_next_level_with, LevelProgress};
use crate::market::{Categorized, MarketSnapshot, RiskInput, TrendingInput};
use crate::recommend::{recommend_from_tokens, recommend_with, HistoryEntry};
use crate::risk::risk_score_with;
use crate::trending::{rank_trending, trending_score_with, TrendingMarket};
use chrono::{DateTime, Utc};

/// Scoring operations under one configuration
#[derive(Clone, Debug, Default)]
pub struct MarketScorer {
    config: ScoringConfig,
}

impl MarketScorer {
    /// Create a scorer, rejecting unusable weights.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn trending_score(&self, input: &TrendingInput, now: DateTime<Utc>) -> f64 {
        trending_score_with(&self.config.trending, input, now)
    }

    /// Highest trending markets, limited to the recommendation limit.
    pub fn rank_trending<'a>(
        &self,
        markets: &'a [MarketSnapshot],
        now: DateTime<Utc>,
    ) -> Vec<TrendingMarket<'a>> {
        rank_trending(
            &self.config.trending,
            markets,
            now,
            self.config.recommendation.limit,
        )
    }

    /// Risk score in `[0, 100]` for non-negative inputs
    pub fn risk_score(&self, input: &RiskInput) -> f64 {
        risk_score_with(&self.config.risk, input)
    }

    pub fn level(&self, xp: u64) -> u64 {
        level_with(&self.config.leveling, xp)
    }

    pub fn xp_for_next_level(&self, level: u64) -> u64 {
        xp_for_next_level_with(&self.config.leveling, level)
    }

    pub fn level_progress(&self, xp: u64) -> LevelProgress {
        LevelProgress::with_config(&self.config.leveling, xp)
    }

    pub fn recommend<'a, M: Categorized>(
        &self,
        history: &[HistoryEntry],
        candidates: &'a [M],
    ) -> Vec<&'a M> {
        recommend_with(&self.config.recommendation, history, candidates)
    }

    pub fn recommend_from_tokens<'a, M: Categorized, S: AsRef<str>>(
        &self,
        tokens: &[S],
        candidates: &'a [M],
    ) -> Vec<&'a M> {
        recommend_from_tokens(&self.config.recommendation, tokens, candidates)
    }

    pub fn compare(&self, current: f64, previous: f64) -> MetricValue {
        compare_with(&self.config.comparison, current, previous)
    }

    pub fn compare_platform(
        &self,
        current: &PlatformMetrics,
        previous: &PlatformMetrics,
    ) -> PlatformComparison {
        current.compare(previous, &self.config.comparison)
    }

    pub fn leaderboard(&self, users: &[UserStats]) -> Vec<LeaderboardEntry> {
        build_leaderboard(&self.config.leveling, users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::config::RecommendationConfig;
    use crate::leveling::level;
    use crate::risk::risk_score;
    use crate::test_utils::{create_test_market, reference_now};
    use crate::trending::trending_score;

    #[test]
    fn test_default_scorer_matches_free_functions() {
        let scorer = MarketScorer::default();
        let market = create_test_market("m", "sports", 250.0, 3);
        let now = reference_now();

        assert_eq!(
            scorer.trending_score(&market.trending_input(), now),
            trending_score(&market.trending_input(), now)
        );
        assert_eq!(scorer.risk_score(&market.risk_input()), risk_score(&market.risk_input()));
        assert_eq!(scorer.level(12_345), level(12_345));
        assert_eq!(scorer.compare(3.0, 2.0), compare(3.0, 2.0));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ScoringConfig {
            recommendation: RecommendationConfig { limit: 0 },
            ..ScoringConfig::default()
        };
        assert!(MarketScorer::new(config).is_err());
    }

    #[test]
    fn test_configured_limit_applies_to_rankings() {
        let config = ScoringConfig {
            recommendation: RecommendationConfig { limit: 2 },
            ..ScoringConfig::default()
        };
        let scorer = MarketScorer::new(config).unwrap();
        let markets: Vec<MarketSnapshot> = (0..5)
            .map(|i| create_test_market(&format!("m{i}"), "sports", 100.0 * i as f64, 1))
            .collect();

        let ranked = scorer.rank_trending(&markets, reference_now());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].market.id, "m4");

        let history = ["sports:1"];
        assert_eq!(scorer.recommend_from_tokens(&history, &markets).len(), 2);
    }
}
