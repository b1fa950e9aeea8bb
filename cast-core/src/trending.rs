//! # Trending Score
//!
//! Ranks markets by weighted activity, decayed linearly by age:
//!
//! ```text
//! age_days   = (now - created_at) / 86_400_000
//! age_factor = max(0, 1 - age_days / 30)
//! score      = (0.4 * volume + 0.3 * participants + 0.3 * recent_activity) * age_factor
//! ```
//!
//! Markets older than the decay window score zero but are never negative.
//! `now` is an explicit argument, so the score is deterministic for a fixed
//! clock reading.

use crate::config::TrendingConfig;
use crate::market::{MarketSnapshot, TrendingInput};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Trending score with the default weights and 30-day window.
pub fn trending_score(input: &TrendingInput, now: DateTime<Utc>) -> f64 {
    trending_score_with(&TrendingConfig::default(), input, now)
}

/// Trending score with explicit weights.
pub fn trending_score_with(
    config: &TrendingConfig,
    input: &TrendingInput,
    now: DateTime<Utc>,
) -> f64 {
    let activity = config.volume_weight * input.volume
        + config.participants_weight * input.participants
        + config.recent_activity_weight * input.recent_activity;

    activity * age_factor_with(config, input.created_at, now)
}

/// Linear age decay in `[0, 1]` for markets created in the past.
///
/// Creation times after `now` are not clamped and yield a factor above 1.
pub fn age_factor(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    age_factor_with(&TrendingConfig::default(), created_at, now)
}

pub fn age_factor_with(
    config: &TrendingConfig,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    let age_ms = (now - created_at).num_milliseconds() as f64;
    (1.0 - age_ms / config.decay_window_ms()).max(0.0)
}

/// A market paired with its trending score
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TrendingMarket<'a> {
    pub market: &'a MarketSnapshot,
    pub score: f64,
}

/// Score every market and return the `limit` highest, best first.
///
/// Markets with equal scores keep their input order. NaN scores sort last.
pub fn rank_trending<'a>(
    config: &TrendingConfig,
    markets: &'a [MarketSnapshot],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<TrendingMarket<'a>> {
    let mut ranked: Vec<TrendingMarket<'a>> = markets
        .iter()
        .map(|market| TrendingMarket {
            market,
            score: trending_score_with(config, &market.trending_input(), now),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.retain(|entry| !entry.score.is_nan());
    ranked.truncate(limit);

    debug!(
        candidates = markets.len(),
        returned = ranked.len(),
        "ranked trending markets"
    );
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_market, days_ago, reference_now};
    use chrono::Duration;

    fn input(volume: f64, participants: f64, recent: f64, age_days: i64) -> TrendingInput {
        TrendingInput {
            volume,
            participants,
            recent_activity: recent,
            created_at: days_ago(age_days),
        }
    }

    #[test]
    fn test_brand_new_market_has_full_weight() {
        let score = trending_score(&input(100.0, 10.0, 20.0, 0), reference_now());
        assert!((score - (40.0 + 3.0 + 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_half_window_halves_score() {
        let fresh = trending_score(&input(100.0, 10.0, 20.0, 0), reference_now());
        let half = trending_score(&input(100.0, 10.0, 20.0, 15), reference_now());
        assert!((half - fresh / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_old_markets_score_zero_not_negative() {
        assert_eq!(trending_score(&input(100.0, 10.0, 20.0, 30), reference_now()), 0.0);
        assert_eq!(trending_score(&input(100.0, 10.0, 20.0, 365), reference_now()), 0.0);
    }

    #[test]
    fn test_age_factor_bounds() {
        let now = reference_now();
        assert_eq!(age_factor(now, now), 1.0);
        assert_eq!(age_factor(now - Duration::days(45), now), 0.0);
        assert!(age_factor(now + Duration::days(3), now) > 1.0);
    }

    #[test]
    fn test_custom_window() {
        let config = TrendingConfig {
            decay_window_days: 10.0,
            ..TrendingConfig::default()
        };
        let now = reference_now();
        assert!((age_factor_with(&config, days_ago(5), now) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_rank_orders_and_truncates() {
        let markets = vec![
            create_test_market("old", "sports", 1000.0, 40),
            create_test_market("small", "tech", 10.0, 1),
            create_test_market("big", "politics", 500.0, 1),
            create_test_market("mid", "sports", 100.0, 1),
        ];

        let ranked = rank_trending(&TrendingConfig::default(), &markets, reference_now(), 2);
        let ids: Vec<&str> = ranked.iter().map(|r| r.market.id.as_str()).collect();
        assert_eq!(ids, vec!["big", "mid"]);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_rank_keeps_zero_scores() {
        let markets = vec![
            create_test_market("expired", "sports", 100.0, 60),
            create_test_market("fresh", "tech", 100.0, 1),
        ];
        let ranked = rank_trending(&TrendingConfig::default(), &markets, reference_now(), 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].market.id, "expired");
        assert_eq!(ranked[1].score, 0.0);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let markets = vec![
            create_test_market("first", "sports", 100.0, 2),
            create_test_market("second", "tech", 100.0, 2),
        ];
        let ranked = rank_trending(&TrendingConfig::default(), &markets, reference_now(), 10);
        assert_eq!(ranked[0].market.id, "first");
        assert_eq!(ranked[1].market.id, "second");
    }
}
