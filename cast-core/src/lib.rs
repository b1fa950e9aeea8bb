//! # Cast Core
//!
//! Scoring and analytics utilities for the 0xCast prediction market front end.
//!
//! Every function here is a pure calculation over caller-supplied values:
//! - **Trending score**: weighted activity decayed linearly over 30 days
//! - **Risk score**: volatility, illiquidity and time-to-end combined into 0-100
//! - **Leveling**: experience points to user level and next-level threshold
//! - **Recommendations**: candidate markets ranked by the user's category affinity
//! - **Comparison**: delta, percentage change and trend between two samples
//!
//! Results decorate market data for display; no function performs I/O or
//! keeps state between calls.
//!
//! ## Examples
//!
//! ```rust
//! use cast_core::{compare, level, risk_score, RiskInput, Trend};
//!
//! assert_eq!(level(0), 1);
//! assert_eq!(level(400), 3);
//!
//! let risk = risk_score(&RiskInput {
//!     volatility: 1.0,
//!     liquidity: 0.0,
//!     time_to_end_ms: 2_592_000_000.0,
//! });
//! assert_eq!(risk, 100.0);
//!
//! let volume = compare(150.0, 100.0);
//! assert_eq!(volume.change_percent, Some(50.0));
//! assert_eq!(volume.trend, Trend::Up);
//! ```

pub mod compare;
pub mod config;
pub mod display;
pub mod error;
pub mod leveling;
pub mod market;
pub mod recommend;
pub mod risk;
pub mod scorer;
pub mod trending;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use compare::{compare, percentage_change, MetricValue, Trend};
pub use config::ScoringConfig;
pub use display::{build_leaderboard, LeaderboardEntry, PlatformComparison, PlatformMetrics, UserStats};
pub use error::{Result, ScoringError};
pub use leveling::{level, xp_for_next_level, LevelProgress};
pub use market::{Categorized, MarketSnapshot, RiskInput, TrendingInput};
pub use recommend::{category_affinity, parse_history, recommend, HistoryEntry};
pub use risk::{risk_score, RiskLevel};
pub use scorer::MarketScorer;
pub use trending::{rank_trending, trending_score, TrendingMarket};
