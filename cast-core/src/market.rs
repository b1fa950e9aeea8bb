//! # Market Inputs
//!
//! Caller-supplied market data. `MarketSnapshot` mirrors the market record the
//! front end already holds; each scoring function reads only a narrow view of
//! it (`TrendingInput`, `RiskInput`, or the `Categorized` trait) so that a
//! change in the wider record cannot silently change a score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A market as seen by the front end at one point in time.
///
/// Values are not validated: negative or non-finite numbers are passed through
/// to the scoring functions, which degrade to NaN or out-of-range output.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Caller-assigned identifier
    #[serde(default)]
    pub id: String,

    /// Market question shown to users
    #[serde(default)]
    pub title: String,

    /// Category slug (e.g. "sports", "politics"); empty when the caller sent none
    #[serde(default)]
    pub category: String,

    /// Total traded volume
    #[serde(default)]
    pub volume: f64,

    /// Number of distinct participants
    #[serde(default)]
    pub participants: f64,

    /// Activity in the recent window (trades, comments, ...)
    #[serde(default)]
    pub recent_activity: f64,

    /// Creation time, milliseconds since the Unix epoch on the wire.
    /// Defaults to the epoch, which scores no trending age bonus.
    #[serde(default, with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// Price volatility, expected on a 0-1 scale
    #[serde(default)]
    pub volatility: f64,

    /// Available liquidity
    #[serde(default)]
    pub liquidity: f64,

    /// Milliseconds until the market closes
    #[serde(default)]
    pub time_to_end_ms: f64,
}

/// Fields read by the trending score
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendingInput {
    pub volume: f64,
    pub participants: f64,
    pub recent_activity: f64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

/// Fields read by the risk score
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskInput {
    pub volatility: f64,
    pub liquidity: f64,
    pub time_to_end_ms: f64,
}

/// Anything that belongs to a market category.
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for MarketSnapshot {
    fn category(&self) -> &str {
        &self.category
    }
}

impl<T: Categorized + ?Sized> Categorized for &T {
    fn category(&self) -> &str {
        (**self).category()
    }
}

impl MarketSnapshot {
    /// View used by the trending score
    pub fn trending_input(&self) -> TrendingInput {
        TrendingInput {
            volume: self.volume,
            participants: self.participants,
            recent_activity: self.recent_activity,
            created_at: self.created_at,
        }
    }

    /// View used by the risk score
    pub fn risk_input(&self) -> RiskInput {
        RiskInput {
            volatility: self.volatility,
            liquidity: self.liquidity,
            time_to_end_ms: self.time_to_end_ms,
        }
    }
}

impl From<&MarketSnapshot> for TrendingInput {
    fn from(market: &MarketSnapshot) -> Self {
        market.trending_input()
    }
}

impl From<&MarketSnapshot> for RiskInput {
    fn from(market: &MarketSnapshot) -> Self {
        market.risk_input()
    }
}
