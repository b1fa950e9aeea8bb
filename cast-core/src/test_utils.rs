//! Common test utilities for cast-core tests.
//!
//! Fixed clock readings and fixture builders shared across modules.

use crate::display::UserStats;
use crate::market::MarketSnapshot;
use chrono::{DateTime, Duration, Utc};

/// 2025-01-01T00:00:00Z, used as "now" so trending scores are reproducible.
pub fn reference_now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_735_689_600_000).unwrap()
}

/// A timestamp `days` whole days before [`reference_now`].
pub fn days_ago(days: i64) -> DateTime<Utc> {
    reference_now() - Duration::days(days)
}

/// Create a market with the given volume, created `age_days` before the reference clock.
pub fn create_test_market(id: &str, category: &str, volume: f64, age_days: i64) -> MarketSnapshot {
    MarketSnapshot {
        id: id.to_string(),
        title: format!("Test market {id}"),
        category: category.to_string(),
        volume,
        participants: 10.0,
        recent_activity: 5.0,
        created_at: days_ago(age_days),
        volatility: 0.2,
        liquidity: 2_500.0,
        time_to_end_ms: 7.0 * 86_400_000.0,
    }
}

/// Create a user with no resolved positions.
pub fn create_test_user(address: &str, xp: u64, total_volume: f64) -> UserStats {
    UserStats {
        address: address.to_string(),
        xp,
        total_volume,
        markets_traded: 0,
        wins: 0,
        losses: 0,
    }
}
