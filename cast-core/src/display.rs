//! # Display Records
//!
//! Plain records rendered by the dashboard and leaderboard views. They are
//! built from upstream data and never mutated in place.

use crate::compare::{compare_with, MetricValue};
use crate::config::{ComparisonConfig, LevelingConfig};
use crate::leveling::level_with;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-user trading statistics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Wallet address or handle
    pub address: String,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub markets_traded: u64,
    #[serde(default)]
    pub wins: u64,
    #[serde(default)]
    pub losses: u64,
}

impl UserStats {
    /// Share of resolved positions that won, in percent.
    ///
    /// `None` until the user has at least one resolved position.
    pub fn win_rate(&self) -> Option<f64> {
        let resolved = self.wins.saturating_add(self.losses);
        if resolved == 0 {
            return None;
        }
        Some(self.wins as f64 / resolved as f64 * 100.0)
    }
}

/// One row of the leaderboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: usize,
    pub address: String,
    pub xp: u64,
    pub level: u64,
    pub total_volume: f64,
    pub win_rate: Option<f64>,
}

/// Rank users by xp, then by volume. Users equal on both keep input order.
pub fn build_leaderboard(config: &LevelingConfig, users: &[UserStats]) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&UserStats> = users.iter().collect();
    ordered.sort_by(|a, b| {
        b.xp
            .cmp(&a.xp)
            .then_with(|| b.total_volume.total_cmp(&a.total_volume))
    });

    debug!(users = users.len(), "built leaderboard");
    ordered
        .into_iter()
        .enumerate()
        .map(|(index, user)| LeaderboardEntry {
            rank: index + 1,
            address: user.address.clone(),
            xp: user.xp,
            level: level_with(config, user.xp),
            total_volume: user.total_volume,
            win_rate: user.win_rate(),
        })
        .collect()
}

/// Platform-wide totals at one point in time
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetrics {
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub active_markets: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_trades: u64,
}

/// Every platform metric compared against an earlier snapshot
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformComparison {
    pub total_volume: MetricValue,
    pub active_markets: MetricValue,
    pub total_users: MetricValue,
    pub total_trades: MetricValue,
}

impl PlatformMetrics {
    pub fn compare(&self, previous: &PlatformMetrics, config: &ComparisonConfig) -> PlatformComparison {
        PlatformComparison {
            total_volume: compare_with(config, self.total_volume, previous.total_volume),
            active_markets: compare_with(
                config,
                self.active_markets as f64,
                previous.active_markets as f64,
            ),
            total_users: compare_with(config, self.total_users as f64, previous.total_users as f64),
            total_trades: compare_with(
                config,
                self.total_trades as f64,
                previous.total_trades as f64,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::Trend;
    use crate::test_utils::create_test_user;

    #[test]
    fn test_win_rate() {
        let mut user = create_test_user("alice", 0, 0.0);
        assert_eq!(user.win_rate(), None);

        user.wins = 3;
        user.losses = 1;
        assert_eq!(user.win_rate(), Some(75.0));
    }

    #[test]
    fn test_win_rate_with_huge_counts_does_not_overflow() {
        let mut user = create_test_user("whale", 0, 0.0);
        user.wins = u64::MAX;
        user.losses = u64::MAX;
        let rate = user.win_rate().unwrap();
        assert!((rate - 100.0).abs() < 1e-9);

        user.wins = 0;
        assert_eq!(user.win_rate(), Some(0.0));
    }

    #[test]
    fn test_leaderboard_order_and_levels() {
        let users = vec![
            create_test_user("low", 50, 10.0),
            create_test_user("high", 900, 5.0),
            create_test_user("mid-small", 400, 1.0),
            create_test_user("mid-big", 400, 99.0),
        ];

        let board = build_leaderboard(&LevelingConfig::default(), &users);
        let addresses: Vec<&str> = board.iter().map(|e| e.address.as_str()).collect();
        assert_eq!(addresses, vec!["high", "mid-big", "mid-small", "low"]);

        let ranks: Vec<usize> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);

        assert_eq!(board[0].level, 4);
        assert_eq!(board[1].level, 3);
        assert_eq!(board[3].level, 1);
    }

    #[test]
    fn test_empty_leaderboard() {
        assert!(build_leaderboard(&LevelingConfig::default(), &[]).is_empty());
    }

    #[test]
    fn test_platform_comparison() {
        let previous = PlatformMetrics {
            total_volume: 1000.0,
            active_markets: 10,
            total_users: 200,
            total_trades: 0,
        };
        let current = PlatformMetrics {
            total_volume: 1500.0,
            active_markets: 8,
            total_users: 200,
            total_trades: 40,
        };

        let diff = current.compare(&previous, &ComparisonConfig::default());
        assert_eq!(diff.total_volume.change_percent, Some(50.0));
        assert_eq!(diff.total_volume.trend, Trend::Up);
        assert_eq!(diff.active_markets.trend, Trend::Down);
        assert_eq!(diff.total_users.trend, Trend::Flat);
        assert_eq!(diff.total_trades.change_percent, None);
    }
}
