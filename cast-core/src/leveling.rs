//! # Leveling
//!
//! `level(xp) = floor(sqrt(xp / 100)) + 1` and its inverse threshold
//! `xp_for_next_level(level) = level^2 * 100`.
//!
//! Both are evaluated in integer arithmetic, so level boundaries land exactly
//! on `k^2 * 100` with no floating-point rounding at perfect squares.

use crate::config::LevelingConfig;
use serde::{Deserialize, Serialize};

/// Level for an experience point total. Level 1 at zero xp.
pub fn level(xp: u64) -> u64 {
    level_with(&LevelingConfig::default(), xp)
}

pub fn level_with(config: &LevelingConfig, xp: u64) -> u64 {
    // floor(sqrt(xp / unit)) == isqrt(floor(xp / unit)) for integers
    integer_sqrt(xp / config.xp_unit.max(1)) + 1
}

/// Experience points at which `level` is left behind.
pub fn xp_for_next_level(level: u64) -> u64 {
    xp_for_next_level_with(&LevelingConfig::default(), level)
}

pub fn xp_for_next_level_with(config: &LevelingConfig, level: u64) -> u64 {
    level.saturating_mul(level).saturating_mul(config.xp_unit)
}

/// Progress through the current level, for progress bars
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u64,
    pub xp: u64,
    /// Experience points at which the current level starts
    pub level_start_xp: u64,
    /// Experience points at which the next level starts
    pub next_level_xp: u64,
    /// Fraction of the current level completed, in `[0, 1)`
    pub fraction: f64,
}

impl LevelProgress {
    pub fn new(xp: u64) -> Self {
        Self::with_config(&LevelingConfig::default(), xp)
    }

    pub fn with_config(config: &LevelingConfig, xp: u64) -> Self {
        let level = level_with(config, xp);
        let level_start_xp = xp_for_next_level_with(config, level - 1);
        let next_level_xp = xp_for_next_level_with(config, level);
        let span = next_level_xp.saturating_sub(level_start_xp);
        let fraction = if span == 0 {
            0.0
        } else {
            (xp - level_start_xp) as f64 / span as f64
        };

        Self {
            level,
            xp,
            level_start_xp,
            next_level_xp,
            fraction,
        }
    }

    /// Experience points still needed to reach the next level
    pub fn xp_remaining(&self) -> u64 {
        self.next_level_xp.saturating_sub(self.xp)
    }
}

/// Largest `r` with `r * r <= n`.
fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_at_zero() {
        assert_eq!(level(0), 1);
        assert_eq!(level(99), 1);
        assert_eq!(level(100), 2);
    }

    #[test]
    fn test_known_levels() {
        assert_eq!(level(399), 2);
        assert_eq!(level(400), 3);
        assert_eq!(level(10_000), 11);
        assert_eq!(xp_for_next_level(1), 100);
        assert_eq!(xp_for_next_level(3), 900);
    }

    #[test]
    fn test_thresholds_are_exact_at_every_boundary() {
        for lvl in 1..=2_000u64 {
            let threshold = xp_for_next_level(lvl);
            assert_eq!(level(threshold - 1), lvl, "just below threshold of {lvl}");
            assert_eq!(level(threshold), lvl + 1, "at threshold of {lvl}");
        }
    }

    #[test]
    fn test_integer_sqrt_large_values() {
        assert_eq!(integer_sqrt(0), 0);
        assert_eq!(integer_sqrt(15), 3);
        assert_eq!(integer_sqrt(16), 4);
        assert_eq!(integer_sqrt(u64::MAX), 4_294_967_295);
        let big = 3_037_000_499u64 * 3_037_000_499u64;
        assert_eq!(integer_sqrt(big), 3_037_000_499);
        assert_eq!(integer_sqrt(big - 1), 3_037_000_498);
    }

    #[test]
    fn test_level_of_max_xp_does_not_overflow() {
        assert_eq!(level(u64::MAX), 429_496_730);
        assert_eq!(xp_for_next_level(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_progress() {
        let progress = LevelProgress::new(250);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.level_start_xp, 100);
        assert_eq!(progress.next_level_xp, 400);
        assert!((progress.fraction - 0.5).abs() < 1e-12);
        assert_eq!(progress.xp_remaining(), 150);

        let start = LevelProgress::new(0);
        assert_eq!(start.level, 1);
        assert_eq!(start.level_start_xp, 0);
        assert_eq!(start.fraction, 0.0);
    }

    #[test]
    fn test_custom_unit() {
        let config = LevelingConfig { xp_unit: 50 };
        assert_eq!(level_with(&config, 49), 1);
        assert_eq!(level_with(&config, 50), 2);
        assert_eq!(xp_for_next_level_with(&config, 2), 200);
    }
}
