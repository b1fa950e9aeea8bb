//! # Scoring Configuration
//!
//! Weights, windows and limits used by the scoring utilities. The defaults
//! reproduce the constants the 0xCast front end has always displayed, so a
//! `ScoringConfig::default()` scorer and the free functions agree exactly.
//!
//! Configuration can be loaded from TOML; every field is optional and falls
//! back to its default.
//!
//! ```toml
//! [trending]
//! decay_window_days = 14.0
//!
//! [recommendation]
//! limit = 5
//! ```

use crate::{error::Result, ScoringError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Milliseconds in one day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Top-level scoring configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub trending: TrendingConfig,
    pub risk: RiskConfig,
    pub leveling: LevelingConfig,
    pub recommendation: RecommendationConfig,
    pub comparison: ComparisonConfig,
}

/// Trending score weights and age decay window
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TrendingConfig {
    pub volume_weight: f64,
    pub participants_weight: f64,
    pub recent_activity_weight: f64,
    /// Days after creation at which the age factor reaches zero
    pub decay_window_days: f64,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            volume_weight: 0.4,
            participants_weight: 0.3,
            recent_activity_weight: 0.3,
            decay_window_days: 30.0,
        }
    }
}

/// Risk score weights and normalization constants
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RiskConfig {
    pub volatility_weight: f64,
    pub liquidity_weight: f64,
    pub time_weight: f64,
    /// Liquidity above which illiquidity contributes no risk
    pub liquidity_saturation: f64,
    /// Time-to-end normalization window in milliseconds (30 days)
    pub time_window_ms: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            volatility_weight: 0.4,
            liquidity_weight: 0.3,
            time_weight: 0.3,
            liquidity_saturation: 10_000.0,
            time_window_ms: 2_592_000_000.0,
        }
    }
}

/// Experience point scale for the leveling curve
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LevelingConfig {
    /// `level = floor(sqrt(xp / xp_unit)) + 1`
    pub xp_unit: u64,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self { xp_unit: 100 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Maximum number of recommended markets
    pub limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Absolute change below which a metric is reported as flat
    pub flat_threshold: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            flat_threshold: 0.005,
        }
    }
}

impl TrendingConfig {
    /// Age decay window in milliseconds
    pub fn decay_window_ms(&self) -> f64 {
        self.decay_window_days * MS_PER_DAY
    }
}

impl ScoringConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every weight and window is usable.
    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("trending.volume_weight", self.trending.volume_weight),
            ("trending.participants_weight", self.trending.participants_weight),
            ("trending.recent_activity_weight", self.trending.recent_activity_weight),
            ("risk.volatility_weight", self.risk.volatility_weight),
            ("risk.liquidity_weight", self.risk.liquidity_weight),
            ("risk.time_weight", self.risk.time_weight),
            ("comparison.flat_threshold", self.comparison.flat_threshold),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let windows = [
            ("trending.decay_window_days", self.trending.decay_window_days),
            ("risk.liquidity_saturation", self.risk.liquidity_saturation),
            ("risk.time_window_ms", self.risk.time_window_ms),
        ];
        for (name, value) in windows {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScoringError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if self.leveling.xp_unit == 0 {
            return Err(ScoringError::InvalidConfig(
                "leveling.xp_unit must be at least 1".to_string(),
            ));
        }
        if self.recommendation.limit == 0 {
            return Err(ScoringError::InvalidConfig(
                "recommendation.limit must be at least 1".to_string(),
            ));
        }

        debug!("scoring config validated");
        Ok(())
    }
}
