//! # Risk Score
//!
//! Combines volatility, illiquidity and time-to-end into a 0-100 figure.
//! Only the final sum is capped; the time term alone may exceed its weight
//! for markets closing more than 30 days out.

use crate::config::RiskConfig;
use crate::market::RiskInput;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk score with the default weights.
pub fn risk_score(input: &RiskInput) -> f64 {
    risk_score_with(&RiskConfig::default(), input)
}

/// Risk score with explicit weights.
pub fn risk_score_with(config: &RiskConfig, input: &RiskInput) -> f64 {
    let volatility_score = input.volatility * config.volatility_weight;
    let liquidity_score =
        (1.0 - (input.liquidity / config.liquidity_saturation).min(1.0)) * config.liquidity_weight;
    let time_score = (input.time_to_end_ms / config.time_window_ms) * config.time_weight;

    (volatility_score + liquidity_score + time_score).min(1.0) * 100.0
}

/// Badge bucket for a risk score
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Split the 0-100 range into thirds.
    pub fn from_score(score: f64) -> Self {
        if score < 100.0 / 3.0 {
            Self::Low
        } else if score < 200.0 / 3.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
