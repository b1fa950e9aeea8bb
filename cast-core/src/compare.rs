//! # Metric Comparison
//!
//! Delta, percentage change and trend direction between two samples of the
//! same metric.

use crate::config::ComparisonConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a metric between two samples
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classify a change; anything closer to zero than `flat_threshold` is flat.
    pub fn from_change(change: f64, flat_threshold: f64) -> Self {
        if change.is_nan() || change == 0.0 || change.abs() < flat_threshold {
            Self::Flat
        } else if change > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "■",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        })
    }
}

/// A metric compared against its previous sample
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub current: f64,
    pub previous: f64,
    pub change: f64,
    /// `None` when `previous` is zero
    pub change_percent: Option<f64>,
    pub trend: Trend,
}

/// Percentage change from `previous` to `current`.
///
/// Relative to `|previous|`, so the sign always follows the direction of
/// change. Undefined (`None`) when `previous` is zero.
pub fn percentage_change(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous.abs() * 100.0)
}

/// Compare two samples with the default flat threshold.
pub fn compare(current: f64, previous: f64) -> MetricValue {
    compare_with(&ComparisonConfig::default(), current, previous)
}

pub fn compare_with(config: &ComparisonConfig, current: f64, previous: f64) -> MetricValue {
    let change = current - previous;
    MetricValue {
        current,
        previous,
        change,
        change_percent: percentage_change(current, previous),
        trend: Trend::from_change(change, config.flat_threshold),
    }
}
