//! # Utility Functions
//!
//! Timestamp conversion and number formatting shared by the CLI and the
//! WASM bindings.

use crate::{error::Result, ScoringError};
use chrono::{DateTime, Utc};

/// Current time in milliseconds since the Unix epoch
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert epoch milliseconds to a UTC timestamp
pub fn datetime_from_ms(timestamp_ms: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp_ms)
        .ok_or_else(|| ScoringError::InvalidTimestamp(format!("{timestamp_ms} is out of range")))
}

/// Format epoch milliseconds as a human-readable string
pub fn format_timestamp_ms(timestamp_ms: i64) -> String {
    let dt = DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_default();
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Parse epoch milliseconds from a string
pub fn parse_timestamp_ms(timestamp_str: &str) -> Result<DateTime<Utc>> {
    let ms = timestamp_str
        .trim()
        .parse::<i64>()
        .map_err(|_| ScoringError::InvalidTimestamp(timestamp_str.to_string()))?;
    datetime_from_ms(ms)
}

/// Signed percentage with two decimals, `-` when undefined.
///
/// Values that round to zero print without a sign.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let normalized = if v.abs() < 0.005 { 0.0 } else { v };
            if normalized == 0.0 {
                "0.00%".to_string()
            } else {
                format!("{normalized:+.2}%")
            }
        }
        _ => "-".to_string(),
    }
}

/// Score with two decimals, `-` when not a number
pub fn format_score(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "-".to_string()
    }
}
