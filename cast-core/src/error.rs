//! Error types for cast-core

use thiserror::Error;

/// Result type alias for cast operations
pub type Result<T> = std::result::Result<T, ScoringError>;

/// Error types for scoring operations.
///
/// The scoring functions themselves never fail; these errors come from
/// configuration files and parsing of caller-supplied tokens.
#[derive(Error, Debug)]
pub enum ScoringError {
    /// Configuration validation errors
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// History token parsing errors
    #[error("Invalid history entry: {0}")]
    InvalidHistoryEntry(String),

    /// Timestamp parsing errors
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// TOML config errors
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
