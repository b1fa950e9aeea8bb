//! # Recommendations
//!
//! Ranks candidate markets by how often the user has engaged with their
//! category. Markets from categories the user never touched are excluded, and
//! candidates with equal affinity keep their original order.

use crate::config::RecommendationConfig;
use crate::market::Categorized;
use crate::{error::Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// One past user interaction, tagged with the category it belongs to.
///
/// The front end stores these as `category:event_id` tokens; `FromStr` and
/// `Display` convert between the two forms.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub category: String,
    pub event_id: String,
}

impl HistoryEntry {
    pub fn new(category: impl Into<String>, event_id: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            event_id: event_id.into(),
        }
    }
}

impl FromStr for HistoryEntry {
    type Err = ScoringError;

    /// Split at the first `:`. A token without `:` is a bare category.
    fn from_str(token: &str) -> Result<Self> {
        let (category, event_id) = token.split_once(':').unwrap_or((token, ""));
        let category = category.trim();
        if category.is_empty() {
            return Err(ScoringError::InvalidHistoryEntry(format!(
                "missing category in {token:?}"
            )));
        }
        Ok(Self::new(category, event_id))
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.event_id)
    }
}

/// Number of history entries per category.
pub fn category_affinity(history: &[HistoryEntry]) -> HashMap<&str, usize> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in history {
        *counts.entry(entry.category.as_str()).or_default() += 1;
    }
    counts
}

/// Up to 10 candidates from categories in `history`, most engaged first.
pub fn recommend<'a, M: Categorized>(history: &[HistoryEntry], candidates: &'a [M]) -> Vec<&'a M> {
    recommend_with(&RecommendationConfig::default(), history, candidates)
}

pub fn recommend_with<'a, M: Categorized>(
    config: &RecommendationConfig,
    history: &[HistoryEntry],
    candidates: &'a [M],
) -> Vec<&'a M> {
    let affinity = category_affinity(history);

    let mut scored: Vec<(usize, &'a M)> = candidates
        .iter()
        .filter_map(|candidate| {
            affinity
                .get(candidate.category())
                .map(|&count| (count, candidate))
        })
        .collect();

    // sort_by is stable: equal affinity keeps candidate order
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(config.limit);

    debug!(
        history = history.len(),
        categories = affinity.len(),
        candidates = candidates.len(),
        returned = scored.len(),
        "built recommendations"
    );
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// Parse raw `category:event_id` tokens, skipping malformed ones.
pub fn parse_history<S: AsRef<str>>(tokens: &[S]) -> Vec<HistoryEntry> {
    tokens
        .iter()
        .filter_map(|token| match token.as_ref().parse::<HistoryEntry>() {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping history token");
                None
            }
        })
        .collect()
}

/// `recommend_with` over raw history tokens.
pub fn recommend_from_tokens<'a, M: Categorized, S: AsRef<str>>(
    config: &RecommendationConfig,
    tokens: &[S],
    candidates: &'a [M],
) -> Vec<&'a M> {
    recommend_with(config, &parse_history(tokens), candidates)
}
