//! # Cast WASM
//!
//! WebAssembly bindings for the 0xCast scoring utilities.
//! Structured values cross the boundary as plain JavaScript objects with
//! camelCase fields, matching the records the front end already holds.

use cast_core::{
    utils::datetime_from_ms, HistoryEntry, LevelProgress, MarketScorer, MarketSnapshot, RiskInput,
    TrendingInput, UserStats,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {what}: {e}")))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Trending score of `{ volume, participants, recentActivity, createdAt }` at `nowMs`.
#[wasm_bindgen(js_name = trendingScore)]
pub fn trending_score(input: JsValue, now_ms: f64) -> Result<f64, JsValue> {
    let input: TrendingInput = from_js(input, "trending input")?;
    let now = clock_from_js(now_ms)
        .and_then(|ms| datetime_from_ms(ms).map_err(|e| e.to_string()))
        .map_err(|e| JsValue::from_str(&e))?;
    Ok(cast_core::trending_score(&input, now))
}

/// Risk score (0-100) of `{ volatility, liquidity, timeToEndMs }`.
#[wasm_bindgen(js_name = riskScore)]
pub fn risk_score(input: JsValue) -> Result<f64, JsValue> {
    let input: RiskInput = from_js(input, "risk input")?;
    Ok(cast_core::risk_score(&input))
}

/// Level for an experience point total.
///
/// JavaScript numbers are truncated to whole, non-negative xp.
#[wasm_bindgen]
pub fn level(xp: f64) -> f64 {
    cast_core::level(xp_from_js(xp)) as f64
}

/// Experience points at which `level` is left behind.
#[wasm_bindgen(js_name = xpForNextLevel)]
pub fn xp_for_next_level(level: f64) -> f64 {
    cast_core::xp_for_next_level(xp_from_js(level)) as f64
}

/// `{ level, xp, levelStartXp, nextLevelXp, fraction }` for a progress bar.
#[wasm_bindgen(js_name = levelProgress)]
pub fn level_progress(xp: f64) -> Result<JsValue, JsValue> {
    to_js(&LevelProgress::new(xp_from_js(xp)))
}

/// Up to ten markets ranked by the user's category affinity.
///
/// `history` is an array of `category:eventId` strings; malformed tokens are skipped.
#[wasm_bindgen]
pub fn recommend(history: JsValue, markets: JsValue) -> Result<JsValue, JsValue> {
    let tokens: Vec<String> = from_js(history, "history")?;
    let markets: Vec<MarketSnapshot> = from_js(markets, "markets")?;
    let picked = MarketScorer::default().recommend_from_tokens(&tokens, &markets);
    to_js(&picked)
}

/// Same as [`recommend`] but with `{ category, eventId }` history records.
#[wasm_bindgen(js_name = recommendFromEntries)]
pub fn recommend_from_entries(history: JsValue, markets: JsValue) -> Result<JsValue, JsValue> {
    let history: Vec<HistoryEntry> = from_js(history, "history")?;
    let markets: Vec<MarketSnapshot> = from_js(markets, "markets")?;
    to_js(&cast_core::recommend(&history, &markets))
}

/// `{ current, previous, change, changePercent, trend }`
#[wasm_bindgen]
pub fn compare(current: f64, previous: f64) -> Result<JsValue, JsValue> {
    to_js(&cast_core::compare(current, previous))
}

/// Ranked leaderboard rows for an array of user stats.
#[wasm_bindgen(js_name = buildLeaderboard)]
pub fn build_leaderboard(users: JsValue) -> Result<JsValue, JsValue> {
    let users: Vec<UserStats> = from_js(users, "users")?;
    to_js(&MarketScorer::default().leaderboard(&users))
}

/// Whole epoch milliseconds from a JavaScript clock reading.
fn clock_from_js(now_ms: f64) -> Result<i64, String> {
    if !now_ms.is_finite() {
        return Err(format!("Invalid nowMs: {now_ms}"));
    }
    Ok(now_ms as i64)
}

fn xp_from_js(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    }
}
