//! Scoring tour
//!
//! Builds a handful of markets and users and prints every score the
//! front end displays for them.

use cast_core::{
    compare, level, recommend, utils::*, HistoryEntry, LevelProgress, MarketScorer,
    MarketSnapshot, RiskLevel, UserStats,
};
use chrono::Duration;

fn main() -> cast_core::Result<()> {
    println!("0xCast Scoring Tour");
    println!("═══════════════════\n");

    let now = datetime_from_ms(1_735_689_600_000)?;
    let market = |id: &str, category: &str, volume: f64, age_days: i64| MarketSnapshot {
        id: id.to_string(),
        title: format!("{category} market {id}"),
        category: category.to_string(),
        volume,
        participants: volume / 10.0,
        recent_activity: volume / 20.0,
        created_at: now - Duration::days(age_days),
        volatility: 0.3,
        liquidity: volume * 4.0,
        time_to_end_ms: 10.0 * 86_400_000.0,
    };
    let markets = vec![
        market("m1", "sports", 1_200.0, 2),
        market("m2", "politics", 5_000.0, 25),
        market("m3", "tech", 300.0, 0),
        market("m4", "sports", 800.0, 40),
    ];

    let scorer = MarketScorer::default();

    println!("1. Trending as of {}", format_timestamp_ms(now.timestamp_millis()));
    for entry in scorer.rank_trending(&markets, now) {
        println!("   {:>8}  {}", format_score(entry.score), entry.market.title);
    }
    println!();

    println!("2. Risk");
    for m in &markets {
        let score = scorer.risk_score(&m.risk_input());
        println!("   {:>8}  {:<6}  {}", format_score(score), RiskLevel::from_score(score), m.title);
    }
    println!();

    println!("3. Leveling");
    for xp in [0, 99, 100, 250, 10_000] {
        let progress = LevelProgress::new(xp);
        println!(
            "   {xp:>6} xp -> level {} ({:.0}% to level {})",
            level(xp),
            progress.fraction * 100.0,
            progress.level + 1
        );
    }
    println!();

    println!("4. Recommendations");
    let history: Vec<HistoryEntry> = ["sports:m9", "sports:m7", "tech:m3"]
        .iter()
        .map(|token| token.parse())
        .collect::<cast_core::Result<_>>()?;
    for m in recommend(&history, &markets) {
        println!("   {}", m.title);
    }
    println!();

    println!("5. Comparison");
    let volume = compare(1_500.0, 1_200.0);
    println!(
        "   volume {} -> {}: {} {}",
        volume.previous,
        volume.current,
        volume.trend.arrow(),
        format_percent(volume.change_percent)
    );
    println!();

    println!("6. Leaderboard");
    let users = vec![
        UserStats {
            address: "SP1ALICE".to_string(),
            xp: 2_500,
            total_volume: 9_000.0,
            markets_traded: 12,
            wins: 7,
            losses: 3,
        },
        UserStats {
            address: "SP2BOB".to_string(),
            xp: 900,
            total_volume: 1_000.0,
            markets_traded: 4,
            wins: 1,
            losses: 2,
        },
    ];
    for entry in scorer.leaderboard(&users) {
        println!(
            "   #{} {} level {} ({})",
            entry.rank,
            entry.address,
            entry.level,
            format_percent(entry.win_rate)
        );
    }

    Ok(())
}
