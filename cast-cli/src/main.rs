//! # Cast CLI
//!
//! Command-line interface for scoring 0xCast prediction markets from JSON exports.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cast_core::{
    utils::*, LevelProgress, MarketScorer, MarketSnapshot, MetricValue, PlatformMetrics,
    RiskLevel, ScoringConfig, UserStats,
};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "cast")]
#[command(about = "Scoring and analytics for 0xCast prediction markets")]
#[command(version)]
struct Cli {
    /// Scoring config file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank markets by trending score
    Trending {
        /// JSON file with an array of markets
        #[arg(short, long)]
        markets: PathBuf,
        /// Clock reading in epoch milliseconds (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
    /// Show the risk score of each market
    Risk {
        /// JSON file with an array of markets
        #[arg(short, long)]
        markets: PathBuf,
    },
    /// Show the level for an experience point total
    Level {
        /// Experience points
        xp: u64,
    },
    /// Recommend markets from a user's history
    Recommend {
        /// JSON file with an array of "category:event_id" tokens
        #[arg(long)]
        history: PathBuf,
        /// JSON file with an array of candidate markets
        #[arg(short, long)]
        markets: PathBuf,
    },
    /// Compare two samples of a metric
    Compare {
        /// Current value
        #[arg(allow_negative_numbers = true)]
        current: f64,
        /// Previous value
        #[arg(allow_negative_numbers = true)]
        previous: f64,
    },
    /// Rank users by experience
    Leaderboard {
        /// JSON file with an array of user stats
        #[arg(short, long)]
        users: PathBuf,
    },
    /// Compare two platform metric snapshots
    Platform {
        /// JSON file with the current snapshot
        #[arg(long)]
        current: PathBuf,
        /// JSON file with the previous snapshot
        #[arg(long)]
        previous: PathBuf,
    },
    /// Print the effective scoring config as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let config = load_config(cli.config.as_deref()).await?;
    let scorer = MarketScorer::new(config).context("invalid scoring config")?;

    match cli.command {
        Commands::Trending { markets, now } => {
            let markets: Vec<MarketSnapshot> = read_json(&markets).await?;
            let now = match now {
                Some(raw) => parse_timestamp_ms(&raw)?,
                None => datetime_from_ms(now_ms())?,
            };
            let ranked = scorer.rank_trending(&markets, now);
            info!(markets = markets.len(), ranked = ranked.len(), "scored trending markets");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
                return Ok(());
            }

            println!(
                "{} {}",
                "Trending markets as of".green().bold(),
                format_timestamp_ms(now.timestamp_millis()).yellow()
            );
            println!("{}", "═".repeat(50).bright_black());
            for (position, entry) in ranked.iter().enumerate() {
                println!(
                    "{:>2}. {} {} {}",
                    position + 1,
                    format_score(entry.score).cyan().bold(),
                    market_label(entry.market),
                    format!("[{}]", entry.market.category).bright_black()
                );
            }
            if ranked.is_empty() {
                println!("{}", "No markets to rank.".bright_black());
            }
        }

        Commands::Risk { markets } => {
            let markets: Vec<MarketSnapshot> = read_json(&markets).await?;
            let scored: Vec<(&MarketSnapshot, f64)> = markets
                .iter()
                .map(|market| (market, scorer.risk_score(&market.risk_input())))
                .collect();

            if cli.json {
                let rows: Vec<serde_json::Value> = scored
                    .iter()
                    .map(|(market, score)| {
                        serde_json::json!({
                            "id": market.id,
                            "riskScore": score,
                            "riskLevel": RiskLevel::from_score(*score),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }

            println!("{}", "Market Risk".green().bold());
            println!("{}", "═".repeat(50).bright_black());
            for (market, score) in scored {
                let level = RiskLevel::from_score(score);
                let badge = match level {
                    RiskLevel::Low => level.label().green(),
                    RiskLevel::Medium => level.label().yellow(),
                    RiskLevel::High => level.label().red(),
                };
                println!(
                    "{:>7} {:<6} {}",
                    format_score(score).cyan(),
                    badge,
                    market_label(market)
                );
            }
        }

        Commands::Level { xp } => {
            let progress = scorer.level_progress(xp);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&progress)?);
                return Ok(());
            }
            print_level(&progress);
        }

        Commands::Recommend { history, markets } => {
            let tokens: Vec<String> = read_json(&history).await?;
            let markets: Vec<MarketSnapshot> = read_json(&markets).await?;
            let picked = scorer.recommend_from_tokens(&tokens, &markets);
            info!(history = tokens.len(), picked = picked.len(), "built recommendations");

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&picked)?);
                return Ok(());
            }

            println!("{}", "Recommended Markets".green().bold());
            println!("{}", "═".repeat(50).bright_black());
            for market in &picked {
                println!(
                    "  {} {}",
                    market_label(market),
                    format!("[{}]", market.category).bright_black()
                );
            }
            if picked.is_empty() {
                println!(
                    "{}",
                    "No markets match the categories in this history.".bright_black()
                );
            }
        }

        Commands::Compare { current, previous } => {
            let value = scorer.compare(current, previous);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }
            println!("{}: {}", "Comparison".green().bold(), metric_line(&value));
        }

        Commands::Leaderboard { users } => {
            let users: Vec<UserStats> = read_json(&users).await?;
            let board = scorer.leaderboard(&users);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&board)?);
                return Ok(());
            }

            println!("{}", "Leaderboard".green().bold());
            println!("{}", "═".repeat(50).bright_black());
            for entry in &board {
                let win_rate = entry
                    .win_rate
                    .map(|rate| format!("{rate:.1}% wins"))
                    .unwrap_or_else(|| "no results".to_string());
                println!(
                    "{:>3}. {} {} {} {}",
                    entry.rank,
                    entry.address.cyan(),
                    format!("Lv {}", entry.level).yellow().bold(),
                    format!("{} xp", entry.xp),
                    win_rate.bright_black()
                );
            }
        }

        Commands::Platform { current, previous } => {
            let current: PlatformMetrics = read_json(&current).await?;
            let previous: PlatformMetrics = read_json(&previous).await?;
            let diff = scorer.compare_platform(&current, &previous);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&diff)?);
                return Ok(());
            }

            println!("{}", "Platform Metrics".green().bold());
            println!("{}", "═".repeat(50).bright_black());
            println!("{}: {}", "Total Volume".yellow().bold(), metric_line(&diff.total_volume));
            println!("{}: {}", "Active Markets".yellow().bold(), metric_line(&diff.active_markets));
            println!("{}: {}", "Total Users".yellow().bold(), metric_line(&diff.total_users));
            println!("{}: {}", "Total Trades".yellow().bold(), metric_line(&diff.total_trades));
        }

        Commands::Config => {
            let rendered =
                toml::to_string_pretty(scorer.config()).context("failed to render config")?;
            print!("{rendered}");
        }
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn load_config(path: Option<&Path>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = ScoringConfig::from_toml_str(&raw)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    debug!(path = %path.display(), "loaded scoring config");
    Ok(config)
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_json(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    Ok(serde_json::from_str(raw)?)
}

fn market_label(market: &MarketSnapshot) -> String {
    if market.title.is_empty() {
        market.id.clone()
    } else {
        market.title.clone()
    }
}

fn metric_line(value: &MetricValue) -> String {
    let arrow = match value.trend {
        cast_core::Trend::Up => value.trend.arrow().green(),
        cast_core::Trend::Down => value.trend.arrow().red(),
        cast_core::Trend::Flat => value.trend.arrow().bright_black(),
    };
    format!(
        "{} {} ({} from {}, {})",
        arrow,
        value.current,
        format!("{:+}", value.change),
        value.previous,
        format_percent(value.change_percent)
    )
}

fn print_level(progress: &LevelProgress) {
    const BAR_WIDTH: usize = 30;
    let filled = ((progress.fraction * BAR_WIDTH as f64).floor() as usize).min(BAR_WIDTH);

    println!("{}: {}", "Level".green().bold(), progress.level.to_string().yellow().bold());
    println!("{}: {}", "Experience".yellow().bold(), progress.xp);
    println!(
        "{}: [{}{}] {}/{}",
        "Progress".yellow().bold(),
        "█".repeat(filled).cyan(),
        "░".repeat(BAR_WIDTH - filled).bright_black(),
        progress.xp - progress.level_start_xp,
        progress.next_level_xp - progress.level_start_xp
    );
    println!(
        "{}",
        format!("{} xp to level {}", progress.xp_remaining(), progress.level + 1).bright_blue()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_compare_with_negatives() {
        let cli = Cli::try_parse_from(["cast", "compare", "-5", "-10"]).unwrap();
        match cli.command {
            Commands::Compare { current, previous } => {
                assert_eq!(current, -5.0);
                assert_eq!(previous, -10.0);
            }
            _ => panic!("expected compare"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cast", "level", "250", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Level { xp: 250 }));
    }

    #[test]
    fn test_parse_market_list() {
        let markets: Vec<MarketSnapshot> =
            parse_json(r#"[{"id": "a", "category": "sports", "createdAt": 0}]"#).unwrap();
        assert_eq!(markets.len(), 1);
        assert_eq!(market_label(&markets[0]), "a");
    }

    #[test]
    fn test_parse_history_tokens() {
        let tokens: Vec<String> = parse_json(r#"["sports:1", "tech:2"]"#).unwrap();
        assert_eq!(tokens, vec!["sports:1", "tech:2"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(parse_json::<Vec<MarketSnapshot>>("not json").is_err());
    }

    #[tokio::test]
    async fn test_missing_config_falls_back_to_default() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[tokio::test]
    async fn test_unreadable_config_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/cast.toml"))).await;
        assert!(result.is_err());
    }
}
