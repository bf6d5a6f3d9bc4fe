use breakoutbot::api::{AlpacaClient, EodhdClient};
use breakoutbot::calendar::{gate_status, GateStatus, TradingCalendar};
use breakoutbot::config::Config;
use breakoutbot::models::{OrderOutcome, ScreenOutcome};
use breakoutbot::screener::{candidates, screen_symbols, submit_orders};
use breakoutbot::Result;
use chrono::Utc;
use clap::Parser;

/// Daily breakout screener: scans a fixed symbol list once and submits a
/// market buy for every symbol whose momentum/breakout conditions all hold.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Run the gates, fetch and evaluation, but submit no orders
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    setup_logging();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&cli, &config).await {
        tracing::error!("Run failed: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("breakoutbot=info")),
        )
        .init();
}

async fn run(cli: &Cli, config: &Config) -> Result<()> {
    tracing::info!("🚀 Breakout screener starting ({} symbols)", config.symbols.len());

    let calendar = TradingCalendar::new(config.holidays.iter().copied());
    // Session date follows the exchange, not the host clock
    let today = Utc::now().with_timezone(&chrono_tz::US::Eastern).date_naive();

    if !calendar.is_trading_day(today) {
        tracing::info!("Not a trading day: {}. Nothing to do.", today);
        return Ok(());
    }

    let alpaca = AlpacaClient::new(
        config.alpaca_api_key.clone(),
        config.alpaca_api_secret.clone(),
        config.alpaca_base_url.clone(),
        config.http_timeout,
    )?;

    let clock = alpaca.get_clock().await?;
    match gate_status(&calendar, today, &clock) {
        GateStatus::Open => {}
        GateStatus::NotTradingDay => {
            tracing::info!("Not a trading day: {}. Nothing to do.", today);
            return Ok(());
        }
        GateStatus::MarketClosed { next_open } => {
            match next_open {
                Some(next) => tracing::info!("Market closed. Next open: {}", next),
                None => tracing::info!("Market closed."),
            }
            return Ok(());
        }
    }

    let provider = EodhdClient::new(config.eodhd_api_key.clone(), config.http_timeout)?;
    let reports = screen_symbols(&provider, &config.symbols, &config.signal).await;

    for report in &reports {
        match &report.outcome {
            ScreenOutcome::Candidate(candidate) => {
                tracing::info!("🎯 {}: candidate at ${:.2}", report.symbol, candidate.price)
            }
            ScreenOutcome::NotCandidate => {
                tracing::info!("{}: not a candidate", report.symbol)
            }
            ScreenOutcome::Failed(reason) => {
                tracing::warn!("{} ERROR: {}", report.symbol, reason)
            }
        }
    }

    let picks = candidates(&reports);
    if picks.is_empty() {
        tracing::info!("No candidates today");
        return Ok(());
    }

    if cli.dry_run {
        tracing::info!("Dry run: skipping {} order(s)", picks.len());
        return Ok(());
    }

    let order_reports = submit_orders(&alpaca, &picks, config.capital_per_order).await;
    for report in &order_reports {
        match &report.outcome {
            Ok(OrderOutcome::Accepted { order_id }) => tracing::info!(
                "✅ Order submitted: {} qty={} @ ${:.2} (id: {})",
                report.symbol,
                report.qty,
                report.price,
                order_id.as_deref().unwrap_or("n/a")
            ),
            Ok(OrderOutcome::Rejected { status, body }) => tracing::warn!(
                "❌ Order rejected: {} ({} - {})",
                report.symbol,
                status,
                body
            ),
            Err(reason) => {
                tracing::warn!("❌ Order failed: {} ({})", report.symbol, reason)
            }
        }
    }

    Ok(())
}
