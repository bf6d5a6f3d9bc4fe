use chrono::NaiveDate;
use std::time::Duration;
use thiserror::Error;

use crate::api::alpaca::ALPACA_PAPER_BASE;
use crate::strategy::SignalConfig;

const DEFAULT_SYMBOLS: &str = "AAPL,MSFT,GOOGL,AMZN,NVDA,TSLA,META,INTC";
const DEFAULT_CAPITAL_PER_ORDER: f64 = 10.0;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Immutable run configuration, built once from the environment at startup
///
/// Core logic never reads the environment itself; everything it needs is
/// carried here.
#[derive(Debug, Clone)]
pub struct Config {
    pub alpaca_api_key: String,
    pub alpaca_api_secret: String,
    pub alpaca_base_url: String,
    pub eodhd_api_key: String,
    pub symbols: Vec<String>,
    pub capital_per_order: f64,
    pub signal: SignalConfig,
    pub holidays: Vec<NaiveDate>,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = SignalConfig::default();

        Ok(Self {
            alpaca_api_key: require("APCA_API_KEY_ID")?,
            alpaca_api_secret: require("APCA_API_SECRET_KEY")?,
            alpaca_base_url: std::env::var("APCA_API_BASE_URL")
                .unwrap_or_else(|_| ALPACA_PAPER_BASE.to_string()),
            eodhd_api_key: require("EODHD_API_KEY")?,
            symbols: parse_symbols(
                &std::env::var("SYMBOLS").unwrap_or_else(|_| DEFAULT_SYMBOLS.to_string()),
            ),
            capital_per_order: parse_var("CAPITAL_PER_ORDER", DEFAULT_CAPITAL_PER_ORDER)?,
            signal: SignalConfig {
                rsi_period: parse_var("RSI_PERIOD", defaults.rsi_period)?,
                ema_fast: parse_var("EMA_FAST", defaults.ema_fast)?,
                ema_slow: parse_var("EMA_SLOW", defaults.ema_slow)?,
                volume_period: parse_var("VOL_PERIOD", defaults.volume_period)?,
                price_period: parse_var("PRICE_PERIOD", defaults.price_period)?,
                breakout_threshold: defaults.breakout_threshold,
            },
            holidays: parse_holidays(
                &std::env::var("MARKET_HOLIDAYS").unwrap_or_default(),
            )?,
            http_timeout: Duration::from_secs(parse_var(
                "HTTP_TIMEOUT_SECS",
                DEFAULT_HTTP_TIMEOUT_SECS,
            )?),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Split a comma-separated symbol list, preserving order
fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_uppercase())
        .collect()
}

/// Parse a comma-separated list of YYYY-MM-DD holiday dates
fn parse_holidays(raw: &str) -> Result<Vec<NaiveDate>, ConfigError> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse().map_err(|_| ConfigError::Invalid {
                name: "MARKET_HOLIDAYS",
                reason: format!("bad date: {}", s),
            })
        })
        .collect()
}
