use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One trading day's observation for one symbol
///
/// Within a series, dates are strictly increasing and unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: f64,
}

/// Per-bar indicator values, aligned 1:1 with the bar series
///
/// `None` marks the undefined leading window of an indicator. An undefined
/// value must never be read as a signal.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPoint {
    pub rsi: Option<f64>,
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub volume_avg: Option<f64>,
    pub anchored_vwap: Option<f64>,
    pub squeeze_active: Option<bool>,
}

/// A symbol for which every signal condition held on the latest bar
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub symbol: String,
    /// Latest close, rounded to 2 decimals
    pub price: f64,
}

/// Market buy order payload, serialized verbatim to the brokerage
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub symbol: String,
    pub qty: f64,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub time_in_force: String,
}

impl OrderRequest {
    /// Fractional-share market buy, good for the day
    pub fn market_buy(symbol: &str, qty: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            qty,
            side: "buy".to_string(),
            order_type: "market".to_string(),
            time_in_force: "day".to_string(),
        }
    }
}

/// Brokerage clock snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct MarketClock {
    pub is_open: bool,
    pub next_open: Option<DateTime<Utc>>,
}

/// Outcome of screening one symbol
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenOutcome {
    Candidate(Candidate),
    NotCandidate,
    Failed(String),
}

/// Per-symbol report line for the run output
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolReport {
    pub symbol: String,
    pub outcome: ScreenOutcome,
}

/// Result of one order submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Brokerage accepted the order (HTTP 200/201)
    Accepted { order_id: Option<String> },
    /// Brokerage answered with a non-success status
    Rejected { status: u16, body: String },
}

/// Per-order report line for the run output
#[derive(Debug, Clone)]
pub struct OrderReport {
    pub symbol: String,
    pub qty: f64,
    pub price: f64,
    pub outcome: std::result::Result<OrderOutcome, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_buy_request_shape() {
        let req = OrderRequest::market_buy("AAPL", 0.2);
        assert_eq!(req.side, "buy");
        assert_eq!(req.order_type, "market");
        assert_eq!(req.time_in_force, "day");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "market");
        assert_eq!(json["qty"], 0.2);
    }

    #[test]
    fn test_clock_deserializes_offset_timestamps() {
        let clock: MarketClock = serde_json::from_str(
            r#"{"is_open":false,"next_open":"2025-09-02T09:30:00-04:00"}"#,
        )
        .unwrap();
        assert!(!clock.is_open);
        assert!(clock.next_open.is_some());
    }
}
