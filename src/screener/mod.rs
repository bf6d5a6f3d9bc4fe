// Per-symbol screening loop and order submission

use crate::api::{BarProvider, OrderGateway};
use crate::models::{Candidate, OrderReport, OrderRequest, ScreenOutcome, SymbolReport};
use crate::strategy::{evaluate_symbol, round2, SignalConfig};
use crate::Result;

/// Screen every symbol in configured order, one at a time
///
/// A failure for one symbol (fetch error, malformed data, short history) is
/// caught, recorded on its report, and never stops the remaining symbols.
pub async fn screen_symbols(
    provider: &impl BarProvider,
    symbols: &[String],
    config: &SignalConfig,
) -> Vec<SymbolReport> {
    let mut reports = Vec::with_capacity(symbols.len());

    for symbol in symbols {
        let outcome = match screen_one(provider, symbol, config).await {
            Ok(Some(candidate)) => ScreenOutcome::Candidate(candidate),
            Ok(None) => ScreenOutcome::NotCandidate,
            Err(e) => ScreenOutcome::Failed(e.to_string()),
        };
        reports.push(SymbolReport {
            symbol: symbol.clone(),
            outcome,
        });
    }

    reports
}

async fn screen_one(
    provider: &impl BarProvider,
    symbol: &str,
    config: &SignalConfig,
) -> Result<Option<Candidate>> {
    let bars = provider.fetch_daily_history(symbol).await?;
    evaluate_symbol(symbol, &bars, config)
}

/// Extract the candidates from a screen run, preserving symbol order
pub fn candidates(reports: &[SymbolReport]) -> Vec<Candidate> {
    reports
        .iter()
        .filter_map(|report| match &report.outcome {
            ScreenOutcome::Candidate(candidate) => Some(candidate.clone()),
            _ => None,
        })
        .collect()
}

/// Fractional-share quantity for a fixed dollar allocation
pub fn order_quantity(capital: f64, price: f64) -> f64 {
    round2(capital / price)
}

/// Submit one market buy per candidate
///
/// Rejections and transport failures are recorded per order; they never
/// abort the remaining submissions. No retries, by design.
pub async fn submit_orders(
    gateway: &impl OrderGateway,
    candidates: &[Candidate],
    capital: f64,
) -> Vec<OrderReport> {
    let mut reports = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let qty = order_quantity(capital, candidate.price);
        let request = OrderRequest::market_buy(&candidate.symbol, qty);

        let outcome = gateway
            .submit_market_buy(&request)
            .await
            .map_err(|e| e.to_string());

        reports.push(OrderReport {
            symbol: candidate.symbol.clone(),
            qty,
            price: candidate.price,
            outcome,
        });
    }

    reports
}
