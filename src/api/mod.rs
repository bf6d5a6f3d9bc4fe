// External service clients
pub mod alpaca;
pub mod eodhd;

pub use alpaca::AlpacaClient;
pub use eodhd::EodhdClient;

use std::future::Future;

use crate::models::{Bar, OrderOutcome, OrderRequest};
use crate::Result;

/// Source of daily OHLCV history for one symbol
pub trait BarProvider {
    fn fetch_daily_history(&self, symbol: &str)
        -> impl Future<Output = Result<Vec<Bar>>> + Send;
}

/// Brokerage order endpoint
pub trait OrderGateway {
    fn submit_market_buy(
        &self,
        request: &OrderRequest,
    ) -> impl Future<Output = Result<OrderOutcome>> + Send;
}
