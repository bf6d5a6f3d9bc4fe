use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::OrderGateway;
use crate::models::{MarketClock, OrderOutcome, OrderRequest};
use crate::Result;

/// Default base URL: paper trading, never live by accident
pub const ALPACA_PAPER_BASE: &str = "https://paper-api.alpaca.markets";

/// Client for the Alpaca trading API (clock + orders)
#[derive(Clone)]
pub struct AlpacaClient {
    client: Client,
    api_key: String,
    api_secret: String,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct OrderResponse {
    id: Option<String>,
}

impl AlpacaClient {
    pub fn new(
        api_key: String,
        api_secret: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            api_secret,
            base_url,
        })
    }

    fn auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("APCA-API-KEY-ID", &self.api_key)
            .header("APCA-API-SECRET-KEY", &self.api_secret)
    }

    /// Fetch the market clock
    /// Endpoint: GET /v2/clock
    pub async fn get_clock(&self) -> Result<MarketClock> {
        let url = format!("{}/v2/clock", self.base_url);
        let response = self.auth(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(format!("Alpaca clock error: {}", response.status()).into());
        }

        Ok(response.json().await?)
    }
}

impl OrderGateway for AlpacaClient {
    /// Submit a market buy order
    /// Endpoint: POST /v2/orders
    ///
    /// A non-success status is a Rejected outcome with the response body
    /// preserved, not a transport error.
    async fn submit_market_buy(&self, request: &OrderRequest) -> Result<OrderOutcome> {
        let url = format!("{}/v2/orders", self.base_url);
        let response = self.auth(self.client.post(&url)).json(request).send().await?;

        let status = response.status();
        if status.is_success() {
            let order: OrderResponse = response.json().await.unwrap_or_default();
            Ok(OrderOutcome::Accepted { order_id: order.id })
        } else {
            let body = response.text().await.unwrap_or_default();
            Ok(OrderOutcome::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
