use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::BarProvider;
use crate::models::Bar;
use crate::Result;

const EODHD_API_BASE: &str = "https://eodhd.com/api";

/// Client for the EODHD end-of-day data API
#[derive(Clone)]
pub struct EodhdClient {
    client: Client,
    api_key: String,
    base_url: String,
}

// ============== Response Types ==============

#[derive(Debug, Deserialize)]
struct EodBarRaw {
    date: NaiveDate,
    close: f64,
    high: f64,
    low: f64,
    volume: f64,
}

impl From<EodBarRaw> for Bar {
    fn from(raw: EodBarRaw) -> Self {
        Bar {
            date: raw.date,
            close: raw.close,
            high: raw.high,
            low: raw.low,
            volume: raw.volume,
        }
    }
}

// ============== Implementation ==============

impl EodhdClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: EODHD_API_BASE.to_string(),
        })
    }

    /// Point the client at a different host (tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl BarProvider for EodhdClient {
    /// Fetch the full daily history for a US-listed symbol
    /// Endpoint: GET /eod/{symbol}.US?api_token=...&fmt=json&period=d
    ///
    /// Bars come back ascending by date; a payload with duplicate dates is
    /// rejected as malformed.
    async fn fetch_daily_history(&self, symbol: &str) -> Result<Vec<Bar>> {
        let url = format!("{}/eod/{}.US", self.base_url, symbol);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_token", self.api_key.as_str()),
                ("fmt", "json"),
                ("period", "d"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("EODHD API error for {}: {}", symbol, response.status()).into());
        }

        let raw: Vec<EodBarRaw> = response.json().await?;
        let mut bars: Vec<Bar> = raw.into_iter().map(Bar::from).collect();
        bars.sort_by_key(|bar| bar.date);

        for window in bars.windows(2) {
            if window[1].date == window[0].date {
                return Err(format!(
                    "duplicate bar date {} in EODHD payload for {}",
                    window[0].date, symbol
                )
                .into());
            }
        }

        tracing::debug!("Fetched {} daily bars for {}", bars.len(), symbol);
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_client(server: &mockito::ServerGuard) -> EodhdClient {
        EodhdClient::new("demo".to_string(), Duration::from_secs(5))
            .unwrap()
            .with_base_url(server.url())
    }

    #[tokio::test]
    async fn test_fetch_sorts_ascending() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/eod/AAPL.US")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"[
                    {"date":"2025-01-03","close":101.0,"high":102.0,"low":100.0,"volume":2000},
                    {"date":"2025-01-02","close":100.0,"high":101.0,"low":99.0,"volume":1000}
                ]"#,
            )
            .create_async()
            .await;

        let bars = test_client(&server)
            .fetch_daily_history("AAPL")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(bars.len(), 2);
        assert!(bars[0].date < bars[1].date);
        assert_eq!(bars[0].close, 100.0);
        assert_eq!(bars[1].volume, 2000.0);
    }

    #[tokio::test]
    async fn test_duplicate_dates_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/eod/AAPL.US")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"[
                    {"date":"2025-01-02","close":100.0,"high":101.0,"low":99.0,"volume":1000},
                    {"date":"2025-01-02","close":101.0,"high":102.0,"low":100.0,"volume":2000}
                ]"#,
            )
            .create_async()
            .await;

        let result = test_client(&server).fetch_daily_history("AAPL").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("duplicate"));
    }

    #[tokio::test]
    async fn test_http_error_is_reported() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/eod/NOPE.US")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let result = test_client(&server).fetch_daily_history("NOPE").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("404"));
    }
}
