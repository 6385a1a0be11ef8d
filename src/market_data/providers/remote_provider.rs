//! Live market-data adapter for the remote service.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::market_data::market_data_constants::{
    MARKETS_ENDPOINT, MARKETS_ORDER, MARKETS_PER_PAGE, MARKETS_VS_CURRENCY, REMOTE_TIMEOUT_SECS,
};
use crate::market_data::market_data_errors::{MarketDataError, Result};
use crate::market_data::market_data_model::{Coin, Provenance, RemoteCoinRecord};
use crate::market_data::market_data_traits::CoinDataProvider;

pub struct RemoteProvider {
    client: Client,
    base_url: String,
}

impl RemoteProvider {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REMOTE_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CoinDataProvider for RemoteProvider {
    fn provenance(&self) -> Provenance {
        Provenance::Remote
    }

    async fn fetch_coins(&self) -> Result<Vec<Coin>> {
        let url = format!("{}/{}", self.base_url, MARKETS_ENDPOINT);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", MARKETS_VS_CURRENCY),
                ("order", MARKETS_ORDER),
                ("per_page", &MARKETS_PER_PAGE.to_string()),
                ("page", "1"),
                ("sparkline", "false"),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let records: Vec<RemoteCoinRecord> = serde_json::from_str(&body)?;
        debug!("fetched {} coins from remote market data", records.len());

        Ok(records.into_iter().map(Coin::from_remote).collect())
    }
}
