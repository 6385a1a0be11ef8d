//! Adapter for the bundled snapshot served alongside the app assets.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::market_data::market_data_constants::{LOCAL_SNAPSHOT_PATH, LOCAL_TIMEOUT_SECS};
use crate::market_data::market_data_errors::{MarketDataError, Result};
use crate::market_data::market_data_model::{Coin, LocalSnapshot, Provenance};
use crate::market_data::market_data_traits::CoinDataProvider;

pub struct LocalProvider {
    client: Client,
    base_url: String,
}

impl LocalProvider {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(LOCAL_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl CoinDataProvider for LocalProvider {
    fn provenance(&self) -> Provenance {
        Provenance::Local
    }

    async fn fetch_coins(&self) -> Result<Vec<Coin>> {
        let url = format!("{}/{}", self.base_url, LOCAL_SNAPSHOT_PATH);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let snapshot: LocalSnapshot = serde_json::from_str(&body)?;
        debug!("loaded {} coins from local snapshot", snapshot.coins.len());

        Ok(snapshot.coins.into_iter().map(Coin::from_local).collect())
    }
}
