use async_trait::async_trait;

use super::market_data_errors::Result;
use super::market_data_model::{Coin, Provenance};

/// A source adapter producing normalized coins. Implementations map
/// their raw wire schema onto the canonical [`Coin`] shape and tag it
/// with their provenance.
#[async_trait]
pub trait CoinDataProvider: Send + Sync {
    fn provenance(&self) -> Provenance;

    async fn fetch_coins(&self) -> Result<Vec<Coin>>;
}
