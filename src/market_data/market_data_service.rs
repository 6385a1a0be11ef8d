use std::sync::Arc;

use log::{info, warn};

use super::market_data_errors::{AcquisitionError, MarketDataError};
use super::market_data_model::{Coin, Connectivity, Provenance};
use super::market_data_traits::CoinDataProvider;
use super::providers::{LocalProvider, RemoteProvider};
use crate::settings::AppSettings;

/// Acquisition coordinator: picks the source adapter based on
/// connectivity and escalates from remote to local on failure.
pub struct MarketDataService {
    remote: Arc<dyn CoinDataProvider>,
    local: Arc<dyn CoinDataProvider>,
}

impl MarketDataService {
    pub fn new(remote: Arc<dyn CoinDataProvider>, local: Arc<dyn CoinDataProvider>) -> Self {
        MarketDataService { remote, local }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(
            Arc::new(RemoteProvider::new(&settings.api_base_url)),
            Arc::new(LocalProvider::new(&settings.asset_base_url)),
        )
    }

    /// Acquire one snapshot. Offline skips the remote source entirely;
    /// online tries remote first and falls back to local on any failure.
    /// A local failure after that is terminal for the cycle.
    pub async fn acquire(
        &self,
        connectivity: Connectivity,
    ) -> Result<(Vec<Coin>, Provenance), AcquisitionError> {
        let remote_cause: Option<MarketDataError> = match connectivity {
            Connectivity::Offline => None,
            Connectivity::Online => match self.remote.fetch_coins().await {
                Ok(coins) => {
                    let provenance = self.remote.provenance();
                    info!("acquired {} coins from {provenance:?} source", coins.len());
                    return Ok((coins, provenance));
                }
                Err(err) => {
                    warn!("remote source failed, falling back to local snapshot: {err}");
                    Some(err)
                }
            },
        };

        match self.local.fetch_coins().await {
            Ok(coins) => {
                let provenance = self.local.provenance();
                info!("acquired {} coins from {provenance:?} source", coins.len());
                Ok((coins, provenance))
            }
            Err(local) => Err(AcquisitionError::BothSourcesFailed {
                remote: remote_cause,
                local,
            }),
        }
    }
}
