//! Tests for the acquisition coordinator's fallback policy.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::market_data::market_data_errors::{AcquisitionError, MarketDataError, Result};
    use crate::market_data::market_data_model::{Coin, Connectivity, Provenance};
    use crate::market_data::market_data_service::MarketDataService;
    use crate::market_data::market_data_traits::CoinDataProvider;

    struct StubProvider {
        provenance: Provenance,
        responses: Mutex<Vec<Result<Vec<Coin>>>>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(provenance: Provenance, responses: Vec<Result<Vec<Coin>>>) -> Arc<Self> {
            Arc::new(Self {
                provenance,
                responses: Mutex::new(responses),
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CoinDataProvider for StubProvider {
        fn provenance(&self) -> Provenance {
            self.provenance
        }

        async fn fetch_coins(&self) -> Result<Vec<Coin>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(MarketDataError::Http(503));
            }
            responses.remove(0)
        }
    }

    fn coin(id: &str, provenance: Provenance) -> Coin {
        Coin {
            id: id.to_string(),
            symbol: id.to_string(),
            name: id.to_string(),
            current_price: Some(1.0),
            change_24h: 1.0,
            market_cap: None,
            volume_24h: None,
            image: None,
            last_updated: None,
            provenance,
        }
    }

    #[tokio::test]
    async fn online_prefers_remote() {
        let remote = StubProvider::new(
            Provenance::Remote,
            vec![Ok(vec![coin("btc", Provenance::Remote)])],
        );
        let local = StubProvider::new(Provenance::Local, vec![]);
        let service = MarketDataService::new(remote.clone(), local.clone());

        let (coins, provenance) = service.acquire(Connectivity::Online).await.unwrap();
        assert_eq!(provenance, Provenance::Remote);
        assert_eq!(coins[0].id, "btc");
        assert_eq!(local.call_count(), 0);
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_local() {
        let remote = StubProvider::new(Provenance::Remote, vec![Err(MarketDataError::Http(500))]);
        let local = StubProvider::new(
            Provenance::Local,
            vec![Ok(vec![coin("eth", Provenance::Local)])],
        );
        let service = MarketDataService::new(remote, local);

        let (coins, provenance) = service.acquire(Connectivity::Online).await.unwrap();
        assert_eq!(provenance, Provenance::Local);
        assert_eq!(coins[0].provenance, Provenance::Local);
    }

    #[tokio::test]
    async fn offline_skips_remote_entirely() {
        let remote = StubProvider::new(Provenance::Remote, vec![]);
        let local = StubProvider::new(
            Provenance::Local,
            vec![Ok(vec![coin("eth", Provenance::Local)])],
        );
        let service = MarketDataService::new(remote.clone(), local);

        let (_, provenance) = service.acquire(Connectivity::Offline).await.unwrap();
        assert_eq!(provenance, Provenance::Local);
        assert_eq!(remote.call_count(), 0);
    }

    #[tokio::test]
    async fn both_failures_are_terminal() {
        let remote = StubProvider::new(Provenance::Remote, vec![Err(MarketDataError::Http(500))]);
        let local = StubProvider::new(Provenance::Local, vec![Err(MarketDataError::Http(404))]);
        let service = MarketDataService::new(remote, local);

        let err = service.acquire(Connectivity::Online).await.unwrap_err();
        let AcquisitionError::BothSourcesFailed { remote, local } = err;
        assert!(remote.is_some());
        assert!(matches!(local, MarketDataError::Http(404)));
    }

    #[tokio::test]
    async fn offline_terminal_failure_has_no_remote_cause() {
        let remote = StubProvider::new(Provenance::Remote, vec![]);
        let local = StubProvider::new(Provenance::Local, vec![Err(MarketDataError::Http(404))]);
        let service = MarketDataService::new(remote.clone(), local);

        let err = service.acquire(Connectivity::Offline).await.unwrap_err();
        let AcquisitionError::BothSourcesFailed { remote: cause, .. } = err;
        assert!(cause.is_none());
        assert_eq!(remote.call_count(), 0);
    }
}
