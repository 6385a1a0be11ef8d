pub(crate) mod market_data_constants;
pub(crate) mod market_data_errors;
pub(crate) mod market_data_model;
pub(crate) mod market_data_repository;
pub(crate) mod market_data_service;
pub(crate) mod market_data_traits;
pub(crate) mod providers;

#[cfg(test)]
mod market_data_service_tests;

// Re-export the public interface
pub use market_data_constants::*;
pub use market_data_model::{
    format_price, Coin, Connectivity, LocalCoinRecord, LocalSnapshot, Provenance,
    RemoteCoinRecord, TrendClass,
};
pub use market_data_repository::CoinRepository;
pub use market_data_service::MarketDataService;
pub use market_data_traits::CoinDataProvider;

// Re-export provider types
pub use providers::{LocalProvider, RemoteProvider};

// Re-export error types for convenience
pub use market_data_errors::{AcquisitionError, MarketDataError};
