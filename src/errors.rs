use thiserror::Error;

use crate::market_data::{AcquisitionError, MarketDataError};
use crate::translation::TranslationError;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Acquisition failed: {0}")]
    Acquisition(#[from] AcquisitionError),

    #[error("Translation loading failed: {0}")]
    Translation(#[from] TranslationError),
}
