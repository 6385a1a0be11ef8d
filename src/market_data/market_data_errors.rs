use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarketDataError>;

/// Failure of a single source adapter. Timeouts surface through the
/// `Network` variant and are treated like any other fetch failure.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Http(u16),

    #[error("Parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Terminal acquisition failure for one refresh cycle. No further
/// fallback exists past the local snapshot; recovery is a manual retry.
#[derive(Error, Debug)]
pub enum AcquisitionError {
    #[error("both market data sources failed; local cause: {local}")]
    BothSourcesFailed {
        /// Remote cause; `None` when the remote source was skipped (offline).
        remote: Option<MarketDataError>,
        local: MarketDataError,
    },
}
