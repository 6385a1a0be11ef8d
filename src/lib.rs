pub mod app_state;
pub mod dashboard;
pub mod errors;
pub mod filters;
pub mod market_data;
pub mod portfolio;
pub mod scheduler;
pub mod settings;
pub mod translation;

pub use app_state::AppState;
pub use dashboard::{Command, DashboardService, PresentationSink, StatusSeverity};
pub use errors::{Error, Result};
pub use market_data::{
    AcquisitionError, Coin, CoinRepository, Connectivity, MarketDataError, MarketDataService,
    Provenance,
};
pub use settings::AppSettings;
