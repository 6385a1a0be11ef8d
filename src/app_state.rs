use crate::filters::FilterState;
use crate::market_data::{CoinRepository, Connectivity, Provenance};
use crate::portfolio::PortfolioSnapshot;
use crate::settings::AppSettings;

/// Mutable dashboard state, owned by the top-level controller.
///
/// All mutation happens inside controller methods that run to completion
/// before the next command or timer callback is processed.
pub struct AppState {
    pub repository: CoinRepository,
    pub filter: FilterState,
    pub portfolio: PortfolioSnapshot,
    /// Provenance of the last successful acquisition, if any.
    pub provenance: Option<Provenance>,
    pub connectivity: Connectivity,
    pub sound_enabled: bool,
    pub selected_coin: Option<String>,
}

impl AppState {
    pub fn new(settings: &AppSettings) -> Self {
        AppState {
            repository: CoinRepository::new(),
            filter: FilterState::default(),
            portfolio: PortfolioSnapshot::default(),
            provenance: None,
            connectivity: Connectivity::Online,
            sound_enabled: settings.sound_enabled,
            selected_coin: None,
        }
    }
}
