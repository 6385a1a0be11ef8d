use crate::filters::CoinCategory;

/// User- or host-originated action, decoupled from any presentation
/// layer so the core is drivable without one.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Refresh,
    Search(String),
    SetCategory(CoinCategory),
    SelectCoin(String),
    Dismiss,
    /// Acknowledged with a status message only; no order is placed.
    Trade(String),
    ToggleSound,
    SetLanguage(String),
    ConnectivityChanged(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSeverity {
    Info,
    Success,
    Warning,
}
