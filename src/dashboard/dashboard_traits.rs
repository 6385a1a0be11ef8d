use super::dashboard_model::StatusSeverity;
use crate::market_data::Coin;
use crate::portfolio::PortfolioSnapshot;

/// Rendering boundary implemented by the host. The core only pushes
/// state through it and never reads anything back.
pub trait PresentationSink: Send + Sync {
    fn render_coins(&self, coins: &[Coin]);

    /// Valid empty result, distinct from "not yet loaded".
    fn render_empty(&self);

    fn render_portfolio(&self, snapshot: &PortfolioSnapshot);

    fn render_status(&self, message: &str, severity: StatusSeverity);

    /// Terminal acquisition failure; the host offers a manual retry
    /// that dispatches [`Command::Refresh`](super::Command::Refresh).
    fn render_fatal_error(&self, message: &str);

    /// Mark the given coins transiently active for
    /// [`PULSE_ACTIVE_MS`](crate::scheduler::PULSE_ACTIVE_MS); purely cosmetic.
    fn render_pulse(&self, coin_ids: &[String]);

    fn render_sound_label(&self, enabled: bool);
}
