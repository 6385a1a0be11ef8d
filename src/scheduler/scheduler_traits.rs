use async_trait::async_trait;

use crate::market_data::Connectivity;

/// Callbacks the scheduler drives on the controller. Kept behind a
/// trait so the state machine is testable without the dashboard.
#[async_trait]
pub trait SchedulerHooks: Send + Sync {
    fn connectivity(&self) -> Connectivity;

    /// Ids of the coins currently displayed (the filtered view).
    fn displayed_coin_ids(&self) -> Vec<String>;

    /// Full re-acquisition, triggered by the refresh timer while online.
    async fn scheduled_refresh(&self);

    /// Cosmetic liveliness pulse for the sampled ids; no data semantics.
    fn pulse(&self, coin_ids: &[String]);
}
