use std::sync::{Mutex, Weak};
use std::time::Duration;

use log::debug;
use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::interval;

use super::scheduler_constants::{PULSE_INTERVAL_SECS, PULSE_PROBABILITY, REFRESH_INTERVAL_SECS};
use super::scheduler_model::RefreshState;
use super::scheduler_traits::SchedulerHooks;
use crate::market_data::{Connectivity, Provenance};

/// Refresh-scheduling state machine.
///
/// Every transition into a scheduled state aborts the previously armed
/// timer tasks before arming new ones; re-arming without cancellation
/// would accumulate timers across refresh cycles.
pub struct RefreshScheduler {
    hooks: Weak<dyn SchedulerHooks>,
    refresh_interval: Duration,
    pulse_interval: Duration,
    pulse_probability: f64,
    inner: Mutex<SchedulerInner>,
}

#[derive(Default)]
struct SchedulerInner {
    state: RefreshState,
    refresh_task: Option<JoinHandle<()>>,
    pulse_task: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn new(hooks: Weak<dyn SchedulerHooks>) -> Self {
        Self::with_intervals(
            hooks,
            Duration::from_secs(REFRESH_INTERVAL_SECS),
            Duration::from_secs(PULSE_INTERVAL_SECS),
        )
    }

    pub fn with_intervals(
        hooks: Weak<dyn SchedulerHooks>,
        refresh_interval: Duration,
        pulse_interval: Duration,
    ) -> Self {
        RefreshScheduler {
            hooks,
            refresh_interval,
            pulse_interval,
            pulse_probability: PULSE_PROBABILITY,
            inner: Mutex::new(SchedulerInner::default()),
        }
    }

    #[cfg(test)]
    fn set_pulse_probability(&mut self, probability: f64) {
        self.pulse_probability = probability;
    }

    pub fn state(&self) -> RefreshState {
        self.inner.lock().unwrap().state
    }

    /// Enter the scheduled state matching the acquisition provenance.
    pub fn transition(&self, provenance: Provenance) {
        let mut inner = self.inner.lock().unwrap();
        Self::cancel_timers(&mut inner);

        inner.pulse_task = Some(self.spawn_pulse_task());
        inner.state = match provenance {
            Provenance::Local => RefreshState::ScheduledLocal,
            Provenance::Remote => {
                inner.refresh_task = Some(self.spawn_refresh_task());
                RefreshState::ScheduledRemote
            }
        };
        debug!("scheduler entered {:?}", inner.state);
    }

    /// Cancel all timers and return to idle.
    pub fn shutdown(&self) {
        let mut inner = self.inner.lock().unwrap();
        Self::cancel_timers(&mut inner);
        inner.state = RefreshState::Idle;
    }

    fn cancel_timers(inner: &mut SchedulerInner) {
        if let Some(task) = inner.refresh_task.take() {
            task.abort();
        }
        if let Some(task) = inner.pulse_task.take() {
            task.abort();
        }
    }

    fn spawn_refresh_task(&self) -> JoinHandle<()> {
        let hooks = self.hooks.clone();
        let period = self.refresh_interval;
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.tick().await; // completes immediately
            loop {
                ticker.tick().await;
                let Some(hooks) = hooks.upgrade() else { break };
                if hooks.connectivity() == Connectivity::Online {
                    hooks.scheduled_refresh().await;
                }
            }
        })
    }

    fn spawn_pulse_task(&self) -> JoinHandle<()> {
        let hooks = self.hooks.clone();
        let period = self.pulse_interval;
        let probability = self.pulse_probability;
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(hooks) = hooks.upgrade() else { break };
                let picked = sample_pulse_ids(hooks.displayed_coin_ids(), probability);
                if !picked.is_empty() {
                    hooks.pulse(&picked);
                }
            }
        })
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.lock() {
            Self::cancel_timers(&mut inner);
        }
    }
}

/// Independently keep each id with the given probability.
fn sample_pulse_ids(ids: Vec<String>, probability: f64) -> Vec<String> {
    let mut rng = rand::thread_rng();
    ids.into_iter()
        .filter(|_| rng.gen::<f64>() < probability)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHooks {
        refreshes: AtomicUsize,
        pulses: AtomicUsize,
        connectivity: Mutex<Connectivity>,
        displayed: Vec<String>,
    }

    impl CountingHooks {
        fn new(displayed: Vec<String>) -> Arc<Self> {
            Arc::new(CountingHooks {
                refreshes: AtomicUsize::new(0),
                pulses: AtomicUsize::new(0),
                connectivity: Mutex::new(Connectivity::Online),
                displayed,
            })
        }
    }

    #[async_trait]
    impl SchedulerHooks for CountingHooks {
        fn connectivity(&self) -> Connectivity {
            *self.connectivity.lock().unwrap()
        }

        fn displayed_coin_ids(&self) -> Vec<String> {
            self.displayed.clone()
        }

        async fn scheduled_refresh(&self) {
            self.refreshes.fetch_add(1, Ordering::SeqCst);
        }

        fn pulse(&self, coin_ids: &[String]) {
            self.pulses.fetch_add(coin_ids.len(), Ordering::SeqCst);
        }
    }

    fn scheduler_for(hooks: &Arc<CountingHooks>) -> RefreshScheduler {
        let weak: Weak<dyn SchedulerHooks> = Arc::<CountingHooks>::downgrade(hooks);
        RefreshScheduler::with_intervals(
            weak,
            Duration::from_millis(100),
            Duration::from_secs(3600),
        )
    }

    #[test]
    fn sampling_honors_probability_extremes() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(sample_pulse_ids(ids.clone(), 0.0).is_empty());
        assert_eq!(sample_pulse_ids(ids.clone(), 1.1).len(), ids.len());
    }

    #[tokio::test(start_paused = true)]
    async fn transitions_track_provenance() {
        let hooks = CountingHooks::new(Vec::new());
        let scheduler = scheduler_for(&hooks);
        assert_eq!(scheduler.state(), RefreshState::Idle);

        scheduler.transition(Provenance::Local);
        assert_eq!(scheduler.state(), RefreshState::ScheduledLocal);

        scheduler.transition(Provenance::Remote);
        assert_eq!(scheduler.state(), RefreshState::ScheduledRemote);

        scheduler.shutdown();
        assert_eq!(scheduler.state(), RefreshState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_transitions_do_not_accumulate_timers() {
        let hooks = CountingHooks::new(Vec::new());
        let scheduler = scheduler_for(&hooks);

        // Arm three times in a row; only the last set may survive.
        scheduler.transition(Provenance::Remote);
        scheduler.transition(Provenance::Remote);
        scheduler.transition(Provenance::Remote);

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(hooks.refreshes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn local_state_never_refreshes() {
        let hooks = CountingHooks::new(Vec::new());
        let scheduler = scheduler_for(&hooks);
        scheduler.transition(Provenance::Local);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(hooks.refreshes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn pulse_timer_fires_and_stops_on_shutdown() {
        let hooks = CountingHooks::new(vec!["bitcoin".to_string(), "ethereum".to_string()]);
        let weak: Weak<dyn SchedulerHooks> = Arc::<CountingHooks>::downgrade(&hooks);
        let mut scheduler = RefreshScheduler::with_intervals(
            weak,
            Duration::from_secs(3600),
            Duration::from_millis(100),
        );
        scheduler.set_pulse_probability(1.0);
        scheduler.transition(Provenance::Local);

        // Two ticks elapse, each pulsing both displayed coins.
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(hooks.pulses.load(Ordering::SeqCst), 4);

        scheduler.shutdown();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(hooks.pulses.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn offline_suppresses_scheduled_refresh() {
        let hooks = CountingHooks::new(Vec::new());
        let scheduler = scheduler_for(&hooks);
        scheduler.transition(Provenance::Remote);
        *hooks.connectivity.lock().unwrap() = Connectivity::Offline;

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(hooks.refreshes.load(Ordering::SeqCst), 0);
    }
}
