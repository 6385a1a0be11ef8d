/// Scheduling state, keyed by the provenance of the last successful
/// acquisition. Local data gets a pulse timer only; remote data also
/// gets the periodic re-acquisition timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    ScheduledLocal,
    ScheduledRemote,
}
