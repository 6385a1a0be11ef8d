/// Full re-acquisition cadence while on remote data
pub const REFRESH_INTERVAL_SECS: u64 = 120;

/// Liveliness pulse cadence (both provenances)
pub const PULSE_INTERVAL_SECS: u64 = 10;

/// Independent per-coin probability of pulsing on a tick
pub const PULSE_PROBABILITY: f64 = 0.1;

/// How long the sink keeps a pulsed coin marked active
pub const PULSE_ACTIVE_MS: u64 = 1000;
