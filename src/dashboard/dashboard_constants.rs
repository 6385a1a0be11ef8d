/// Delay before re-acquiring after an offline -> online transition,
/// letting the connectivity signal settle.
pub const RECONNECT_SETTLE_SECS: u64 = 2;
