/// Fixed notional holding per coin used for the summary value; this is
/// not a real portfolio.
pub const NOTIONAL_UNITS: f64 = 100.0;
