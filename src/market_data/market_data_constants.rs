/// Remote market-data service
pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const MARKETS_ENDPOINT: &str = "coins/markets";
pub const MARKETS_VS_CURRENCY: &str = "usd";
pub const MARKETS_ORDER: &str = "market_cap_desc";
pub const MARKETS_PER_PAGE: u32 = 50;

/// Bundled snapshot served next to the app assets
pub const LOCAL_SNAPSHOT_PATH: &str = "data.json";

/// Request timeouts; a timeout is treated like any other fetch failure
pub const REMOTE_TIMEOUT_SECS: u64 = 10;
pub const LOCAL_TIMEOUT_SECS: u64 = 5;
