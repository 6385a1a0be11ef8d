use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of a coin's data within the current refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    Remote,
    Local,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Remote => "remote",
            Provenance::Local => "local",
        }
    }
}

/// Connectivity flag consumed from the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Online,
    Offline,
}

impl From<bool> for Connectivity {
    fn from(online: bool) -> Self {
        if online {
            Connectivity::Online
        } else {
            Connectivity::Offline
        }
    }
}

/// Canonical coin entity, immutable per refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    /// Signed 24h percentage change; 0 when the source omitted it.
    pub change_24h: f64,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub image: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub provenance: Provenance,
}

/// Raw record from the remote `coins/markets` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteCoinRecord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub image: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Raw record from the bundled `data.json` snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalCoinRecord {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: Option<f64>,
    pub change_24h: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
}

/// Envelope of the bundled snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalSnapshot {
    pub coins: Vec<LocalCoinRecord>,
}

impl Coin {
    /// Normalize a remote record. Missing numeric fields stay absent,
    /// except the 24h change which the remote API may omit.
    pub fn from_remote(record: RemoteCoinRecord) -> Self {
        Coin {
            id: record.id,
            symbol: record.symbol,
            name: record.name,
            current_price: record.current_price,
            change_24h: record.price_change_percentage_24h.unwrap_or(0.0),
            market_cap: record.market_cap,
            volume_24h: record.total_volume,
            image: record.image,
            last_updated: record.last_updated,
            provenance: Provenance::Remote,
        }
    }

    /// Normalize a local snapshot record. Local records carry no image
    /// or update timestamp.
    pub fn from_local(record: LocalCoinRecord) -> Self {
        Coin {
            id: record.id,
            symbol: record.symbol,
            name: record.name,
            current_price: record.current_price,
            change_24h: record.change_24h.unwrap_or(0.0),
            market_cap: record.market_cap,
            volume_24h: record.volume_24h,
            image: None,
            last_updated: None,
            provenance: Provenance::Local,
        }
    }

    /// Display classification of the 24h trend.
    pub fn trend_class(&self) -> TrendClass {
        let change = self.change_24h;
        if change > 15.0 {
            TrendClass::ExtremeRise
        } else if change > 0.0 {
            TrendClass::Rising
        } else if change > -10.0 {
            TrendClass::Fading
        } else {
            TrendClass::Cracked
        }
    }
}

/// Per-coin display classification derived from the 24h change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendClass {
    ExtremeRise,
    Rising,
    Fading,
    Cracked,
}

/// Format a price for display: two decimals with thousands separators
/// for values of one and above, four to six decimals below one.
pub fn format_price(price: Option<f64>) -> String {
    let Some(price) = price else {
        return "N/A".to_string();
    };
    if price >= 1.0 {
        let formatted = format!("{:.2}", price);
        let (int_part, frac_part) = formatted
            .split_once('.')
            .unwrap_or((formatted.as_str(), "00"));
        format!("{}.{}", group_thousands(int_part), frac_part)
    } else {
        let formatted = format!("{:.6}", price);
        let trimmed_len = formatted.trim_end_matches('0').len();
        let min_len = formatted.find('.').map(|dot| dot + 1 + 4).unwrap_or(trimmed_len);
        formatted[..trimmed_len.max(min_len)].to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
