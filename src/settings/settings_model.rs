use serde::{Deserialize, Serialize};

use crate::market_data::DEFAULT_API_BASE_URL;
use crate::translation::DEFAULT_LANGUAGE;

/// Host-injected configuration. The asset base URL serves the bundled
/// snapshot (`data.json`) and the language resource (`languages.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub api_base_url: String,
    pub asset_base_url: String,
    pub default_language: String,
    pub sound_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            asset_base_url: "http://127.0.0.1:8080".to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            sound_enabled: true,
        }
    }
}
