use std::collections::HashMap;
use std::time::Duration;

use lazy_static::lazy_static;
use log::debug;
use reqwest::Client;

use super::translation_constants::{DEFAULT_LANGUAGE, LANGUAGES_PATH, TRANSLATION_TIMEOUT_SECS};
use super::translation_errors::TranslationError;
use crate::settings::AppSettings;

pub type TranslationTables = HashMap<String, HashMap<String, String>>;

lazy_static! {
    /// Minimal English table compiled into the binary, used when the
    /// language resource cannot be loaded or lacks a key.
    static ref EMBEDDED_EN: HashMap<&'static str, &'static str> = {
        let mut table = HashMap::new();
        table.insert("app_title", "Crypto Crypt");
        table.insert("search_placeholder", "Search coins...");
        table.insert("filter_all", "All Ghosts");
        table.insert("filter_rising", "Rising Dead");
        table.insert("filter_falling", "Buried");
        table.insert("portfolio_value", "Portfolio Value:");
        table.insert("daily_change", "24h Change:");
        table.insert("refresh_button", "Refresh Crypt");
        table.insert("sound_on", "Sound On");
        table.insert("sound_off", "Sound Off");
        table.insert("loading", "Loading crypt data...");
        table.insert("loading_local", "Loading local data...");
        table.insert("error", "Failed to load data!");
        table.insert("no_results", "No coins found...");
        table.insert("current_price", "Current Price:");
        table.insert("market_cap", "Market Cap:");
        table.insert("volume_24h", "Volume (24h):");
        table.insert("trade", "Trade");
        table.insert("close", "Close");
        table.insert("api_error", "API Error! Using local data.");
        table.insert("offline_mode", "Offline - Local data");
        table.insert("online_mode", "Online - Live data");
        table.insert("translations_loaded", "Translations loaded!");
        table.insert("translations_error", "Translations failed! Using English.");
        table
    };
}

/// Key -> display text resolution with a fixed fallback chain:
/// active language, then the default language, then the embedded
/// table, then the key itself.
pub struct TranslationService {
    tables: TranslationTables,
    language: String,
}

impl TranslationService {
    /// Start with the embedded defaults only.
    pub fn new(settings: &AppSettings) -> Self {
        TranslationService {
            tables: TranslationTables::new(),
            language: settings.default_language.clone(),
        }
    }

    #[cfg(test)]
    pub fn with_tables(tables: TranslationTables, language: &str) -> Self {
        TranslationService {
            tables,
            language: language.to_string(),
        }
    }

    /// Install freshly loaded language tables, replacing any prior set.
    pub fn install_tables(&mut self, tables: TranslationTables) {
        debug!("installed {} language tables", tables.len());
        self.tables = tables;
    }

    pub fn set_language(&mut self, code: &str) {
        self.language = code.to_string();
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn translate(&self, key: &str) -> String {
        if let Some(text) = self.tables.get(&self.language).and_then(|t| t.get(key)) {
            return text.clone();
        }
        if let Some(text) = self.tables.get(DEFAULT_LANGUAGE).and_then(|t| t.get(key)) {
            return text.clone();
        }
        if let Some(text) = EMBEDDED_EN.get(key) {
            return (*text).to_string();
        }
        key.to_string()
    }
}

/// Fetches `languages.json` from the asset host.
pub struct TranslationLoader {
    client: Client,
    base_url: String,
}

impl TranslationLoader {
    pub fn new(settings: &AppSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(TRANSLATION_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        TranslationLoader {
            client,
            base_url: settings.asset_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn load(&self) -> Result<TranslationTables, TranslationError> {
        let url = format!("{}/{}", self.base_url, LANGUAGES_PATH);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslationError::Http(status.as_u16()));
        }

        let body = response.text().await?;
        let tables: TranslationTables = serde_json::from_str(&body)?;
        Ok(tables)
    }
}
