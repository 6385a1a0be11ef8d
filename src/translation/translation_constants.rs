pub const DEFAULT_LANGUAGE: &str = "en";
pub const LANGUAGES_PATH: &str = "languages.json";
pub const TRANSLATION_TIMEOUT_SECS: u64 = 10;
