use thiserror::Error;

/// Failure to load the language tables. Always recovered locally via
/// the embedded default table; never blocks initialization.
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Http(u16),

    #[error("Parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}
