pub(crate) mod translation_constants;
pub(crate) mod translation_errors;
pub(crate) mod translation_service;

pub use translation_constants::*;
pub use translation_errors::TranslationError;
pub use translation_service::{TranslationLoader, TranslationService, TranslationTables};
