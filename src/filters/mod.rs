pub(crate) mod filters_model;
pub(crate) mod filters_service;

pub use filters_model::{CoinCategory, FilterRule, FilterState};
pub use filters_service::FilterEngine;
