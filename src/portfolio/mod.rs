pub(crate) mod portfolio_constants;
pub(crate) mod portfolio_model;
pub(crate) mod portfolio_service;

pub use portfolio_constants::*;
pub use portfolio_model::PortfolioSnapshot;
pub use portfolio_service::PortfolioService;
