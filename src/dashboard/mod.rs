//! Top-level controller: owns the app state, dispatches commands, and
//! drives the acquisition -> normalize -> replace -> derive pipeline.

pub(crate) mod dashboard_constants;
pub(crate) mod dashboard_model;
pub(crate) mod dashboard_service;
pub(crate) mod dashboard_traits;


pub use dashboard_constants::*;
pub use dashboard_model::{Command, StatusSeverity};
pub use dashboard_service::DashboardService;
pub use dashboard_traits::PresentationSink;
