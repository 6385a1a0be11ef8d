pub(crate) mod scheduler_constants;
pub(crate) mod scheduler_model;
pub(crate) mod scheduler_service;
pub(crate) mod scheduler_traits;

pub use scheduler_constants::*;
pub use scheduler_model::RefreshState;
pub use scheduler_service::RefreshScheduler;
pub use scheduler_traits::SchedulerHooks;
