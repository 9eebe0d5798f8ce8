pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod schedule;
pub(crate) mod utils;
mod validation;
#[cfg(test)]
mod test_suite;

pub use config::ConfigLoader;
pub use error::VisitScheduleError;
pub use model::{ScheduleReference, ScheduledRecord, StaticallyScheduled};
pub use registry::{ScheduleRegistry, SiteVisitSchedules};
pub use resolver::ScheduleResolver;
