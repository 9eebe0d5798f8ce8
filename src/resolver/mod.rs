pub mod error;
pub mod schedule_path;
pub mod schedule_resolver;
pub mod timepoints;

pub use error::{ResolutionError, ResolveError};
pub use schedule_path::SchedulePath;
pub use schedule_resolver::ScheduleResolver;
pub use timepoints::Timepoints;
