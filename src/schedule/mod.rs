pub mod error;
pub mod schedule;
pub mod visit;
pub mod visit_schedule;

pub use error::ScheduleError;
pub use schedule::Schedule;
pub use visit::{BaseIntervalUnit, Visit};
pub use visit_schedule::VisitSchedule;
