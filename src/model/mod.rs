pub mod error;
pub mod schedule_reference;
pub mod traits;

pub use error::ModelError;
pub use schedule_reference::ScheduleReference;
pub use traits::{ScheduledRecord, StaticallyScheduled};
