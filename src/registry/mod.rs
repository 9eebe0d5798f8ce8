pub mod error;
pub mod site_visit_schedules;
pub mod traits;

pub use error::RegistryError;
pub use site_visit_schedules::SiteVisitSchedules;
pub use traits::ScheduleRegistry;
