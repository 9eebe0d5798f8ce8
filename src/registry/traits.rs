use crate::registry::error::RegistryError;
use crate::schedule::VisitSchedule;

/// Read access to registered visit schedules.
///
/// The resolver takes this as an injected collaborator so the "not loaded"
/// condition is an explicit error at the lookup site rather than a hidden
/// global check.
pub trait ScheduleRegistry {
    fn get_visit_schedule(&self, name: &str) -> Result<&VisitSchedule, RegistryError>;

    fn is_loaded(&self) -> bool;
}
