use chrono::{DateTime, Utc};

use crate::model::error::ModelError;
use crate::model::schedule_reference::ScheduleReference;
use crate::registry::ScheduleRegistry;
use crate::resolver::{ScheduleResolver, Timepoints};
use crate::schedule::{Schedule, Visit, VisitSchedule};

/// Capability set for record types that carry a [`ScheduleReference`].
///
/// Implement `schedule_reference` and the resolution methods come for free;
/// their errors name the record type so a bad stored reference can be traced
/// back to its owner.
pub trait ScheduledRecord {
    fn schedule_reference(&self) -> &ScheduleReference;

    fn visit_schedule<'r>(
        &self,
        registry: &'r dyn ScheduleRegistry,
    ) -> Result<&'r VisitSchedule, ModelError> {
        ScheduleResolver::new(registry)
            .resolve_visit_schedule(&self.schedule_reference().path())
            .map_err(|source| ModelError::Resolve {
                record: std::any::type_name::<Self>(),
                source,
            })
    }

    fn schedule<'r>(&self, registry: &'r dyn ScheduleRegistry) -> Result<&'r Schedule, ModelError> {
        ScheduleResolver::new(registry)
            .resolve_schedule(&self.schedule_reference().path())
            .map_err(|source| ModelError::Resolve {
                record: std::any::type_name::<Self>(),
                source,
            })
    }

    fn visits<'r>(&self, registry: &'r dyn ScheduleRegistry) -> Result<&'r [Visit], ModelError> {
        Ok(self.schedule(registry)?.get_visits())
    }

    /// Expected visit datetimes for this record's schedule, projected from
    /// `baseline` in timepoint order.
    fn timepoint_datetimes<'r>(
        &self,
        registry: &'r dyn ScheduleRegistry,
        baseline: DateTime<Utc>,
    ) -> Result<Timepoints<'r>, ModelError> {
        let schedule = self.schedule(registry)?;
        Ok(ScheduleResolver::new(registry).project_timepoints(baseline, schedule))
    }
}

/// For record types whose schedule membership is fixed per type rather than
/// per instance: the dotted path is an associated const on the type.
pub trait StaticallyScheduled {
    /// `"<visit_schedule_name>.<schedule_name>"`.
    const VISIT_SCHEDULE_NAME: &'static str;

    fn declared_visit_schedule<'r>(
        registry: &'r dyn ScheduleRegistry,
    ) -> Result<&'r VisitSchedule, ModelError>
    where
        Self: Sized,
    {
        ScheduleResolver::new(registry)
            .resolve_visit_schedule(Self::VISIT_SCHEDULE_NAME)
            .map_err(|source| ModelError::Resolve {
                record: std::any::type_name::<Self>(),
                source,
            })
    }

    fn declared_schedule<'r>(
        registry: &'r dyn ScheduleRegistry,
    ) -> Result<&'r Schedule, ModelError>
    where
        Self: Sized,
    {
        ScheduleResolver::new(registry)
            .resolve_schedule(Self::VISIT_SCHEDULE_NAME)
            .map_err(|source| ModelError::Resolve {
                record: std::any::type_name::<Self>(),
                source,
            })
    }
}
