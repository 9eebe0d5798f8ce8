use chrono::{DateTime, Utc};
use log::debug;

use crate::registry::{RegistryError, ScheduleRegistry};
use crate::resolver::error::ResolveError;
use crate::resolver::schedule_path::SchedulePath;
use crate::resolver::timepoints::Timepoints;
use crate::schedule::{Schedule, VisitSchedule};

/// Stateless lookup service translating stored dotted-path references into
/// registry-owned schedule metadata.
///
/// Idempotent for an unchanged registry; no side effects, no caching.
pub struct ScheduleResolver<'r> {
    registry: &'r dyn ScheduleRegistry,
}

impl<'r> ScheduleResolver<'r> {
    pub fn new(registry: &'r dyn ScheduleRegistry) -> Self {
        ScheduleResolver { registry }
    }

    /// Resolves the visit schedule named by the first path segment.
    ///
    /// The second segment is parsed but not looked up: the full
    /// `"<visit_schedule_name>.<schedule_name>"` format is validated even
    /// when only the outer object is wanted.
    pub fn resolve_visit_schedule(&self, path: &str) -> Result<&'r VisitSchedule, ResolveError> {
        let parsed = SchedulePath::parse(path)?;
        self.lookup_visit_schedule(&parsed)
    }

    /// Resolves the schedule named by both path segments.
    pub fn resolve_schedule(&self, path: &str) -> Result<&'r Schedule, ResolveError> {
        let parsed = SchedulePath::parse(path)?;
        let visit_schedule = self.lookup_visit_schedule(&parsed)?;
        let schedule = visit_schedule
            .get_schedule(parsed.schedule_name())
            .map_err(|source| ResolveError::Resolution {
                path: parsed.to_string(),
                source: source.into(),
            })?;
        debug!("Resolved '{parsed}' to schedule '{}'", schedule.name());
        Ok(schedule)
    }

    /// Projects `schedule`'s visits onto absolute datetimes from `baseline`,
    /// in timepoint order. Visits with `base_interval == 0` fall on the
    /// baseline itself.
    pub fn project_timepoints<'s>(
        &self,
        baseline: DateTime<Utc>,
        schedule: &'s Schedule,
    ) -> Timepoints<'s> {
        Timepoints::new(baseline, schedule)
    }

    fn lookup_visit_schedule(
        &self,
        parsed: &SchedulePath,
    ) -> Result<&'r VisitSchedule, ResolveError> {
        self.registry
            .get_visit_schedule(parsed.visit_schedule_name())
            .map_err(|source| match source {
                RegistryError::NotLoaded => ResolveError::RegistryNotLoaded {
                    path: parsed.to_string(),
                    source,
                },
                source => ResolveError::Resolution {
                    path: parsed.to_string(),
                    source: source.into(),
                },
            })
    }
}
