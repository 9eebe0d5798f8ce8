use chrono::{DateTime, Utc};

use crate::schedule::{Schedule, Visit};

/// Lazy projection of a schedule's visits onto absolute datetimes.
///
/// Finite, ordered by timepoint, and recomputed from scratch on every call
/// to [`crate::resolver::ScheduleResolver::project_timepoints`] — nothing is
/// cached.
#[derive(Debug, Clone)]
pub struct Timepoints<'s> {
    baseline: DateTime<Utc>,
    visits: std::slice::Iter<'s, Visit>,
}

impl<'s> Timepoints<'s> {
    pub(crate) fn new(baseline: DateTime<Utc>, schedule: &'s Schedule) -> Self {
        Timepoints {
            baseline,
            visits: schedule.get_visits().iter(),
        }
    }
}

impl<'s> Iterator for Timepoints<'s> {
    type Item = (&'s Visit, DateTime<Utc>);

    fn next(&mut self) -> Option<Self::Item> {
        self.visits
            .next()
            .map(|visit| (visit, visit.timepoint_datetime(self.baseline)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.visits.size_hint()
    }
}

impl ExactSizeIterator for Timepoints<'_> {}
