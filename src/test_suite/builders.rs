//! Shared builders for tests. A baseline of 2024-01-31 pairs with the
//! three-visit schedule to exercise end-of-month clamping.

use crate::registry::SiteVisitSchedules;
use crate::schedule::{BaseIntervalUnit, Schedule, Visit, VisitSchedule};

/// Baseline visit plus month-one and month-two follow-ups.
pub(crate) fn three_visit_schedule() -> Schedule {
    let mut schedule = Schedule::new("schedule_one").unwrap();
    schedule
        .add_visit(Visit::new("1000", "Baseline", 0, 0, BaseIntervalUnit::Days).unwrap())
        .unwrap();
    schedule
        .add_visit(Visit::new("2000", "Month one", 1, 1, BaseIntervalUnit::Months).unwrap())
        .unwrap();
    schedule
        .add_visit(Visit::new("3000", "Month two", 2, 2, BaseIntervalUnit::Months).unwrap())
        .unwrap();
    schedule
}

/// A registry holding `protocol_one.schedule_one` with three visits.
pub(crate) fn loaded_site() -> SiteVisitSchedules {
    let mut visit_schedule = VisitSchedule::new("protocol_one").unwrap();
    visit_schedule.add_schedule(three_visit_schedule()).unwrap();

    let mut site = SiteVisitSchedules::new();
    site.register(visit_schedule).unwrap();
    site
}
