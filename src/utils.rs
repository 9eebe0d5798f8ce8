use chrono::{DateTime, Days, Months, Utc};

use crate::schedule::BaseIntervalUnit;

/// Displaces `baseline` by `interval` calendar units.
///
/// Month and year offsets are calendar-aware: the day-of-month is clamped to
/// the last day of the target month (2024-01-31 + 1 month = 2024-02-29).
pub(crate) fn calendar_offset(
    baseline: DateTime<Utc>,
    interval: u32,
    unit: BaseIntervalUnit,
) -> DateTime<Utc> {
    match unit {
        BaseIntervalUnit::Days => baseline + Days::new(u64::from(interval)),
        BaseIntervalUnit::Weeks => baseline + Days::new(7 * u64::from(interval)),
        BaseIntervalUnit::Months => baseline + Months::new(interval),
        BaseIntervalUnit::Years => baseline + Months::new(interval.saturating_mul(12)),
    }
}
