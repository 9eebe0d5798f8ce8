use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::schedule::error::ScheduleError;
use crate::utils::calendar_offset;
use crate::validation::name_validation::is_valid_name;

/// Calendar unit applied to a visit's `base_interval`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BaseIntervalUnit {
    Days,
    Weeks,
    Months,
    Years,
}

/// One expected encounter template within a schedule.
///
/// `base_interval == 0` means the visit coincides with the baseline date;
/// any positive value is added to the baseline using `base_interval_unit`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Visit {
    code: String,
    title: String,
    timepoint: u32,
    base_interval: u32,
    base_interval_unit: BaseIntervalUnit,
}

impl Visit {
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        timepoint: u32,
        base_interval: u32,
        base_interval_unit: BaseIntervalUnit,
    ) -> Result<Self, ScheduleError> {
        let code = code.into();
        if !is_valid_name(&code) {
            return Err(ScheduleError::InvalidName(code));
        }
        Ok(Visit {
            code,
            title: title.into(),
            timepoint,
            base_interval,
            base_interval_unit,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn timepoint(&self) -> u32 {
        self.timepoint
    }

    pub fn base_interval(&self) -> u32 {
        self.base_interval
    }

    pub fn base_interval_unit(&self) -> BaseIntervalUnit {
        self.base_interval_unit
    }

    /// The absolute datetime this visit is expected at, given a baseline.
    pub fn timepoint_datetime(&self, baseline: DateTime<Utc>) -> DateTime<Utc> {
        if self.base_interval == 0 {
            baseline
        } else {
            calendar_offset(baseline, self.base_interval, self.base_interval_unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn zero_interval_coincides_with_baseline() {
        let baseline = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
        let visit = Visit::new("1000", "Baseline", 0, 0, BaseIntervalUnit::Days).unwrap();
        assert_eq!(visit.timepoint_datetime(baseline), baseline);
    }

    #[rstest]
    fn positive_interval_is_added_to_baseline() {
        let baseline = Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap();
        let visit = Visit::new("2000", "Month two", 1, 2, BaseIntervalUnit::Months).unwrap();
        assert_eq!(
            visit.timepoint_datetime(baseline),
            Utc.with_ymd_and_hms(2024, 3, 31, 9, 0, 0).unwrap()
        );
    }

    #[rstest]
    fn rejects_invalid_visit_code() {
        let result = Visit::new("Visit 1", "Baseline", 0, 0, BaseIntervalUnit::Days);
        assert_eq!(
            result.unwrap_err(),
            ScheduleError::InvalidName("Visit 1".to_string())
        );
    }

    #[rstest]
    #[case("days", BaseIntervalUnit::Days)]
    #[case("weeks", BaseIntervalUnit::Weeks)]
    #[case("months", BaseIntervalUnit::Months)]
    #[case("years", BaseIntervalUnit::Years)]
    fn interval_unit_round_trips_through_strings(
        #[case] text: &str,
        #[case] unit: BaseIntervalUnit,
    ) {
        assert_eq!(BaseIntervalUnit::from_str(text).unwrap(), unit);
        assert_eq!(unit.to_string(), text);
    }
}
