use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::error::ModelError;
use crate::validation::name_validation::validate_name_segment;

/// The stored string fields linking a record to its visit schedule.
///
/// Set once when the owning record is created and never edited afterwards;
/// there are deliberately no mutators. `visit_code` is optional — not every
/// scheduled record pins a single visit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct ScheduleReference {
    #[validate(custom(function = "validate_name_segment"))]
    visit_schedule_name: String,
    #[validate(custom(function = "validate_name_segment"))]
    schedule_name: String,
    #[validate(custom(function = "validate_name_segment"))]
    visit_code: Option<String>,
}

impl ScheduleReference {
    pub fn new(
        visit_schedule_name: impl Into<String>,
        schedule_name: impl Into<String>,
        visit_code: Option<String>,
    ) -> Result<Self, ModelError> {
        let reference = ScheduleReference {
            visit_schedule_name: visit_schedule_name.into(),
            schedule_name: schedule_name.into(),
            visit_code,
        };
        reference.validate()?;
        Ok(reference)
    }

    pub fn visit_schedule_name(&self) -> &str {
        &self.visit_schedule_name
    }

    pub fn schedule_name(&self) -> &str {
        &self.schedule_name
    }

    pub fn visit_code(&self) -> Option<&str> {
        self.visit_code.as_deref()
    }

    /// The dotted path the resolver consumes.
    pub fn path(&self) -> String {
        format!("{}.{}", self.visit_schedule_name, self.schedule_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn joins_names_into_dotted_path() {
        let reference =
            ScheduleReference::new("protocol_one", "schedule_one", Some("1000".to_string()))
                .unwrap();
        assert_eq!(reference.path(), "protocol_one.schedule_one");
        assert_eq!(reference.visit_code(), Some("1000"));
    }

    #[rstest]
    fn visit_code_is_optional() {
        let reference = ScheduleReference::new("protocol_one", "schedule_one", None).unwrap();
        assert_eq!(reference.visit_code(), None);
    }

    #[rstest]
    #[case("Protocol One", "schedule_one", None)]
    #[case("protocol_one", "", None)]
    #[case("protocol_one", "schedule.one", None)]
    #[case("protocol_one", "schedule_one", Some("Visit 1".to_string()))]
    #[case("twenty_six_characters_here", "schedule_one", None)]
    fn invalid_segments_fail_validation(
        #[case] visit_schedule_name: &str,
        #[case] schedule_name: &str,
        #[case] visit_code: Option<String>,
    ) {
        let result = ScheduleReference::new(visit_schedule_name, schedule_name, visit_code);
        assert!(matches!(result, Err(ModelError::Validation(_))));
    }

    #[rstest]
    fn serde_round_trip() {
        let reference =
            ScheduleReference::new("protocol_one", "schedule_one", Some("1000".to_string()))
                .unwrap();
        let json = serde_json::to_string(&reference).unwrap();
        let back: ScheduleReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}
