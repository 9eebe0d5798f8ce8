use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error(
        "Invalid name '{0}'. Names are lowercase alphanumeric/underscore, \
         1-25 characters, with no '.'"
    )]
    InvalidName(String),
    #[error("Visit code '{0}' already exists in schedule '{1}'.")]
    DuplicateVisitCode(String, String),
    #[error("Timepoint {0} already exists in schedule '{1}'.")]
    DuplicateTimepoint(u32, String),
    #[error("Schedule '{0}' already exists in visit schedule '{1}'.")]
    DuplicateSchedule(String, String),
    #[error("Can't find schedule '{0}' in visit schedule '{1}'.")]
    ScheduleNotFound(String, String),
    #[error("Can't find visit '{0}' in schedule '{1}'.")]
    VisitNotFound(String, String),
}
