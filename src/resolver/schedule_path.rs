use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

use crate::resolver::error::ResolveError;

/// Parsed form of the dotted `"<visit_schedule_name>.<schedule_name>"`
/// reference stored on a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchedulePath {
    visit_schedule_name: String,
    schedule_name: String,
}

impl SchedulePath {
    /// Splits `path` on `.`. Anything other than exactly two non-empty
    /// segments is malformed.
    pub fn parse(path: &str) -> Result<Self, ResolveError> {
        let mut segments = path.split('.');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(visit_schedule_name), Some(schedule_name), None)
                if !visit_schedule_name.is_empty() && !schedule_name.is_empty() =>
            {
                Ok(SchedulePath {
                    visit_schedule_name: visit_schedule_name.to_string(),
                    schedule_name: schedule_name.to_string(),
                })
            }
            _ => Err(ResolveError::MalformedPath(path.to_string())),
        }
    }

    pub fn visit_schedule_name(&self) -> &str {
        &self.visit_schedule_name
    }

    pub fn schedule_name(&self) -> &str {
        &self.schedule_name
    }
}

impl FromStr for SchedulePath {
    type Err = ResolveError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        SchedulePath::parse(path)
    }
}

impl Display for SchedulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.visit_schedule_name, self.schedule_name)
    }
}
