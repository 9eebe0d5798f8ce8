use serde::{Deserialize, Serialize};

use crate::schedule::error::ScheduleError;
use crate::schedule::visit::Visit;
use crate::validation::name_validation::is_valid_name;

/// A named, ordered sequence of visit definitions.
///
/// Visits are kept sorted by timepoint; that order is the canonical one used
/// for timepoint projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Schedule {
    name: String,
    visits: Vec<Visit>,
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Result<Self, ScheduleError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ScheduleError::InvalidName(name));
        }
        Ok(Schedule {
            name,
            visits: vec![],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a visit, keeping the sequence sorted by timepoint. Duplicate
    /// visit codes and duplicate timepoints are rejected.
    pub fn add_visit(&mut self, visit: Visit) -> Result<(), ScheduleError> {
        if self.visits.iter().any(|v| v.code() == visit.code()) {
            return Err(ScheduleError::DuplicateVisitCode(
                visit.code().to_string(),
                self.name.clone(),
            ));
        }
        let position = match self
            .visits
            .binary_search_by_key(&visit.timepoint(), Visit::timepoint)
        {
            Ok(_) => {
                return Err(ScheduleError::DuplicateTimepoint(
                    visit.timepoint(),
                    self.name.clone(),
                ));
            }
            Err(position) => position,
        };
        self.visits.insert(position, visit);
        Ok(())
    }

    /// Visits in canonical (timepoint) order.
    pub fn get_visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn get_visit(&self, code: &str) -> Result<&Visit, ScheduleError> {
        self.visits
            .iter()
            .find(|v| v.code() == code)
            .ok_or_else(|| ScheduleError::VisitNotFound(code.to_string(), self.name.clone()))
    }
}
