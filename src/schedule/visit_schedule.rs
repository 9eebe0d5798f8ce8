use ordermap::OrderMap;
use serde::{Deserialize, Serialize};

use crate::schedule::error::ScheduleError;
use crate::schedule::schedule::Schedule;
use crate::validation::name_validation::is_valid_name;

/// A named collection of schedules, keyed by schedule name.
///
/// Registry-owned once registered; lookups hand out shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VisitSchedule {
    name: String,
    schedules: OrderMap<String, Schedule>,
}

impl VisitSchedule {
    pub fn new(name: impl Into<String>) -> Result<Self, ScheduleError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ScheduleError::InvalidName(name));
        }
        Ok(VisitSchedule {
            name,
            schedules: OrderMap::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_schedule(&mut self, schedule: Schedule) -> Result<(), ScheduleError> {
        if self.schedules.contains_key(schedule.name()) {
            return Err(ScheduleError::DuplicateSchedule(
                schedule.name().to_string(),
                self.name.clone(),
            ));
        }
        self.schedules.insert(schedule.name().to_string(), schedule);
        Ok(())
    }

    pub fn get_schedule(&self, schedule_name: &str) -> Result<&Schedule, ScheduleError> {
        self.schedules.get(schedule_name).ok_or_else(|| {
            ScheduleError::ScheduleNotFound(schedule_name.to_string(), self.name.clone())
        })
    }

    /// Schedules in the order they were added.
    pub fn schedules(&self) -> impl Iterator<Item = &Schedule> {
        self.schedules.values()
    }
}
