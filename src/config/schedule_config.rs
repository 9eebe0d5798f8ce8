use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;
use crate::registry::SiteVisitSchedules;
use crate::schedule::{BaseIntervalUnit, Schedule, Visit, VisitSchedule};

/// Declarative mirror of the domain model, as it appears in configuration
/// files. Converted into a registry through the validating domain
/// constructors, so a config file cannot smuggle in invalid names or
/// duplicate visits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleConfig {
    pub visit_schedules: Vec<VisitScheduleConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VisitScheduleConfig {
    pub name: String,
    pub schedules: Vec<ScheduleDefinitionConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduleDefinitionConfig {
    pub name: String,
    pub visits: Vec<VisitConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VisitConfig {
    pub code: String,
    pub title: String,
    pub timepoint: u32,
    pub base_interval: u32,
    pub base_interval_unit: BaseIntervalUnit,
}

impl TryFrom<ScheduleConfig> for SiteVisitSchedules {
    type Error = ConstructionError;

    fn try_from(config: ScheduleConfig) -> Result<Self, Self::Error> {
        let mut site = SiteVisitSchedules::new();
        for visit_schedule_config in config.visit_schedules {
            let mut visit_schedule = VisitSchedule::new(visit_schedule_config.name)?;
            for schedule_config in visit_schedule_config.schedules {
                let mut schedule = Schedule::new(schedule_config.name)?;
                for visit_config in schedule_config.visits {
                    schedule.add_visit(Visit::new(
                        visit_config.code,
                        visit_config.title,
                        visit_config.timepoint,
                        visit_config.base_interval,
                        visit_config.base_interval_unit,
                    )?)?;
                }
                visit_schedule.add_schedule(schedule)?;
            }
            site.register(visit_schedule)?;
        }
        info!(
            "Loaded {} visit schedule(s) into the site registry",
            site.visit_schedules().count()
        );
        Ok(site)
    }
}
