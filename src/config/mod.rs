pub mod config_loader;
pub mod schedule_config;

pub use config_loader::ConfigLoader;
pub use schedule_config::{
    ScheduleConfig, ScheduleDefinitionConfig, VisitConfig, VisitScheduleConfig,
};
