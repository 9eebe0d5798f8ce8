use log::debug;
use ordermap::OrderMap;

use crate::registry::error::RegistryError;
use crate::registry::traits::ScheduleRegistry;
use crate::schedule::VisitSchedule;

/// In-memory registry of visit schedules, populated once at startup and read
/// thereafter. Never locked internally: share it immutably after the load
/// phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteVisitSchedules {
    registry: OrderMap<String, VisitSchedule>,
}

impl SiteVisitSchedules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, visit_schedule: VisitSchedule) -> Result<(), RegistryError> {
        if self.registry.contains_key(visit_schedule.name()) {
            return Err(RegistryError::AlreadyRegistered(
                visit_schedule.name().to_string(),
            ));
        }
        debug!(
            "Registered visit schedule '{}' ({} schedule(s))",
            visit_schedule.name(),
            visit_schedule.schedules().count()
        );
        self.registry
            .insert(visit_schedule.name().to_string(), visit_schedule);
        Ok(())
    }

    /// Visit schedules in registration order.
    pub fn visit_schedules(&self) -> impl Iterator<Item = &VisitSchedule> {
        self.registry.values()
    }

    fn registered_names(&self) -> String {
        self.registry
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ScheduleRegistry for SiteVisitSchedules {
    fn get_visit_schedule(&self, name: &str) -> Result<&VisitSchedule, RegistryError> {
        if !self.is_loaded() {
            return Err(RegistryError::NotLoaded);
        }
        self.registry
            .get(name)
            .ok_or_else(|| RegistryError::NotRegistered {
                name: name.to_string(),
                registered: self.registered_names(),
            })
    }

    fn is_loaded(&self) -> bool {
        !self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn site() -> SiteVisitSchedules {
        let mut site = SiteVisitSchedules::new();
        site.register(VisitSchedule::new("protocol_one").unwrap())
            .unwrap();
        site
    }

    #[rstest]
    fn empty_registry_is_not_loaded() {
        let site = SiteVisitSchedules::new();
        assert!(!site.is_loaded());
        assert_eq!(
            site.get_visit_schedule("protocol_one").unwrap_err(),
            RegistryError::NotLoaded
        );
    }

    #[rstest]
    fn get_registered_visit_schedule(site: SiteVisitSchedules) {
        assert!(site.is_loaded());
        assert_eq!(
            site.get_visit_schedule("protocol_one").unwrap().name(),
            "protocol_one"
        );
    }

    #[rstest]
    fn unknown_name_lists_what_is_registered(site: SiteVisitSchedules) {
        assert_eq!(
            site.get_visit_schedule("protocol_two").unwrap_err(),
            RegistryError::NotRegistered {
                name: "protocol_two".to_string(),
                registered: "protocol_one".to_string(),
            }
        );
    }

    #[rstest]
    fn rejects_duplicate_registration(mut site: SiteVisitSchedules) {
        assert_eq!(
            site.register(VisitSchedule::new("protocol_one").unwrap())
                .unwrap_err(),
            RegistryError::AlreadyRegistered("protocol_one".to_string())
        );
    }

    #[rstest]
    fn iteration_preserves_registration_order(mut site: SiteVisitSchedules) {
        site.register(VisitSchedule::new("protocol_two").unwrap())
            .unwrap();
        let names: Vec<&str> = site.visit_schedules().map(VisitSchedule::name).collect();
        assert_eq!(names, vec!["protocol_one", "protocol_two"]);
    }
}
