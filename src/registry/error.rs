use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Registry not loaded. Register visit schedules before doing lookups.")]
    NotLoaded,
    #[error("Can't find visit schedule '{name}'. Registered visit schedules are [{registered}].")]
    NotRegistered { name: String, registered: String },
    #[error("Visit schedule '{0}' is already registered.")]
    AlreadyRegistered(String),
}
