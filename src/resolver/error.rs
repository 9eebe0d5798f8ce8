use thiserror::Error;

use crate::registry::RegistryError;
use crate::schedule::ScheduleError;

/// Underlying cause of a failed lookup for a syntactically valid path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The stored path string does not split into exactly two non-empty
    /// segments. A data-integrity problem upstream; never retried.
    #[error("Malformed schedule path '{0}'. Expected '<visit_schedule_name>.<schedule_name>'.")]
    MalformedPath(String),
    /// Resolution was attempted before the registry was populated. Retryable
    /// once loading completes.
    #[error("path: '{path}'. Got {source}")]
    RegistryNotLoaded {
        path: String,
        #[source]
        source: RegistryError,
    },
    /// The path is well-formed but names no registered visit schedule or
    /// schedule. A configuration or data error; never retried.
    #[error("Can't resolve '{path}'. Got {source}")]
    Resolution {
        path: String,
        #[source]
        source: ResolutionError,
    },
}
