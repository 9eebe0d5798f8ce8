use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

use crate::model::ModelError;
use crate::registry::RegistryError;
use crate::resolver::ResolveError;
use crate::schedule::ScheduleError;

/// Failures while building the site registry from configuration.
#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Could not find config file at '{0}'")]
    NoConfigFileFound(PathBuf),
    #[error(
        "File format not supported. File needs to end with .yaml, .yml, .json, .toml or .ron. {0:?}"
    )]
    UnsupportedConfigFormat(PathBuf),
    #[error("Environment variable expansion of config file failed. {0}")]
    EnvExpansion(String),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Caller-facing umbrella over every phase of this crate.
#[derive(Debug, Error)]
pub enum VisitScheduleError {
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Model(#[from] ModelError),
}
