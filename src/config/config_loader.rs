use config::{Config, File, FileFormat};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::config::schedule_config::ScheduleConfig;
use crate::error::ConstructionError;
use crate::registry::SiteVisitSchedules;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads a config file, picking the format from the file extension.
    ///
    /// `$VAR` references in the file are expanded from the environment
    /// before parsing; literal dollar signs must be escaped as `\$`.
    pub fn load<T: DeserializeOwned>(file_path: &Path) -> Result<T, ConstructionError> {
        if !file_path.exists() {
            return Err(ConstructionError::NoConfigFileFound(
                file_path.to_path_buf(),
            ));
        }
        let file_format = match file_path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            Some("toml") => FileFormat::Toml,
            Some("ron") => FileFormat::Ron,
            _ => {
                return Err(ConstructionError::UnsupportedConfigFormat(
                    file_path.to_path_buf(),
                ));
            }
        };

        let config_str = fs::read_to_string(file_path)?;
        let config_str = shellexpand::env(&config_str)
            .map_err(|err| ConstructionError::EnvExpansion(err.to_string()))?;

        let config = Config::builder()
            .add_source(File::from_str(&config_str, file_format))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Loads a schedule config file straight into a populated registry.
    pub fn load_site(file_path: &Path) -> Result<SiteVisitSchedules, ConstructionError> {
        let schedule_config: ScheduleConfig = Self::load(file_path)?;
        SiteVisitSchedules::try_from(schedule_config)
    }
}
