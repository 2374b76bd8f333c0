//! Optional `minuta.ron` in the working directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use minuta_logging::{LogDestination, LogSettings};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "minuta.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("unknown log level {0:?}")]
    Level(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
enum Destination {
    #[default]
    Terminal,
    File,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    log_destination: Destination,
    log_level: String,
    log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_destination: Destination::Terminal,
            log_level: "info".to_string(),
            log_file: PathBuf::from("minuta.log"),
        }
    }
}

impl AppConfig {
    pub fn log_settings(&self) -> Result<LogSettings, ConfigError> {
        let level = LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::Level(self.log_level.clone()))?;
        let destination = match self.log_destination {
            Destination::Terminal => LogDestination::Terminal,
            Destination::File => LogDestination::File,
            Destination::Both => LogDestination::Both,
        };
        Ok(LogSettings {
            destination,
            level,
            file: self.log_file.clone(),
        })
    }
}

/// `Ok(None)` when the file does not exist.
pub fn try_load(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(ron::from_str(&content)?))
}

/// Runs before the logger exists, so problems go to stderr.
pub fn load_log_settings(path: &Path) -> LogSettings {
    let config = match try_load(path) {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("Warning: ignoring config {:?}: {}", path, err);
            AppConfig::default()
        }
    };
    config.log_settings().unwrap_or_else(|err| {
        eprintln!("Warning: ignoring config {:?}: {}", path, err);
        LogSettings::default()
    })
}
