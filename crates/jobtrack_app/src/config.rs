use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::{LogDestination, LogLevel};

pub const DEFAULT_CONFIG_FILE: &str = "jobtrack.ron";
const DEFAULT_DATA_DIR: &str = ".jobtrack";
const DEFAULT_STORAGE_KEY: &str = "jobApplications";

/// Runtime settings, read from a RON file. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_destination: LogDestination::default(),
            log_level: LogLevel::default(),
        }
    }
}

/// An explicit path must exist; otherwise `./jobtrack.ron` is used when
/// present, falling back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_config(default_path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&text).with_context(|| format!("failed to parse config file {}", path.display()))
}

fn parse_config(text: &str) -> Result<AppConfig> {
    Ok(ron::from_str(text)?)
}
