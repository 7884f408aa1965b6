use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::IntakeError;
use crate::utils::{app_data_dir, config_file_in, ensure_dir, write_atomic};

/// CLI configuration persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_client: Option<Uuid>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-AU".into(),
            last_client: None,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, IntakeError> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, IntakeError> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self, IntakeError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, IntakeError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), IntakeError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }
}
