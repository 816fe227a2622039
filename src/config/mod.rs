use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{
    errors::{BooksError, Result},
    utils,
};

/// Operator-facing configuration: store location and invoice branding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub business_name: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            business_name: "My Studio".into(),
            currency: "INR".into(),
            data_dir: None,
        }
    }
}

impl Config {
    /// The worksheet directory this configuration points at.
    pub fn books_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(utils::books_dir)
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(utils::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        utils::ensure_dir(&base).map_err(|err| {
            BooksError::Config(format!("cannot create `{}`: {err}", base.display()))
        })?;
        Ok(Self {
            path: base.join("config.json"),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored configuration, or defaults when none exists yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)
                .map_err(|err| BooksError::Config(err.to_string()))?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).map_err(|err| BooksError::Config(err.to_string()))?;
        Ok(())
    }
}
