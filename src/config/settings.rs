use crate::utils::error::{LotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;

/// Optional TOML settings file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub inventory: Option<InventorySettings>,
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySettings {
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub verbose: Option<bool>,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LotError::ConfigError {
            message: format!("Failed to parse settings file: {}", e),
        })
    }

    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| LotError::FileAccess {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
