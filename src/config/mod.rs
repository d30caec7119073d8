pub mod settings;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use self::settings::Settings;

pub const DEFAULT_DATA_FILE: &str = "vehicles.txt";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "autolot")]
#[command(about = "A console menu tool for managing a small vehicle inventory")]
pub struct CliConfig {
    #[arg(long, help = "Inventory file offered as the default for save/load")]
    pub data_file: Option<String>,

    #[arg(long, help = "Path to an optional TOML settings file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Fills in values the command line left unset. Flags given explicitly
    /// win over the settings file.
    pub fn merge_settings(&mut self, settings: &Settings) {
        if self.data_file.is_none() {
            self.data_file = settings
                .inventory
                .as_ref()
                .and_then(|inventory| inventory.file.clone());
        }
        if !self.verbose {
            self.verbose = settings
                .logging
                .as_ref()
                .and_then(|logging| logging.verbose)
                .unwrap_or(false);
        }
    }

    pub fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", self.data_file())
    }
}
