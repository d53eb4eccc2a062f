//! Config management use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, CONFIG_FILE};
use std::path::PathBuf;

/// Service for reading and editing one config file
pub struct ConfigService {
    config_path: PathBuf,
}

impl ConfigService {
    /// Service for an explicit config file
    pub fn new(config_path: PathBuf) -> Self {
        ConfigService { config_path }
    }

    /// Service for the `linktags.toml` of a discovered project
    pub fn for_repository(repository: &FileSystemRepository) -> Self {
        Self::new(repository.root.join(CONFIG_FILE))
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        self.list()?.get(key)
    }

    /// Set a config value and save
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.list()?;
        config.set(key, value)?;
        config.save_to_file(&self.config_path)
    }

    /// Load the whole config
    pub fn list(&self) -> Result<Config> {
        Config::load_from_file(&self.config_path)
    }
}
