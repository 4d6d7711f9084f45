use std::{fs, path::Path};

use gloam_util::world_seed::Seed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod biome;
pub mod graveyard;
pub mod logging;

pub use biome::SpookyForestConfig;
pub use graveyard::GraveyardConfig;
pub use logging::LoggingConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Fails with [`ConfigError::Invalid`] unless `chance` is a usable one in `n` roll.
pub(crate) fn check_chance(name: &str, chance: i32) -> Result<(), ConfigError> {
    if chance > 0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {chance}")))
    }
}

/// Root of `gloam.toml`. Every table and key is optional.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GloamConfig {
    /// World seed; a random one is picked when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
    pub logging: LoggingConfig,
    pub graveyard: GraveyardConfig,
    pub spooky_forest: SpookyForestConfig,
}

impl GloamConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.graveyard.validate()?;
        self.spooky_forest.validate()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
