use serde::{Deserialize, Serialize};

use crate::{ConfigError, check_chance};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpookyForestConfig {
    pub mushgloom_chance: i32,
    /// Placement tries of a mushgloom patch.
    pub mushgloom_spread: u32,
    pub web_attempts: u32,
    pub lamppost_chance: i32,
    pub pumpkin_chance: i32,
    pub dead_bush_attempts: u32,
    /// Placement tries of every dead bush patch.
    pub dead_bush_spread: u32,
    pub graveyard_chance: f32,
    pub sea_level: i32,
    pub chunk_height: i32,
}

impl Default for SpookyForestConfig {
    fn default() -> Self {
        Self {
            mushgloom_chance: 24,
            mushgloom_spread: 128,
            web_attempts: 36,
            lamppost_chance: 2,
            pumpkin_chance: 16,
            dead_bush_attempts: 6,
            dead_bush_spread: 8,
            graveyard_chance: 0.025,
            sea_level: 31,
            chunk_height: 256,
        }
    }
}

impl SpookyForestConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_chance("spooky_forest.mushgloom_chance", self.mushgloom_chance)?;
        check_chance("spooky_forest.lamppost_chance", self.lamppost_chance)?;
        check_chance("spooky_forest.pumpkin_chance", self.pumpkin_chance)?;
        if self.chunk_height <= self.sea_level {
            return Err(ConfigError::Invalid(format!(
                "spooky_forest.chunk_height ({}) must be above sea_level ({})",
                self.chunk_height, self.sea_level
            )));
        }
        Ok(())
    }
}
