use gloam_util::resource_location::ResourceLocation;
use serde::{Deserialize, Serialize};

use crate::{ConfigError, check_chance};

/// Tunables of the graveyard feature. A chance of `n` means one in `n`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GraveyardConfig {
    /// Salt mixed into the chunk seed of the layout random.
    pub seed_salt: i64,
    /// Largest accepted population standard deviation of ground heights.
    pub max_height_deviation: f64,
    pub web_chance: i32,
    /// Chance for a non ground cover block of the base to become a cobweb.
    pub obstruction_chance: i32,
    pub eventful_chance: i32,
    pub trap_chance: i32,
    pub spawner_chance: i32,
    pub loot_table: String,
    pub templates: GraveyardTemplates,
}

impl Default for GraveyardConfig {
    fn default() -> Self {
        Self {
            seed_salt: 987234911,
            max_height_deviation: 2.0,
            web_chance: 12,
            obstruction_chance: 5,
            eventful_chance: 2,
            trap_chance: 3,
            spawner_chance: 4,
            loot_table: "graveyard".to_string(),
            templates: GraveyardTemplates::default(),
        }
    }
}

impl GraveyardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_chance("graveyard.web_chance", self.web_chance)?;
        check_chance("graveyard.obstruction_chance", self.obstruction_chance)?;
        check_chance("graveyard.eventful_chance", self.eventful_chance)?;
        check_chance("graveyard.trap_chance", self.trap_chance)?;
        check_chance("graveyard.spawner_chance", self.spawner_chance)?;
        if self.max_height_deviation.is_nan() || self.max_height_deviation < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "graveyard.max_height_deviation must not be negative, got {}",
                self.max_height_deviation
            )));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GraveyardTemplates {
    pub base: ResourceLocation,
    pub trap: ResourceLocation,
    pub grave_full: ResourceLocation,
    pub grave_upper: ResourceLocation,
    pub grave_lower: ResourceLocation,
}

impl Default for GraveyardTemplates {
    fn default() -> Self {
        Self {
            base: ResourceLocation::gloam("landscape/graveyard/graveyard"),
            trap: ResourceLocation::gloam("landscape/graveyard/grave_trap"),
            grave_full: ResourceLocation::gloam("landscape/graveyard/grave_full"),
            grave_upper: ResourceLocation::gloam("landscape/graveyard/grave_upper"),
            grave_lower: ResourceLocation::gloam("landscape/graveyard/grave_lower"),
        }
    }
}
