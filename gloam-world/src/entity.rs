use std::fmt;

use gloam_util::math::vector3::Vector3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityType {
    Wraith,
    ZombieVillager,
    Bat,
    Spider,
    Skeleton,
    SkeletonDruid,
}

impl EntityType {
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Wraith => "gloam:wraith",
            Self::ZombieVillager => "minecraft:zombie_villager",
            Self::Bat => "minecraft:bat",
            Self::Spider => "minecraft:spider",
            Self::Skeleton => "minecraft:skeleton",
            Self::SkeletonDruid => "gloam:skeleton_druid",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// An entity handed to the world during generation.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnedEntity {
    pub entity_type: EntityType,
    pub position: Vector3<f64>,
}
