use gloam_util::{
    math::vector2::Vector2,
    random::{RandomGenerator, RandomImpl, get_population_seed, legacy_rand::LegacyRand},
};

use crate::entity::EntityType;

pub mod spooky_forest;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpawnGroup {
    Creature,
    Monster,
}

/// One weighted entry of a biome's natural spawn list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnEntry {
    pub entity_type: EntityType,
    pub weight: u32,
    pub min_group: u32,
    pub max_group: u32,
}

impl SpawnEntry {
    pub const fn new(entity_type: EntityType, weight: u32, min_group: u32, max_group: u32) -> Self {
        Self {
            entity_type,
            weight,
            min_group,
            max_group,
        }
    }
}

/// How many of the shared vegetation features a biome asks for per chunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoratorCounts {
    pub flowers_per_chunk: u32,
    pub grass_per_chunk: u32,
    pub trees_per_chunk: u32,
}

/// The random a chunk is decorated with.
pub fn population_random(world_seed: i64, chunk: Vector2<i32>) -> RandomGenerator {
    let seed = get_population_seed(world_seed, chunk.x, chunk.y);
    RandomGenerator::Legacy(LegacyRand::from_seed(seed as u64))
}
