use gloam_config::GraveyardConfig;
use gloam_util::math::{position::BlockPos, vector3::Vector3};
use gloam_world::{
    ProtoRegion,
    block::{Block, BlockState},
    generation::{
        feature::features::graveyard::{GraveyardFeature, builtin},
        structure::manager::TemplateManager,
    },
};

pub const GROUND_Y: i32 = 63;

/// Stone up to `GROUND_Y - 1` under a single layer of grass.
pub fn flat_world(seed: i64) -> ProtoRegion {
    let mut region = ProtoRegion::new(seed, BlockPos::new(-32, 0, -32), Vector3::new(96, 128, 96));
    region.fill(
        BlockPos::new(-32, 0, -32),
        BlockPos::new(63, GROUND_Y - 1, 63),
        BlockState::new(Block::STONE),
    );
    region.fill(
        BlockPos::new(-32, GROUND_Y, -32),
        BlockPos::new(63, GROUND_Y, 63),
        BlockState::new(Block::GRASS_BLOCK),
    );
    region
}

pub fn graveyard(config: GraveyardConfig) -> GraveyardFeature {
    let mut manager = TemplateManager::new();
    builtin::register(&mut manager, &config.templates);
    GraveyardFeature::new(&manager, config).unwrap()
}

/// Seeds far apart, so their first draws are not correlated.
pub fn spread_seed(index: u64) -> i64 {
    index.wrapping_mul(0x9E3779B97F4A7C15) as i64
}
