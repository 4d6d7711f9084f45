//! A stand-in forest floor to decorate: stone, a grass layer and scattered
//! oak trees whose canopies hold the hanging webs.

use gloam_util::{
    math::{position::BlockPos, vector3::Vector3},
    random::{RandomGenerator, RandomImpl},
};
use gloam_world::{
    GenerationWorld, ProtoRegion,
    block::{Block, BlockState},
    world::BlockFlags,
};

pub const GROUND_Y: i32 = 63;
const HEIGHT: i32 = 128;
const TREE_CHANCE: i32 = 40;

/// Terrain covering `chunks` by `chunks` chunks plus the half chunk that
/// decoration spills into.
pub fn forest_floor(seed: i64, chunks: i32) -> ProtoRegion {
    let width = chunks * 16 + 32;
    let mut region = ProtoRegion::new(seed, BlockPos::new(0, 0, 0), Vector3::new(width, HEIGHT, width));
    region.fill(
        BlockPos::new(0, 0, 0),
        BlockPos::new(width - 1, 0, width - 1),
        BlockState::new(Block::BEDROCK),
    );
    region.fill(
        BlockPos::new(0, 1, 0),
        BlockPos::new(width - 1, GROUND_Y - 4, width - 1),
        BlockState::new(Block::STONE),
    );
    region.fill(
        BlockPos::new(0, GROUND_Y - 3, 0),
        BlockPos::new(width - 1, GROUND_Y - 1, width - 1),
        BlockState::new(Block::DIRT),
    );
    region.fill(
        BlockPos::new(0, GROUND_Y, 0),
        BlockPos::new(width - 1, GROUND_Y, width - 1),
        BlockState::new(Block::GRASS_BLOCK),
    );

    let mut random = RandomGenerator::from_seed(seed as u64);
    for x in (2..width - 2).step_by(3) {
        for z in (2..width - 2).step_by(3) {
            if random.next_bounded_i32(TREE_CHANCE) == 0 {
                let height = 4 + random.next_bounded_i32(3);
                grow_tree(&mut region, BlockPos::new(x, GROUND_Y + 1, z), height);
            }
        }
    }
    region
}

fn grow_tree(region: &mut ProtoRegion, base: BlockPos, height: i32) {
    let top = base.up_height(height);
    region.fill(
        top.add(-2, -1, -2),
        top.add(2, 0, 2),
        BlockState::new(Block::OAK_LEAVES),
    );
    for dy in 0..height {
        region.set_block_state(
            &base.up_height(dy),
            BlockState::new(Block::OAK_LOG),
            BlockFlags::FORCE_STATE,
        );
    }
}
