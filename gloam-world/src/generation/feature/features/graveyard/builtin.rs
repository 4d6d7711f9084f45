//! The stock graveyard templates.
//!
//! Base layers: 0 is buried soil, 1 is the grass the yard stands on, 2 and
//! up hold the fence. Graves are three blocks long along x and reach from
//! the soil layer to one block above the floor.

use gloam_config::graveyard::GraveyardTemplates as TemplateNames;
use gloam_util::math::{position::BlockPos, vector3::Vector3};

use super::embellish::SPAWNER_TAG;
use crate::{
    block::{Block, BlockState},
    generation::structure::{manager::TemplateManager, template::Template},
};

const BASE_SIZE: Vector3<i32> = Vector3::new(17, 4, 13);
const GRAVE_SIZE: Vector3<i32> = Vector3::new(3, 4, 1);

fn base() -> Template {
    let max_x = BASE_SIZE.x - 1;
    let max_z = BASE_SIZE.z - 1;
    let mut base = Template::new(BASE_SIZE)
        .with_fill(BlockPos::new(0, 0, 0), BlockPos::new(max_x, 0, max_z), BlockState::new(Block::DIRT))
        .with_fill(
            BlockPos::new(0, 1, 0),
            BlockPos::new(max_x, 1, max_z),
            BlockState::new(Block::GRASS_BLOCK),
        )
        .with_fill(BlockPos::new(0, 2, 0), BlockPos::new(max_x, 3, max_z), BlockState::AIR);

    for x in 0..=max_x {
        for z in [0, max_z] {
            base = base.with_block(BlockPos::new(x, 2, z), BlockState::new(Block::OAK_FENCE));
        }
    }
    for z in 0..=max_z {
        for x in [0, max_x] {
            base = base.with_block(BlockPos::new(x, 2, z), BlockState::new(Block::OAK_FENCE));
        }
    }
    for (x, z) in [(0, 0), (max_x, 0), (0, max_z), (max_x, max_z)] {
        base = base
            .with_block(BlockPos::new(x, 2, z), BlockState::new(Block::MOSSY_COBBLESTONE))
            .with_block(BlockPos::new(x, 3, z), BlockState::new(Block::COBBLESTONE));
    }
    // gate
    base.with_block(BlockPos::new(max_x / 2, 2, 0), BlockState::AIR)
}

fn headstone(grave: Template) -> Template {
    grave
        .with_block(BlockPos::new(2, 2, 0), BlockState::new(Block::MOSSY_COBBLESTONE))
        .with_block(BlockPos::new(2, 3, 0), BlockState::new(Block::STONE_BRICKS))
}

fn grave_full() -> Template {
    let grave = Template::new(GRAVE_SIZE)
        .with_fill(BlockPos::new(0, 0, 0), BlockPos::new(2, 0, 0), BlockState::new(Block::DIRT))
        .with_fill(BlockPos::new(0, 1, 0), BlockPos::new(1, 1, 0), BlockState::new(Block::DIRT))
        .with_block(BlockPos::new(2, 1, 0), BlockState::new(Block::STONE_BRICKS))
        .with_marker(BlockPos::new(1, 0, 0), SPAWNER_TAG);
    headstone(grave)
}

fn grave_upper() -> Template {
    let grave = Template::new(GRAVE_SIZE)
        .with_fill(BlockPos::new(0, 1, 0), BlockPos::new(1, 1, 0), BlockState::new(Block::GRAVEL))
        .with_block(BlockPos::new(2, 1, 0), BlockState::new(Block::STONE_BRICKS))
        .with_block(BlockPos::new(0, 2, 0), BlockState::new(Block::DEAD_BUSH));
    headstone(grave)
}

fn grave_lower() -> Template {
    Template::new(GRAVE_SIZE)
        .with_fill(BlockPos::new(0, 0, 0), BlockPos::new(2, 0, 0), BlockState::new(Block::GRAVEL))
        .with_fill(BlockPos::new(0, 1, 0), BlockPos::new(2, 1, 0), BlockState::AIR)
        .with_block(BlockPos::new(2, 2, 0), BlockState::new(Block::COBBLESTONE))
        .with_marker(BlockPos::new(1, 0, 0), SPAWNER_TAG)
}

fn trap() -> Template {
    Template::new(Vector3::new(1, 2, 1))
        .with_block(BlockPos::new(0, 0, 0), BlockState::new(Block::LAVA))
        .with_block(BlockPos::new(0, 1, 0), BlockState::new(Block::COBWEB))
}

/// Registers the stock templates under the configured names.
pub fn register(manager: &mut TemplateManager, names: &TemplateNames) {
    manager.register(names.base.clone(), base());
    manager.register(names.trap.clone(), trap());
    manager.register(names.grave_full.clone(), grave_full());
    manager.register(names.grave_upper.clone(), grave_upper());
    manager.register(names.grave_lower.clone(), grave_lower());
}
