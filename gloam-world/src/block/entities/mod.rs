use chest::ChestBlockEntity;
use gloam_util::math::position::BlockPos;
use mob_spawner::MobSpawnerBlockEntity;

use super::Block;

pub mod chest;
pub mod mob_spawner;

#[derive(Clone, Debug, PartialEq)]
pub enum BlockEntity {
    Chest(ChestBlockEntity),
    MobSpawner(MobSpawnerBlockEntity),
}

impl BlockEntity {
    /// The entity a freshly placed `block` starts with, if it has one.
    pub fn for_block(block: &Block, position: BlockPos) -> Option<Self> {
        if *block == Block::TRAPPED_CHEST {
            Some(Self::Chest(ChestBlockEntity::new(position)))
        } else if *block == Block::SPAWNER {
            Some(Self::MobSpawner(MobSpawnerBlockEntity::new(position)))
        } else {
            None
        }
    }
}
