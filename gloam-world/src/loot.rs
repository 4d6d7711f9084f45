use gloam_util::math::position::BlockPos;

use crate::{block::entities::BlockEntity, world::GenerationWorld};

/// Fills containers from named loot tables.
pub trait LootResolver {
    fn populate_container(
        &self,
        world: &mut dyn GenerationWorld,
        pos: BlockPos,
        table: &str,
        seed: i64,
    ) -> bool;
}

/// Stores the table and seed on the chest; items are rolled when a player
/// first opens it.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeferredLoot;

impl LootResolver for DeferredLoot {
    fn populate_container(
        &self,
        world: &mut dyn GenerationWorld,
        pos: BlockPos,
        table: &str,
        seed: i64,
    ) -> bool {
        match world.block_entity_mut(&pos) {
            Some(BlockEntity::Chest(chest)) => {
                chest.set_loot_table(table, seed);
                true
            }
            _ => {
                log::warn!("No container at {pos} for loot table {table}");
                false
            }
        }
    }
}
