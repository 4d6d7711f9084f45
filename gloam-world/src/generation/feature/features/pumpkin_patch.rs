use gloam_util::{HorizontalFacing, math::position::BlockPos, random::RandomGenerator};

use super::plant_patch::scatter_offset;
use crate::{
    block::Block,
    generation::feature::Feature,
    world::{BlockFlags, GenerationWorld},
};

/// Pumpkins facing random ways on grass around the start.
pub struct PumpkinPatchFeature {
    pub tries: u32,
}

impl Default for PumpkinPatchFeature {
    fn default() -> Self {
        Self { tries: 64 }
    }
}

impl Feature for PumpkinPatchFeature {
    fn generate<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        pos: BlockPos,
    ) -> bool {
        let mut placed = false;
        for _ in 0..self.tries {
            let target = scatter_offset(random, pos);
            if world.is_air(&target)
                && world
                    .get_block_state(&target.down())
                    .is_of(&Block::GRASS_BLOCK)
            {
                let pumpkin = Block::PUMPKIN
                    .default_state()
                    .with_facing(HorizontalFacing::random(random));
                placed |= world.set_block_state(&target, pumpkin, BlockFlags::NOTIFY_LISTENERS);
            }
        }
        placed
    }
}
