use gloam_util::{math::position::BlockPos, random::RandomGenerator};

use crate::{
    block::{Block, material::Material},
    generation::feature::Feature,
    world::{BlockFlags, GenerationWorld},
};

/// Hangs a cobweb under the first leaves found below the start position.
pub struct WebsFeature {
    /// The search never goes below this height.
    pub min_y: i32,
}

impl Feature for WebsFeature {
    fn generate<W: GenerationWorld>(
        &self,
        world: &mut W,
        _random: &mut RandomGenerator,
        pos: BlockPos,
    ) -> bool {
        let mut pos = pos;
        while pos.0.y > self.min_y && world.is_air(&pos) {
            pos = pos.down();
        }
        if world.get_block_state(&pos).material() != Material::Leaves {
            return false;
        }
        let below = pos.down();
        world.is_air(&below)
            && world.set_block_state(
                &below,
                Block::COBWEB.default_state(),
                BlockFlags::NOTIFY_LISTENERS,
            )
    }
}
