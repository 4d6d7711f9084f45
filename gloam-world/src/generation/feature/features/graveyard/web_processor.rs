use gloam_util::{
    math::position::BlockPos,
    random::{RandomGenerator, RandomImpl},
};

use crate::{
    block::{Block, BlockState},
    generation::structure::processor::BlockProcessor,
};

/// Leaves grass alone and turns one in `chance` of all other blocks into
/// cobweb.
pub struct WebProcessor<'a> {
    random: &'a mut RandomGenerator,
    chance: i32,
}

impl<'a> WebProcessor<'a> {
    pub fn new(random: &'a mut RandomGenerator, chance: i32) -> Self {
        Self { random, chance }
    }
}

impl BlockProcessor for WebProcessor<'_> {
    fn process_block(&mut self, _pos: &BlockPos, state: BlockState) -> Option<BlockState> {
        if state.is_of(&Block::GRASS_BLOCK) {
            return Some(state);
        }
        if self.random.next_bounded_i32(self.chance) == 0 {
            Some(Block::COBWEB.default_state())
        } else {
            Some(state)
        }
    }
}
