use gloam_util::math::position::BlockPos;

use crate::block::BlockState;

/// Rewrites template blocks while a template is stamped.
pub trait BlockProcessor {
    /// The state to place at the world position `pos` in place of the
    /// template's `state`, or `None` to skip the block.
    fn process_block(&mut self, pos: &BlockPos, state: BlockState) -> Option<BlockState>;
}
