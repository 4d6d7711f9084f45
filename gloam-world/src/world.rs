use bitflags::bitflags;
use gloam_util::math::{position::BlockPos, vector3::Vector3};

use crate::{
    block::{BlockState, entities::BlockEntity},
    entity::EntityType,
};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BlockFlags: u32 {
        const NOTIFY_NEIGHBORS = 0b0000_0001;
        const NOTIFY_LISTENERS = 0b0000_0010;
        const NOTIFY_ALL       = 0b0000_0011;
        const FORCE_STATE      = 0b0000_0100;
        /// Keep the block entity of a block replaced by the same block.
        const MERGE_BLOCK_ENTITY = 0b0001_0000;
    }
}

/// Block and entity access used while decorating a chunk.
pub trait GenerationWorld {
    fn seed(&self) -> i64;

    /// Lowest buildable y, inclusive.
    fn bottom_y(&self) -> i32;

    /// Highest buildable y, inclusive.
    fn top_y(&self) -> i32;

    /// The y just above the highest non-air block of the column.
    fn surface_height(&self, x: i32, z: i32) -> i32;

    fn get_block_state(&self, pos: &BlockPos) -> BlockState;

    fn is_air(&self, pos: &BlockPos) -> bool {
        self.get_block_state(pos).is_air()
    }

    /// Returns `false` when nothing changed, either because the position is
    /// outside the world or the state is already there.
    fn set_block_state(&mut self, pos: &BlockPos, state: BlockState, flags: BlockFlags) -> bool;

    fn block_entity_mut(&mut self, pos: &BlockPos) -> Option<&mut BlockEntity>;

    fn set_block_with_entity(
        &mut self,
        pos: &BlockPos,
        state: BlockState,
        flags: BlockFlags,
    ) -> Option<&mut BlockEntity> {
        if self.set_block_state(pos, state, flags) {
            self.block_entity_mut(pos)
        } else {
            None
        }
    }

    fn spawn_entity(&mut self, entity_type: EntityType, position: Vector3<f64>);
}
