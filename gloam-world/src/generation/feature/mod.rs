use gloam_util::{math::position::BlockPos, random::RandomGenerator};

use crate::world::GenerationWorld;

pub mod features;

/// A decoration step the biome decorator can run at a position.
pub trait Feature {
    /// Returns whether anything was generated.
    fn generate<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        pos: BlockPos,
    ) -> bool;
}
