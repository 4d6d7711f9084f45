use gloam_util::{
    math::position::BlockPos,
    random::{RandomGenerator, RandomImpl},
};

use crate::{
    block::{BlockState, material::Material},
    generation::feature::Feature,
    world::{BlockFlags, GenerationWorld},
};

/// Scatters a plant on soil around the first solid block below the start.
pub struct PlantPatchFeature {
    pub plant: BlockState,
    pub tries: u32,
}

impl PlantPatchFeature {
    pub fn new(plant: BlockState, tries: u32) -> Self {
        Self { plant, tries }
    }

    fn can_stay<W: GenerationWorld>(world: &W, pos: &BlockPos) -> bool {
        matches!(
            world.get_block_state(&pos.down()).material(),
            Material::Ground | Material::Grass
        )
    }
}

/// A random offset of up to 7 blocks sideways and 3 up or down.
pub(crate) fn scatter_offset(random: &mut RandomGenerator, pos: BlockPos) -> BlockPos {
    let x = random.next_bounded_i32(8) - random.next_bounded_i32(8);
    let y = random.next_bounded_i32(4) - random.next_bounded_i32(4);
    let z = random.next_bounded_i32(8) - random.next_bounded_i32(8);
    pos.add(x, y, z)
}

impl Feature for PlantPatchFeature {
    fn generate<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        pos: BlockPos,
    ) -> bool {
        let mut pos = pos;
        while pos.0.y > world.bottom_y() {
            let material = world.get_block_state(&pos).material();
            if material != Material::Air && material != Material::Leaves {
                break;
            }
            pos = pos.down();
        }

        let mut placed = 0;
        for _ in 0..self.tries {
            let target = scatter_offset(random, pos);
            if world.is_air(&target)
                && Self::can_stay(world, &target)
                && world.set_block_state(&target, self.plant, BlockFlags::NOTIFY_LISTENERS)
            {
                placed += 1;
            }
        }
        placed > 0
    }
}

#[cfg(test)]
mod test {
    use gloam_util::{
        math::{position::BlockPos, vector3::Vector3},
        random::{RandomGenerator, RandomImpl},
    };

    use super::PlantPatchFeature;
    use crate::{
        ProtoRegion,
        block::{Block, BlockState},
        generation::feature::Feature,
        world::GenerationWorld,
    };

    #[test]
    fn plants_only_on_soil() {
        let mut region = ProtoRegion::new(0, BlockPos::new(-8, 0, -8), Vector3::new(16, 16, 16));
        region.fill(
            BlockPos::new(-8, 0, -8),
            BlockPos::new(7, 4, -1),
            BlockState::new(Block::GRASS_BLOCK),
        );
        region.fill(
            BlockPos::new(-8, 0, 0),
            BlockPos::new(7, 4, 7),
            BlockState::new(Block::SAND),
        );
        let patch = PlantPatchFeature::new(BlockState::new(Block::DEAD_BUSH), 64);
        let mut random = RandomGenerator::from_seed(9);
        assert!(patch.generate(&mut region, &mut random, BlockPos::new(0, 12, -1)));

        let mut bushes = 0;
        for x in -8..8 {
            for z in -8..8 {
                for y in 0..16 {
                    let pos = BlockPos::new(x, y, z);
                    if region.get_block_state(&pos).is_of(&Block::DEAD_BUSH) {
                        bushes += 1;
                        assert_eq!(y, 5);
                        assert!(region.get_block_state(&pos.down()).is_of(&Block::GRASS_BLOCK));
                    }
                }
            }
        }
        assert!(bushes > 0);
    }
}
