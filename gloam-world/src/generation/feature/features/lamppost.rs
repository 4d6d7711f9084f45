use gloam_util::{
    HorizontalFacing,
    math::position::BlockPos,
    random::{RandomGenerator, RandomImpl},
};

use crate::{
    block::{Block, BlockState},
    generation::feature::Feature,
    world::{BlockFlags, GenerationWorld},
};

/// A fence post topped with a lamp, standing on grass or dirt.
pub struct LamppostFeature {
    pub lamp: BlockState,
    pub post: BlockState,
}

impl LamppostFeature {
    pub const MIN_HEIGHT: i32 = 3;

    pub fn new(lamp: BlockState) -> Self {
        Self {
            lamp,
            post: Block::OAK_FENCE.default_state(),
        }
    }
}

impl Feature for LamppostFeature {
    fn generate<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        pos: BlockPos,
    ) -> bool {
        let ground = world.get_block_state(&pos.down());
        if !(ground.is_of(&Block::GRASS_BLOCK) || ground.is_of(&Block::DIRT)) {
            return false;
        }

        let height = Self::MIN_HEIGHT + random.next_bounded_i32(2);
        if (0..=height).any(|dy| !world.get_block_state(&pos.up_height(dy)).material().is_replaceable()) {
            return false;
        }

        for dy in 0..height {
            world.set_block_state(&pos.up_height(dy), self.post, BlockFlags::NOTIFY_LISTENERS);
        }
        let lamp = self.lamp.with_facing(HorizontalFacing::random(random));
        world.set_block_state(&pos.up_height(height), lamp, BlockFlags::NOTIFY_LISTENERS);
        true
    }
}

#[cfg(test)]
mod test {
    use gloam_util::{
        math::{position::BlockPos, vector3::Vector3},
        random::{RandomGenerator, RandomImpl},
    };

    use super::LamppostFeature;
    use crate::{
        ProtoRegion,
        block::{Block, BlockState},
        generation::feature::Feature,
        world::{BlockFlags, GenerationWorld},
    };

    fn grass_region() -> ProtoRegion {
        let mut region = ProtoRegion::new(0, BlockPos::new(0, 0, 0), Vector3::new(2, 16, 2));
        region.fill(
            BlockPos::new(0, 0, 0),
            BlockPos::new(1, 3, 1),
            BlockState::new(Block::GRASS_BLOCK),
        );
        region
    }

    #[test]
    fn builds_post_and_lamp() {
        let lamppost = LamppostFeature::new(Block::JACK_O_LANTERN.default_state());
        for seed in 0..16 {
            let mut region = grass_region();
            let mut random = RandomGenerator::from_seed(seed);
            assert!(lamppost.generate(&mut region, &mut random, BlockPos::new(0, 4, 0)));
            let posts = region.count(&Block::OAK_FENCE.default_state()) as i32;
            assert!((3..=4).contains(&posts));
            let top = region.get_block_state(&BlockPos::new(0, 4 + posts, 0));
            assert!(top.is_of(&Block::JACK_O_LANTERN));
        }
    }

    #[test]
    fn needs_soil_and_room() {
        let lamppost = LamppostFeature::new(Block::JACK_O_LANTERN.default_state());
        let mut random = RandomGenerator::from_seed(1);
        let mut region = grass_region();
        assert!(!lamppost.generate(&mut region, &mut random, BlockPos::new(0, 8, 0)));

        region.set_block_state(
            &BlockPos::new(1, 6, 1),
            BlockState::new(Block::OAK_LOG),
            BlockFlags::NOTIFY_ALL,
        );
        assert!(!lamppost.generate(&mut region, &mut random, BlockPos::new(1, 4, 1)));
        assert_eq!(region.count(&Block::OAK_FENCE.default_state()), 0);
    }
}
