use gloam_config::SpookyForestConfig;
use gloam_util::{
    math::{position::BlockPos, vector2::Vector2},
    random::{RandomGenerator, RandomImpl},
};

use super::{DecoratorCounts, SpawnEntry, SpawnGroup};
use crate::{
    block::{Block, BlockState},
    entity::EntityType,
    generation::{
        feature::{
            Feature,
            features::{
                graveyard::GraveyardFeature, lamppost::LamppostFeature,
                plant_patch::PlantPatchFeature, pumpkin_patch::PumpkinPatchFeature,
                webs::WebsFeature,
            },
        },
        positions::chunk_pos,
    },
    world::GenerationWorld,
};

const CREATURES: [SpawnEntry; 1] = [SpawnEntry::new(EntityType::Bat, 20, 8, 8)];

const MONSTERS: [SpawnEntry; 3] = [
    SpawnEntry::new(EntityType::Spider, 50, 1, 4),
    SpawnEntry::new(EntityType::Skeleton, 20, 1, 4),
    SpawnEntry::new(EntityType::SkeletonDruid, 5, 1, 1),
];

/// What one `decorate` call produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecorationReport {
    pub mushglooms: bool,
    pub webs: u32,
    pub lamppost: bool,
    pub pumpkins: bool,
    pub dead_bushes: u32,
    pub graveyard: bool,
}

/// A dim forest of webs, lampposts, pumpkins and the odd graveyard.
pub struct SpookyForest {
    config: SpookyForestConfig,
    mushglooms: PlantPatchFeature,
    webs: WebsFeature,
    lampposts: LamppostFeature,
    pumpkins: PumpkinPatchFeature,
    dead_bushes: PlantPatchFeature,
    graveyard: GraveyardFeature,
}

impl SpookyForest {
    pub const DECORATOR_COUNTS: DecoratorCounts = DecoratorCounts {
        flowers_per_chunk: 1,
        grass_per_chunk: 4,
        trees_per_chunk: 2,
    };

    pub fn new(config: SpookyForestConfig, graveyard: GraveyardFeature) -> Self {
        Self {
            mushglooms: PlantPatchFeature::new(
                BlockState::new(Block::MUSHGLOOM),
                config.mushgloom_spread,
            ),
            webs: WebsFeature {
                min_y: config.sea_level,
            },
            lampposts: LamppostFeature::new(Block::JACK_O_LANTERN.default_state()),
            pumpkins: PumpkinPatchFeature::default(),
            dead_bushes: PlantPatchFeature::new(
                BlockState::new(Block::DEAD_BUSH),
                config.dead_bush_spread,
            ),
            graveyard,
            config,
        }
    }

    pub fn config(&self) -> &SpookyForestConfig {
        &self.config
    }

    pub fn spawn_entries(group: SpawnGroup) -> &'static [SpawnEntry] {
        match group {
            SpawnGroup::Creature => &CREATURES,
            SpawnGroup::Monster => &MONSTERS,
        }
    }

    /// Height just above the first grass block found scanning up from sea
    /// level, else above the highest dirt, stone or gravel, else sea level.
    pub fn ground_level<W: GenerationWorld + ?Sized>(&self, world: &W, x: i32, z: i32) -> i32 {
        let mut last_dirt = self.config.sea_level;
        for y in self.config.sea_level..self.config.chunk_height - 1 {
            let state = world.get_block_state(&BlockPos::new(x, y, z));
            if state.is_of(&Block::GRASS_BLOCK) {
                return y + 1;
            }
            if state.is_of(&Block::DIRT) || state.is_of(&Block::STONE) || state.is_of(&Block::GRAVEL) {
                last_dirt = y + 1;
            }
        }
        last_dirt
    }

    /// A random column of the area decorated for a chunk, which sits half a
    /// chunk off the chunk itself.
    fn random_column(random: &mut RandomGenerator, corner: BlockPos) -> (i32, i32) {
        let x = corner.0.x + random.next_bounded_i32(16) + 8;
        let z = corner.0.z + random.next_bounded_i32(16) + 8;
        (x, z)
    }

    pub fn decorate<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        chunk: Vector2<i32>,
    ) -> DecorationReport {
        let corner = BlockPos::new(
            chunk_pos::start_block_x(chunk.x),
            0,
            chunk_pos::start_block_z(chunk.y),
        );
        let config = &self.config;
        let mut report = DecorationReport::default();

        if random.next_bounded_i32(config.mushgloom_chance) == 0 {
            let (x, z) = Self::random_column(random, corner);
            let y = self.ground_level(world, x, z);
            report.mushglooms = self.mushglooms.generate(world, random, BlockPos::new(x, y, z));
        }

        for _ in 0..config.web_attempts {
            let (x, z) = Self::random_column(random, corner);
            let y = config.sea_level + random.next_bounded_i32(config.chunk_height - config.sea_level);
            if self.webs.generate(world, random, BlockPos::new(x, y, z)) {
                report.webs += 1;
            }
        }

        if random.next_bounded_i32(config.lamppost_chance) == 0 {
            let (x, z) = Self::random_column(random, corner);
            let y = self.ground_level(world, x, z);
            report.lamppost = self.lampposts.generate(world, random, BlockPos::new(x, y, z));
        }

        if random.next_bounded_i32(config.pumpkin_chance) == 0 {
            let (x, z) = Self::random_column(random, corner);
            let y = self.ground_level(world, x, z);
            report.pumpkins = self.pumpkins.generate(world, random, BlockPos::new(x, y, z));
        }

        for _ in 0..config.dead_bush_attempts {
            let (x, z) = Self::random_column(random, corner);
            let y = world.surface_height(x, z);
            if self.dead_bushes.generate(world, random, BlockPos::new(x, y, z)) {
                report.dead_bushes += 1;
            }
        }

        if random.next_f32() < config.graveyard_chance {
            let (x, z) = Self::random_column(random, corner);
            let y = world.surface_height(x, z);
            report.graveyard = self.graveyard.generate(world, random, BlockPos::new(x, y, z));
        }

        log::trace!("Decorated chunk {}, {}: {report:?}", chunk.x, chunk.y);
        report
    }
}
