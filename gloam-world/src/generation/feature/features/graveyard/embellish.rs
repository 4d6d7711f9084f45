use gloam_config::GraveyardConfig;
use gloam_util::{
    HorizontalFacing,
    math::{
        orientation::{BlockMirror, Orientation},
        position::BlockPos,
        vector3::Vector3,
    },
    random::{RandomGenerator, RandomImpl},
};

use super::GraveKind;
use crate::{
    block::{Block, BlockState, entities::BlockEntity},
    entity::EntityType,
    generation::structure::template::{PlacementSettings, Template},
    loot::LootResolver,
    world::{BlockFlags, GenerationWorld},
};

pub const SPAWNER_TAG: &str = "spawner";

/// What happened to a single grave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Embellishment {
    pub eventful: bool,
    pub trapped: bool,
    /// Where a loot chest was placed and filled.
    pub chest: Option<BlockPos>,
    pub spawners: usize,
    pub cleared: usize,
}

/// Shared state for embellishing every grave of one graveyard.
pub struct EmbellishContext<'a> {
    pub config: &'a GraveyardConfig,
    pub trap: &'a Template,
    pub loot: &'a dyn LootResolver,
    pub settings: &'a PlacementSettings,
    /// Chest position relative to a grave origin.
    pub chest_slot: Vector3<i32>,
    pub flags: BlockFlags,
}

/// Draws the chest slot used by every grave of a graveyard.
pub fn chest_slot(random: &mut RandomGenerator, orientation: &Orientation) -> Vector3<i32> {
    let front_back = i32::from(orientation.mirror == BlockMirror::FrontBack);
    let slot = Vector3::new(random.next_bounded_i32(2) - front_back, 1, 0);
    orientation.rotation.rotate(slot)
}

/// Facing of the loot chest. Unlike positions, the chest is turned first
/// and mirrored second.
pub fn chest_facing(orientation: &Orientation) -> HorizontalFacing {
    orientation
        .mirror
        .mirror_facing(orientation.rotation.rotate_facing(HorizontalFacing::West))
}

/// Diagonal step from a grave origin to its trap.
pub fn trap_offset(orientation: &Orientation) -> Vector3<i32> {
    let x = if orientation.mirror == BlockMirror::FrontBack { 1 } else { -1 };
    let z = if orientation.mirror == BlockMirror::LeftRight { 1 } else { -1 };
    orientation.rotation.rotate(Vector3::new(x, 0, z))
}

impl EmbellishContext<'_> {
    /// Rolls traps, loot and a wraith for full graves, then resolves the
    /// spawner markers of any grave. Every draw comes from `random`.
    pub fn embellish<W: GenerationWorld>(
        &self,
        world: &mut W,
        random: &mut RandomGenerator,
        grave: &Template,
        kind: GraveKind,
        origin: BlockPos,
    ) -> Embellishment {
        let mut result = Embellishment::default();
        let orientation = &self.settings.orientation;

        if kind == GraveKind::Full && random.next_bounded_i32(self.config.eventful_chance) == 0 {
            result.eventful = true;

            if random.next_bounded_i32(self.config.trap_chance) == 0 {
                let trap_origin = origin.offset(trap_offset(orientation));
                self.trap
                    .place(world, trap_origin, self.settings, None, self.flags);
                result.trapped = true;
            }

            let chest_pos = origin.offset(self.chest_slot);
            let chest =
                BlockState::new(Block::TRAPPED_CHEST).with_facing(chest_facing(orientation));
            if world.set_block_state(&chest_pos, chest, self.flags) {
                let seed = random.next_i64();
                if self
                    .loot
                    .populate_container(world, chest_pos, &self.config.loot_table, seed)
                {
                    result.chest = Some(chest_pos);
                }
            }

            world.spawn_entity(EntityType::Wraith, origin.0.to_centered_f64());
        }

        for (pos, tag) in grave.data_markers(origin, self.settings) {
            if tag != SPAWNER_TAG {
                continue;
            }
            if random.next_bounded_i32(self.config.spawner_chance) == 0 {
                if let Some(BlockEntity::MobSpawner(spawner)) =
                    world.set_block_with_entity(&pos, Block::SPAWNER.default_state(), self.flags)
                {
                    spawner.set_entity_type(EntityType::ZombieVillager);
                }
                result.spawners += 1;
            } else {
                world.set_block_state(&pos, BlockState::AIR, self.flags);
                result.cleared += 1;
            }
        }

        result
    }
}
