use std::collections::HashMap;

use gloam_util::math::{block_box::BlockBox, position::BlockPos, vector3::Vector3};

use crate::{
    block::{BlockState, entities::BlockEntity},
    entity::{EntityType, SpawnedEntity},
    world::{BlockFlags, GenerationWorld},
};

/// A bounded, fully in-memory piece of world.
///
/// Reads outside the bounds see air and writes outside the bounds are
/// dropped. Every accepted block write and entity spawn bumps a mutation
/// counter.
pub struct ProtoRegion {
    seed: i64,
    bounds: BlockBox,
    blocks: Vec<BlockState>,
    block_entities: HashMap<BlockPos, BlockEntity>,
    entities: Vec<SpawnedEntity>,
    mutations: usize,
    neighbor_updates: usize,
}

impl ProtoRegion {
    pub fn new(seed: i64, min: BlockPos, size: Vector3<i32>) -> Self {
        let bounds = BlockBox::from_size(min, size);
        let volume = (size.x.max(0) * size.y.max(0) * size.z.max(0)) as usize;
        Self {
            seed,
            bounds,
            blocks: vec![BlockState::AIR; volume],
            block_entities: HashMap::new(),
            entities: Vec::new(),
            mutations: 0,
            neighbor_updates: 0,
        }
    }

    fn index(&self, pos: &BlockPos) -> Option<usize> {
        if !self.bounds.contains(pos) {
            return None;
        }
        let local = pos.0 - self.bounds.min;
        let width = self.bounds.block_count_x() as usize;
        let depth = self.bounds.block_count_z() as usize;
        Some((local.y as usize * depth + local.z as usize) * width + local.x as usize)
    }

    pub fn bounds(&self) -> BlockBox {
        self.bounds
    }

    /// Sets every block of the inclusive box spanned by `from` and `to`.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, state: BlockState) {
        let area = BlockBox::new(from.0.x, from.0.y, from.0.z, to.0.x, to.0.y, to.0.z);
        for y in area.min.y..=area.max.y {
            for z in area.min.z..=area.max.z {
                for x in area.min.x..=area.max.x {
                    self.set_block_state(&BlockPos::new(x, y, z), state, BlockFlags::FORCE_STATE);
                }
            }
        }
    }

    pub fn block_entity(&self, pos: &BlockPos) -> Option<&BlockEntity> {
        self.block_entities.get(pos)
    }

    pub fn entities(&self) -> &[SpawnedEntity] {
        &self.entities
    }

    pub fn mutations(&self) -> usize {
        self.mutations
    }

    pub fn neighbor_updates(&self) -> usize {
        self.neighbor_updates
    }

    /// Number of blocks in the region holding `state`.
    pub fn count(&self, state: &BlockState) -> usize {
        self.blocks.iter().filter(|block| *block == state).count()
    }
}

impl GenerationWorld for ProtoRegion {
    fn seed(&self) -> i64 {
        self.seed
    }

    fn bottom_y(&self) -> i32 {
        self.bounds.min.y
    }

    fn top_y(&self) -> i32 {
        self.bounds.max.y
    }

    fn surface_height(&self, x: i32, z: i32) -> i32 {
        (self.bottom_y()..=self.top_y())
            .rev()
            .find(|y| !self.is_air(&BlockPos::new(x, *y, z)))
            .map_or(self.bottom_y(), |y| y + 1)
    }

    fn get_block_state(&self, pos: &BlockPos) -> BlockState {
        self.index(pos)
            .map_or(BlockState::AIR, |index| self.blocks[index])
    }

    fn set_block_state(&mut self, pos: &BlockPos, state: BlockState, flags: BlockFlags) -> bool {
        let Some(index) = self.index(pos) else {
            return false;
        };
        let previous = self.blocks[index];
        if previous == state {
            return false;
        }
        self.blocks[index] = state;

        let keep_entity =
            flags.contains(BlockFlags::MERGE_BLOCK_ENTITY) && previous.block == state.block;
        if !keep_entity {
            self.block_entities.remove(pos);
            if let Some(entity) = BlockEntity::for_block(&state.block, *pos) {
                self.block_entities.insert(*pos, entity);
            }
        }

        self.mutations += 1;
        if flags.contains(BlockFlags::NOTIFY_NEIGHBORS) {
            self.neighbor_updates += 1;
        }
        true
    }

    fn block_entity_mut(&mut self, pos: &BlockPos) -> Option<&mut BlockEntity> {
        self.block_entities.get_mut(pos)
    }

    fn spawn_entity(&mut self, entity_type: EntityType, position: Vector3<f64>) {
        log::trace!("Spawning {entity_type} at {position}");
        self.entities.push(SpawnedEntity {
            entity_type,
            position,
        });
        self.mutations += 1;
    }
}

#[cfg(test)]
mod test {
    use gloam_util::math::{position::BlockPos, vector3::Vector3};

    use super::ProtoRegion;
    use crate::{
        block::{Block, BlockState, entities::BlockEntity},
        entity::EntityType,
        world::{BlockFlags, GenerationWorld},
    };

    fn region() -> ProtoRegion {
        ProtoRegion::new(7, BlockPos::new(-4, 0, -4), Vector3::new(8, 16, 8))
    }

    #[test]
    fn outside_reads_air_and_drops_writes() {
        let mut region = region();
        let outside = BlockPos::new(4, 0, 0);
        assert!(region.is_air(&outside));
        assert!(!region.set_block_state(&outside, BlockState::new(Block::STONE), BlockFlags::NOTIFY_ALL));
        assert_eq!(region.mutations(), 0);
    }

    #[test]
    fn surface_height_is_above_top_block() {
        let mut region = region();
        assert_eq!(region.surface_height(0, 0), 0);
        region.fill(BlockPos::new(-4, 0, -4), BlockPos::new(3, 5, 3), BlockState::new(Block::STONE));
        region.set_block_state(&BlockPos::new(1, 9, 1), BlockState::new(Block::OAK_LEAVES), BlockFlags::NOTIFY_ALL);
        assert_eq!(region.surface_height(0, 0), 6);
        assert_eq!(region.surface_height(1, 1), 10);
    }

    #[test]
    fn unchanged_state_is_not_a_write() {
        let mut region = region();
        let pos = BlockPos::new(0, 1, 0);
        assert!(region.set_block_state(&pos, BlockState::new(Block::DIRT), BlockFlags::NOTIFY_NEIGHBORS));
        assert!(!region.set_block_state(&pos, BlockState::new(Block::DIRT), BlockFlags::NOTIFY_NEIGHBORS));
        assert_eq!(region.mutations(), 1);
        assert_eq!(region.neighbor_updates(), 1);
    }

    #[test]
    fn block_entities_follow_their_block() {
        let mut region = region();
        let pos = BlockPos::new(0, 1, 0);
        let entity = region.set_block_with_entity(&pos, BlockState::new(Block::SPAWNER), BlockFlags::NOTIFY_ALL);
        assert!(matches!(entity, Some(BlockEntity::MobSpawner(_))));
        assert!(matches!(
            region.block_entity(&pos),
            Some(BlockEntity::MobSpawner(spawner)) if spawner.position == pos
        ));

        region.set_block_state(&pos, BlockState::AIR, BlockFlags::NOTIFY_ALL);
        assert!(region.block_entity(&pos).is_none());
    }

    #[test]
    fn merge_keeps_entity_of_same_block() {
        let mut region = region();
        let pos = BlockPos::new(0, 1, 0);
        let chest = Block::TRAPPED_CHEST.default_state();
        if let Some(BlockEntity::Chest(entity)) = region.set_block_with_entity(&pos, chest, BlockFlags::NOTIFY_ALL) {
            entity.set_loot_table("graveyard", 3);
        }
        let turned = chest.with_facing(gloam_util::HorizontalFacing::East);
        region.set_block_state(&pos, turned, BlockFlags::MERGE_BLOCK_ENTITY);
        match region.block_entity(&pos) {
            Some(BlockEntity::Chest(entity)) => assert_eq!(entity.loot_seed, 3),
            other => panic!("expected chest, got {other:?}"),
        }
        region.set_block_state(&pos, chest, BlockFlags::NOTIFY_ALL);
        match region.block_entity(&pos) {
            Some(BlockEntity::Chest(entity)) => assert_eq!(entity.loot_table, None),
            other => panic!("expected chest, got {other:?}"),
        }
    }

    #[test]
    fn spawns_count_as_mutations() {
        let mut region = region();
        region.spawn_entity(EntityType::Wraith, Vector3::new(0.5, 1.0, 0.5));
        assert_eq!(region.entities().len(), 1);
        assert_eq!(region.mutations(), 1);
    }
}
