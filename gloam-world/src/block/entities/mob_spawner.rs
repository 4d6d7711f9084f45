use gloam_util::math::position::BlockPos;

use crate::entity::EntityType;

#[derive(Clone, Debug, PartialEq)]
pub struct MobSpawnerBlockEntity {
    pub position: BlockPos,
    pub delay: i32,
    pub max_delay: i32,
    pub min_delay: i32,
    pub spawn_count: i32,
    pub spawn_range: i32,
    pub entity_type: Option<EntityType>,
}

impl MobSpawnerBlockEntity {
    pub const DEFAULT_DELAY: i32 = 20;
    pub const DEFAULT_MAX_SPAWN_DELAY: i32 = 800;
    pub const DEFAULT_MIN_SPAWN_DELAY: i32 = 200;
    pub const DEFAULT_SPAWN_COUNT: i32 = 4;
    pub const DEFAULT_SPAWN_RANGE: i32 = 4;

    pub fn new(position: BlockPos) -> Self {
        Self {
            position,
            delay: Self::DEFAULT_DELAY,
            max_delay: Self::DEFAULT_MAX_SPAWN_DELAY,
            min_delay: Self::DEFAULT_MIN_SPAWN_DELAY,
            spawn_count: Self::DEFAULT_SPAWN_COUNT,
            spawn_range: Self::DEFAULT_SPAWN_RANGE,
            entity_type: None,
        }
    }

    pub fn set_entity_type(&mut self, entity_type: EntityType) {
        self.entity_type = Some(entity_type);
    }
}
