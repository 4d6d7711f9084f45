use gloam_util::math::position::BlockPos;

/// A chest whose contents are rolled from a loot table the first time it is
/// opened.
#[derive(Clone, Debug, PartialEq)]
pub struct ChestBlockEntity {
    pub position: BlockPos,
    pub loot_table: Option<String>,
    pub loot_seed: i64,
}

impl ChestBlockEntity {
    pub fn new(position: BlockPos) -> Self {
        Self {
            position,
            loot_table: None,
            loot_seed: 0,
        }
    }

    pub fn set_loot_table(&mut self, table: &str, seed: i64) {
        self.loot_table = Some(table.to_string());
        self.loot_seed = seed;
    }
}
