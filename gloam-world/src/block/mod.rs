use std::fmt;

use material::Material;
pub use state::BlockState;

pub mod entities;
pub mod material;
pub mod state;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    pub name: &'static str,
    pub material: Material,
    /// Whether states of this block carry a horizontal facing.
    pub directional: bool,
}

impl Block {
    const fn new(name: &'static str, material: Material) -> Self {
        Self {
            name,
            material,
            directional: false,
        }
    }

    const fn directional(name: &'static str, material: Material) -> Self {
        Self {
            name,
            material,
            directional: true,
        }
    }

    pub const AIR: Block = Block::new("air", Material::Air);
    pub const STONE: Block = Block::new("stone", Material::Rock);
    pub const COBBLESTONE: Block = Block::new("cobblestone", Material::Rock);
    pub const MOSSY_COBBLESTONE: Block = Block::new("mossy_cobblestone", Material::Rock);
    pub const STONE_BRICKS: Block = Block::new("stone_bricks", Material::Rock);
    pub const BEDROCK: Block = Block::new("bedrock", Material::Rock);
    pub const DIRT: Block = Block::new("dirt", Material::Ground);
    pub const GRASS_BLOCK: Block = Block::new("grass_block", Material::Grass);
    pub const SAND: Block = Block::new("sand", Material::Sand);
    pub const GRAVEL: Block = Block::new("gravel", Material::Sand);
    pub const WATER: Block = Block::new("water", Material::Water);
    pub const LAVA: Block = Block::new("lava", Material::Lava);
    pub const OAK_LOG: Block = Block::new("oak_log", Material::Wood);
    pub const OAK_LEAVES: Block = Block::new("oak_leaves", Material::Leaves);
    pub const OAK_FENCE: Block = Block::new("oak_fence", Material::Wood);
    pub const GLASS: Block = Block::new("glass", Material::Glass);
    pub const TALL_GRASS: Block = Block::new("tall_grass", Material::Vine);
    pub const DEAD_BUSH: Block = Block::new("dead_bush", Material::Vine);
    pub const MUSHGLOOM: Block = Block::new("mushgloom", Material::Plants);
    pub const COBWEB: Block = Block::new("cobweb", Material::Web);
    pub const PUMPKIN: Block = Block::directional("pumpkin", Material::Gourd);
    pub const JACK_O_LANTERN: Block = Block::directional("jack_o_lantern", Material::Gourd);
    pub const TRAPPED_CHEST: Block = Block::directional("trapped_chest", Material::Wood);
    pub const SPAWNER: Block = Block::new("spawner", Material::Rock);

    pub const fn default_state(self) -> BlockState {
        BlockState::new(self)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
