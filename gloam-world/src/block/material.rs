/// Coarse physical class of a block, used by terrain checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Material {
    Air,
    Rock,
    Ground,
    Grass,
    Sand,
    Water,
    Lava,
    Wood,
    Leaves,
    Plants,
    /// Plants that other blocks may overwrite, like tall grass.
    Vine,
    Web,
    Gourd,
    Glass,
}

impl Material {
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::Water | Self::Lava)
    }

    pub const fn is_replaceable(self) -> bool {
        matches!(self, Self::Air | Self::Water | Self::Lava | Self::Vine)
    }
}
