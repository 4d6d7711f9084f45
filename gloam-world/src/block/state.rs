use gloam_util::{HorizontalFacing, math::orientation::Orientation};

use super::{Block, material::Material};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockState {
    pub block: Block,
    pub facing: Option<HorizontalFacing>,
}

impl BlockState {
    pub const AIR: BlockState = BlockState::new(Block::AIR);

    /// The default state; directional blocks face north.
    pub const fn new(block: Block) -> Self {
        Self {
            block,
            facing: if block.directional {
                Some(HorizontalFacing::North)
            } else {
                None
            },
        }
    }

    pub const fn with_facing(self, facing: HorizontalFacing) -> Self {
        if self.block.directional {
            Self {
                block: self.block,
                facing: Some(facing),
            }
        } else {
            self
        }
    }

    pub const fn material(&self) -> Material {
        self.block.material
    }

    pub fn is_air(&self) -> bool {
        self.block == Block::AIR
    }

    pub fn is_of(&self, block: &Block) -> bool {
        self.block == *block
    }

    pub fn transform(self, orientation: &Orientation) -> Self {
        match self.facing {
            Some(facing) => Self {
                block: self.block,
                facing: Some(orientation.transform_facing(facing)),
            },
            None => self,
        }
    }
}
