use gloam_util::math::{
    block_box::BlockBox,
    orientation::{BlockRotation, Orientation},
    position::BlockPos,
    vector3::Vector3,
};

use super::processor::BlockProcessor;
use crate::{
    block::BlockState,
    world::{BlockFlags, GenerationWorld},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TemplateBlock {
    /// Template-local position.
    pub pos: BlockPos,
    pub state: BlockState,
}

/// A tagged cell resolved after stamping, such as a spawner slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMarker {
    pub pos: BlockPos,
    pub tag: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementSettings {
    pub orientation: Orientation,
    /// Blocks outside this box are not placed.
    pub bounds: Option<BlockBox>,
}

impl PlacementSettings {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            bounds: None,
        }
    }

    pub fn with_bounds(mut self, bounds: BlockBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn allows(&self, pos: &BlockPos) -> bool {
        self.bounds.is_none_or(|bounds| bounds.contains(pos))
    }
}

/// An immutable block pattern with a natural size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Template {
    size: Vector3<i32>,
    blocks: Vec<TemplateBlock>,
    markers: Vec<DataMarker>,
}

impl Template {
    pub fn new(size: Vector3<i32>) -> Self {
        Self {
            size,
            blocks: Vec::new(),
            markers: Vec::new(),
        }
    }

    fn in_size(&self, pos: &BlockPos) -> bool {
        BlockBox::from_size(BlockPos::ZERO, self.size).contains(pos)
    }

    /// Sets the block at a local position, replacing any earlier entry.
    pub fn with_block(mut self, pos: BlockPos, state: BlockState) -> Self {
        debug_assert!(self.in_size(&pos), "{pos} is outside the template");
        self.markers.retain(|marker| marker.pos != pos);
        match self.blocks.iter_mut().find(|block| block.pos == pos) {
            Some(block) => block.state = state,
            None => self.blocks.push(TemplateBlock { pos, state }),
        }
        self
    }

    /// Fills the inclusive local box spanned by `from` and `to`.
    pub fn with_fill(mut self, from: BlockPos, to: BlockPos, state: BlockState) -> Self {
        let area = BlockBox::new(from.0.x, from.0.y, from.0.z, to.0.x, to.0.y, to.0.z);
        for y in area.min.y..=area.max.y {
            for z in area.min.z..=area.max.z {
                for x in area.min.x..=area.max.x {
                    self = self.with_block(BlockPos::new(x, y, z), state);
                }
            }
        }
        self
    }

    /// Places a data marker, which replaces any block at that position.
    pub fn with_marker(mut self, pos: BlockPos, tag: &str) -> Self {
        debug_assert!(self.in_size(&pos), "{pos} is outside the template");
        self.blocks.retain(|block| block.pos != pos);
        self.markers.retain(|marker| marker.pos != pos);
        self.markers.push(DataMarker {
            pos,
            tag: tag.to_string(),
        });
        self
    }

    pub fn size(&self) -> Vector3<i32> {
        self.size
    }

    pub fn blocks(&self) -> &[TemplateBlock] {
        &self.blocks
    }

    pub fn transformed_size(&self, rotation: BlockRotation) -> Vector3<i32> {
        Orientation::new(rotation, Default::default()).transform_size(self.size)
    }

    /// Where local `(0, 0, 0)` lands when the transformed footprint starts at
    /// `pos`.
    pub fn zero_position_with_transform(&self, pos: BlockPos, orientation: &Orientation) -> BlockPos {
        pos.offset(orientation.zero_offset(self.size))
    }

    fn to_world(origin: BlockPos, orientation: &Orientation, local: BlockPos) -> BlockPos {
        origin.offset(orientation.transform(local.0))
    }

    /// Stamps the template with local `(0, 0, 0)` at `origin`.
    ///
    /// The processor sees every block, including those later clipped by the
    /// settings' bounds. Data markers are left untouched; callers resolve
    /// them through [`Template::data_markers`]. Returns the number of blocks
    /// that changed.
    pub fn place<W: GenerationWorld + ?Sized>(
        &self,
        world: &mut W,
        origin: BlockPos,
        settings: &PlacementSettings,
        mut processor: Option<&mut dyn BlockProcessor>,
        flags: BlockFlags,
    ) -> usize {
        let orientation = &settings.orientation;
        let mut placed = 0;

        for block in &self.blocks {
            let pos = Self::to_world(origin, orientation, block.pos);
            let state = match processor.as_deref_mut() {
                Some(processor) => match processor.process_block(&pos, block.state) {
                    Some(state) => state,
                    None => continue,
                },
                None => block.state,
            };
            if settings.allows(&pos)
                && world.set_block_state(&pos, state.transform(orientation), flags)
            {
                placed += 1;
            }
        }

        if placed == 0 && !self.blocks.is_empty() {
            log::warn!("Template stamped at {origin} placed no blocks");
        }
        placed
    }

    /// World positions and tags of the data markers inside the settings'
    /// bounds.
    pub fn data_markers(&self, origin: BlockPos, settings: &PlacementSettings) -> Vec<(BlockPos, &str)> {
        self.markers
            .iter()
            .map(|marker| {
                (
                    Self::to_world(origin, &settings.orientation, marker.pos),
                    marker.tag.as_str(),
                )
            })
            .filter(|(pos, _)| settings.allows(pos))
            .collect()
    }
}
