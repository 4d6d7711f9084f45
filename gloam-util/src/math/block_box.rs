use crate::math::{position::BlockPos, vector3::Vector3};

/// An axis aligned box of blocks. Both corners are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockBox {
    pub min: Vector3<i32>,
    pub max: Vector3<i32>,
}

impl BlockBox {
    pub fn new(min_x: i32, min_y: i32, min_z: i32, max_x: i32, max_y: i32, max_z: i32) -> Self {
        BlockBox {
            min: Vector3 {
                x: min_x.min(max_x),
                y: min_y.min(max_y),
                z: min_z.min(max_z),
            },
            max: Vector3 {
                x: min_x.max(max_x),
                y: min_y.max(max_y),
                z: min_z.max(max_z),
            },
        }
    }

    /// The box covering `size` blocks starting at `origin`.
    pub fn from_size(origin: BlockPos, size: Vector3<i32>) -> Self {
        let min = origin.0;
        Self::new(
            min.x,
            min.y,
            min.z,
            min.x + size.x - 1,
            min.y + size.y - 1,
            min.z + size.z - 1,
        )
    }

    pub fn contains(&self, pos: &BlockPos) -> bool {
        let pos = pos.0;
        pos.x >= self.min.x
            && pos.x <= self.max.x
            && pos.y >= self.min.y
            && pos.y <= self.max.y
            && pos.z >= self.min.z
            && pos.z <= self.max.z
    }

    pub fn block_count_x(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    pub fn block_count_y(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    pub fn block_count_z(&self) -> i32 {
        self.max.z - self.min.z + 1
    }
}
