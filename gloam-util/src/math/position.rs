use std::fmt;

use super::{vector2::Vector2, vector3::Vector3};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    pub const ZERO: BlockPos = BlockPos(Vector3::new(0, 0, 0));

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    pub fn offset(&self, offset: Vector3<i32>) -> Self {
        Self(self.0 + offset)
    }

    pub fn add(&self, x: i32, y: i32, z: i32) -> Self {
        Self(self.0.add_raw(x, y, z))
    }

    pub fn up_height(&self, height: i32) -> Self {
        self.add(0, height, 0)
    }

    pub fn down(&self) -> Self {
        self.add(0, -1, 0)
    }

    pub fn with_y(&self, y: i32) -> Self {
        Self::new(self.0.x, y, self.0.z)
    }

    /// Position of the chunk containing this block, `y` holding the chunk z.
    pub fn chunk_pos(&self) -> Vector2<i32> {
        Vector2::new(self.0.x >> 4, self.0.z >> 4)
    }
}

impl From<Vector3<i32>> for BlockPos {
    fn from(value: Vector3<i32>) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}
