//! Rotation and mirroring of template-local coordinates.
//!
//! A transform always mirrors first and rotates second. Every caller that
//! turns template space into world space goes through [`Orientation`], so
//! positions, sizes and facings agree with each other.

use crate::{
    HorizontalFacing,
    math::vector3::Vector3,
    random::{RandomGenerator, RandomImpl},
};

/// Rotation around the vertical axis, viewed from above.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockRotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    CounterClockwise90,
}

impl BlockRotation {
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::Clockwise90,
        Self::Clockwise180,
        Self::CounterClockwise90,
    ];

    /// Whether this rotation exchanges the x and z extents of a shape.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Clockwise90 | Self::CounterClockwise90)
    }

    pub const fn rotate(self, pos: Vector3<i32>) -> Vector3<i32> {
        match self {
            Self::None => pos,
            Self::Clockwise90 => Vector3::new(-pos.z, pos.y, pos.x),
            Self::Clockwise180 => Vector3::new(-pos.x, pos.y, -pos.z),
            Self::CounterClockwise90 => Vector3::new(pos.z, pos.y, -pos.x),
        }
    }

    pub const fn rotate_facing(self, facing: HorizontalFacing) -> HorizontalFacing {
        match self {
            Self::None => facing,
            Self::Clockwise90 => facing.rotate_clockwise(),
            Self::Clockwise180 => facing.opposite(),
            Self::CounterClockwise90 => facing.opposite().rotate_clockwise(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockMirror {
    #[default]
    None,
    /// Flips the z axis.
    LeftRight,
    /// Flips the x axis.
    FrontBack,
}

impl BlockMirror {
    pub const ALL: [Self; 3] = [Self::None, Self::LeftRight, Self::FrontBack];

    pub const fn mirror(self, pos: Vector3<i32>) -> Vector3<i32> {
        match self {
            Self::None => pos,
            Self::LeftRight => Vector3::new(pos.x, pos.y, -pos.z),
            Self::FrontBack => Vector3::new(-pos.x, pos.y, pos.z),
        }
    }

    pub const fn mirror_facing(self, facing: HorizontalFacing) -> HorizontalFacing {
        match (self, facing) {
            (Self::LeftRight, HorizontalFacing::North | HorizontalFacing::South)
            | (Self::FrontBack, HorizontalFacing::East | HorizontalFacing::West) => {
                facing.opposite()
            }
            _ => facing,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub rotation: BlockRotation,
    pub mirror: BlockMirror,
}

impl Orientation {
    pub const fn new(rotation: BlockRotation, mirror: BlockMirror) -> Self {
        Self { rotation, mirror }
    }

    /// Draws a rotation and then a mirror, both uniformly.
    pub fn random(random: &mut RandomGenerator) -> Self {
        let rotation = BlockRotation::ALL[random.next_bounded_i32(4) as usize];
        let mirror = BlockMirror::ALL[random.next_bounded_i32(3) as usize];
        Self { rotation, mirror }
    }

    pub fn all() -> impl Iterator<Item = Orientation> {
        BlockRotation::ALL.into_iter().flat_map(|rotation| {
            BlockMirror::ALL
                .into_iter()
                .map(move |mirror| Orientation::new(rotation, mirror))
        })
    }

    pub const fn transform(&self, pos: Vector3<i32>) -> Vector3<i32> {
        self.rotation.rotate(self.mirror.mirror(pos))
    }

    pub const fn transform_facing(&self, facing: HorizontalFacing) -> HorizontalFacing {
        self.rotation.rotate_facing(self.mirror.mirror_facing(facing))
    }

    /// World space extents of a shape with the given natural size.
    pub const fn transform_size(&self, size: Vector3<i32>) -> Vector3<i32> {
        if self.rotation.swaps_axes() {
            Vector3::new(size.z, size.y, size.x)
        } else {
            size
        }
    }

    /// Offset from the minimum corner of the transformed footprint to the
    /// point that template-local `(0, 0, 0)` lands on.
    ///
    /// Stamping a shape of `size` at `corner + zero_offset(size)` makes it
    /// cover exactly `corner .. corner + transform_size(size)`.
    pub const fn zero_offset(&self, size: Vector3<i32>) -> Vector3<i32> {
        let max_x = size.x - 1;
        let max_z = size.z - 1;
        let flip_x = if matches!(self.mirror, BlockMirror::FrontBack) {
            max_x
        } else {
            0
        };
        let flip_z = if matches!(self.mirror, BlockMirror::LeftRight) {
            max_z
        } else {
            0
        };
        match self.rotation {
            BlockRotation::None => Vector3::new(flip_x, 0, flip_z),
            BlockRotation::Clockwise90 => Vector3::new(max_z - flip_z, 0, flip_x),
            BlockRotation::Clockwise180 => Vector3::new(max_x - flip_x, 0, max_z - flip_z),
            BlockRotation::CounterClockwise90 => Vector3::new(flip_z, 0, max_x - flip_x),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::{BlockMirror, BlockRotation, Orientation};
    use crate::{HorizontalFacing, math::vector3::Vector3};

    #[test]
    fn rotation_matches_facing() {
        for rotation in BlockRotation::ALL {
            for facing in HorizontalFacing::ALL {
                let rotated = rotation.rotate(facing.to_offset());
                assert_eq!(rotated, rotation.rotate_facing(facing).to_offset());
            }
        }
    }

    #[test]
    fn mirror_matches_facing() {
        for mirror in BlockMirror::ALL {
            for facing in HorizontalFacing::ALL {
                let mirrored = mirror.mirror(facing.to_offset());
                assert_eq!(mirrored, mirror.mirror_facing(facing).to_offset());
            }
        }
    }

    #[test]
    fn mirror_is_applied_before_rotation() {
        let orientation = Orientation::new(BlockRotation::Clockwise90, BlockMirror::FrontBack);
        // mirror: (2, 0, 1) -> (-2, 0, 1); rotate cw: -> (-1, 0, -2)
        assert_eq!(
            orientation.transform(Vector3::new(2, 0, 1)),
            Vector3::new(-1, 0, -2)
        );
        assert_eq!(
            orientation.transform_facing(HorizontalFacing::West),
            HorizontalFacing::South
        );
    }

    #[test]
    fn zero_offsets_by_hand() {
        let size = Vector3::new(4, 2, 6);
        let cases = [
            (BlockRotation::None, BlockMirror::None, Vector3::new(0, 0, 0)),
            (BlockRotation::None, BlockMirror::FrontBack, Vector3::new(3, 0, 0)),
            (BlockRotation::None, BlockMirror::LeftRight, Vector3::new(0, 0, 5)),
            (BlockRotation::Clockwise90, BlockMirror::None, Vector3::new(5, 0, 0)),
            (BlockRotation::Clockwise180, BlockMirror::None, Vector3::new(3, 0, 5)),
            (BlockRotation::CounterClockwise90, BlockMirror::None, Vector3::new(0, 0, 3)),
            (BlockRotation::CounterClockwise90, BlockMirror::FrontBack, Vector3::new(0, 0, 0)),
        ];
        for (rotation, mirror, expected) in cases {
            let orientation = Orientation::new(rotation, mirror);
            assert_eq!(orientation.zero_offset(size), expected, "{orientation:?}");
        }
    }

    #[test]
    fn all_yields_every_combination_once() {
        let all: HashSet<_> = Orientation::all().collect();
        assert_eq!(all.len(), 12);
    }

    proptest! {
        #[test]
        fn zero_offset_places_shape_in_footprint(
            sx in 1..8i32,
            sy in 1..4i32,
            sz in 1..8i32,
            rotation in 0..4usize,
            mirror in 0..3usize,
        ) {
            let orientation = Orientation::new(BlockRotation::ALL[rotation], BlockMirror::ALL[mirror]);
            let size = Vector3::new(sx, sy, sz);
            let footprint = orientation.transform_size(size);
            let zero = orientation.zero_offset(size);

            let mut seen = HashSet::new();
            for x in 0..sx {
                for y in 0..sy {
                    for z in 0..sz {
                        let pos = orientation.transform(Vector3::new(x, y, z)) + zero;
                        prop_assert!(pos.x >= 0 && pos.x < footprint.x);
                        prop_assert!(pos.y >= 0 && pos.y < footprint.y);
                        prop_assert!(pos.z >= 0 && pos.z < footprint.z);
                        prop_assert!(seen.insert(pos));
                    }
                }
            }
            prop_assert_eq!(seen.len() as i32, sx * sy * sz);
        }

        #[test]
        fn facing_transform_is_a_bijection(rotation in 0..4usize, mirror in 0..3usize) {
            let orientation = Orientation::new(BlockRotation::ALL[rotation], BlockMirror::ALL[mirror]);
            let images: HashSet<_> = HorizontalFacing::ALL
                .into_iter()
                .map(|facing| orientation.transform_facing(facing))
                .collect();
            prop_assert_eq!(images.len(), 4);
        }
    }
}
