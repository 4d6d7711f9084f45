use crate::{
    math::vector3::Vector3,
    random::{RandomGenerator, RandomImpl},
};

/// The four horizontal block faces, in clockwise order starting north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HorizontalFacing {
    North,
    East,
    South,
    West,
}

impl HorizontalFacing {
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    pub fn random(random: &mut RandomGenerator) -> Self {
        Self::ALL[random.next_bounded_i32(4) as usize]
    }

    pub const fn to_offset(self) -> Vector3<i32> {
        match self {
            Self::North => Vector3::new(0, 0, -1),
            Self::East => Vector3::new(1, 0, 0),
            Self::South => Vector3::new(0, 0, 1),
            Self::West => Vector3::new(-1, 0, 0),
        }
    }

    pub const fn rotate_clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}

#[cfg(test)]
mod test {
    use super::HorizontalFacing;

    #[test]
    fn clockwise_cycles_back() {
        for facing in HorizontalFacing::ALL {
            let mut rotated = facing;
            for _ in 0..4 {
                rotated = rotated.rotate_clockwise();
            }
            assert_eq!(rotated, facing);
            assert_eq!(facing.rotate_clockwise().rotate_clockwise(), facing.opposite());
        }
    }

    #[test]
    fn offsets_are_unit_vectors() {
        for facing in HorizontalFacing::ALL {
            let offset = facing.to_offset();
            assert_eq!(offset.x.abs() + offset.z.abs(), 1);
            assert_eq!(offset.y, 0);
        }
    }
}
