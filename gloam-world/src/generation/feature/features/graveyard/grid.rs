use gloam_util::math::{orientation::BlockRotation, position::BlockPos, vector3::Vector3};

/// Cells of the graveyard interior that receive a grave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraveGrid {
    /// Inset corner of the interior at floor height.
    pub inner: BlockPos,
    pub inner_size: Vector3<i32>,
    /// Range of grave offsets that keep a grave inside the interior.
    pub fixed_size: Vector3<i32>,
    pub step_x: i32,
    pub step_z: i32,
}

impl GraveGrid {
    pub const MARGIN: i32 = 2;
    /// Graves sink this far below the floor.
    pub const DEPTH: i32 = 2;

    /// `floor` is the first floor block of the base, `base_size` and
    /// `grave_size` are transformed sizes.
    pub fn new(
        floor: BlockPos,
        base_size: Vector3<i32>,
        grave_size: Vector3<i32>,
        rotation: BlockRotation,
    ) -> Self {
        let size = base_size.add_raw(-1, 0, -1);
        let end = floor.add(size.x, 0, size.z);
        let inner = floor.add(Self::MARGIN, 0, Self::MARGIN);
        let bound = end.add(-Self::MARGIN, 0, -Self::MARGIN);
        let inner_size = bound.0 - inner.0;
        let grave = grave_size.add_raw(-1, 0, -1);
        let fixed_size = Vector3::new(inner_size.x - grave.x, 0, inner_size.z - grave.z);
        let (step_x, step_z) = if rotation.swaps_axes() { (2, 5) } else { (5, 2) };
        Self {
            inner,
            inner_size,
            fixed_size,
            step_x,
            step_z,
        }
    }

    fn axis(limit: i32, step: i32, center: i32) -> impl Iterator<Item = i32> + Clone {
        (0..=limit)
            .step_by(step as usize)
            .filter(move |offset| *offset != center)
    }

    /// Minimum corners of the grave footprints, row by row along x.
    pub fn cells(&self) -> impl Iterator<Item = BlockPos> {
        let inner = self.inner;
        let xs = Self::axis(self.fixed_size.x, self.step_x, self.inner_size.x / 2);
        let zs = Self::axis(self.fixed_size.z, self.step_z, self.inner_size.z / 2);
        xs.flat_map(move |x| {
            zs.clone()
                .map(move |z| inner.add(x, -Self::DEPTH, z))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}

#[cfg(test)]
mod test {
    use gloam_util::math::{orientation::BlockRotation, position::BlockPos, vector3::Vector3};

    use super::GraveGrid;

    #[test]
    fn interior_of_small_base() {
        let grid = GraveGrid::new(
            BlockPos::new(0, 10, 0),
            Vector3::new(9, 4, 9),
            Vector3::new(1, 3, 2),
            BlockRotation::None,
        );
        assert_eq!(grid.inner, BlockPos::new(2, 10, 2));
        assert_eq!(grid.inner_size, Vector3::new(4, 0, 4));
        assert_eq!(grid.fixed_size, Vector3::new(4, 0, 3));
        // x: 0 only; z: 0 and 2, but 2 is the center line
        assert_eq!(grid.cells().collect::<Vec<_>>(), vec![BlockPos::new(2, 8, 2)]);
    }

    #[test]
    fn strides_follow_rotation() {
        let base = Vector3::new(21, 4, 21);
        let grave = Vector3::new(1, 3, 2);
        let unrotated = GraveGrid::new(BlockPos::ZERO, base, grave, BlockRotation::Clockwise180);
        assert_eq!((unrotated.step_x, unrotated.step_z), (5, 2));
        let rotated = GraveGrid::new(BlockPos::ZERO, base, grave, BlockRotation::CounterClockwise90);
        assert_eq!((rotated.step_x, rotated.step_z), (2, 5));
    }

    #[test]
    fn skips_center_lines() {
        // inner 16 x 16, center 8; grave 1 x 2 gives fixed 16 x 15
        let grid = GraveGrid::new(
            BlockPos::ZERO,
            Vector3::new(21, 4, 21),
            Vector3::new(1, 3, 2),
            BlockRotation::None,
        );
        let cells: Vec<_> = grid.cells().collect();
        // x in {0, 5, 10, 15}, z in {0, 2, 4, 6, 10, 12, 14}
        assert_eq!(cells.len(), 4 * 7);
        assert!(cells.iter().all(|cell| cell.0.x != 2 + 8 && cell.0.z != 2 + 8));
        assert_eq!(grid.cell_count(), cells.len());
    }

    #[test]
    fn grave_larger_than_interior_has_no_cells() {
        let grid = GraveGrid::new(
            BlockPos::ZERO,
            Vector3::new(6, 4, 6),
            Vector3::new(3, 3, 3),
            BlockRotation::None,
        );
        assert_eq!(grid.cell_count(), 0);
    }
}
