use std::fmt;
use std::ops::{Add, Sub};

use num_traits::Num;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Vector3 { x, y, z }
    }
}

impl<T: Num + Copy> Vector3<T> {
    pub fn add_raw(&self, x: T, y: T, z: T) -> Self {
        Vector3 {
            x: self.x + x,
            y: self.y + y,
            z: self.z + z,
        }
    }
}

impl Vector3<i32> {
    /// Converts a block coordinate to the center of that block.
    pub fn to_centered_f64(&self) -> Vector3<f64> {
        Vector3::new(
            self.x as f64 + 0.5,
            self.y as f64,
            self.z as f64 + 0.5,
        )
    }
}

impl<T: Num + Copy> Add for Vector3<T> {
    type Output = Vector3<T>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_raw(rhs.x, rhs.y, rhs.z)
    }
}

impl<T: Num + Copy> Sub for Vector3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
