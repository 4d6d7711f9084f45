use gloam_util::math::{position::BlockPos, vector3::Vector3};

use super::Rejection;
use crate::{
    block::{Block, BlockState, material::Material},
    world::GenerationWorld,
};

/// Mean, maximum and variance of column heights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeightSamples {
    count: u32,
    sum: f64,
    sum_sq: f64,
    max: Option<i32>,
}

impl HeightSamples {
    pub fn add(&mut self, height: i32) {
        let value = height as f64;
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
        self.max = Some(self.max.map_or(height, |max| max.max(height)));
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.sum / self.count as f64
    }

    pub fn max(&self) -> Option<i32> {
        self.max
    }

    pub fn population_std_dev(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let mean = self.mean();
        (self.sum_sq / self.count as f64 - mean * mean).max(0.0).sqrt()
    }
}

/// Accepted ground under a footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundLevel {
    /// The footprint corner moved to the rounded mean height.
    pub origin: BlockPos,
    pub mean: f64,
    pub max_y: i32,
    pub deviation: f64,
}

/// Rounds halves towards positive infinity.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

pub fn is_ground(state: &BlockState) -> bool {
    matches!(
        state.material(),
        Material::Rock | Material::Ground | Material::Grass | Material::Sand
    )
}

pub fn is_disallowed(state: &BlockState) -> bool {
    state.material().is_liquid() || state.is_of(&Block::BEDROCK)
}

/// Finds solid ground under every column of the `size` footprint starting at
/// `origin` and checks that it is flat enough.
///
/// Each column is scanned down from the surface. Liquid or bedrock above the
/// first ground block, a column without ground or a standard deviation above
/// `max_deviation` rejects the site.
pub fn estimate_ground_level<W: GenerationWorld + ?Sized>(
    world: &W,
    origin: BlockPos,
    size: Vector3<i32>,
    max_deviation: f64,
) -> Result<GroundLevel, Rejection> {
    let mut heights = HeightSamples::default();

    for dx in 0..size.x {
        for dz in 0..size.z {
            let x = origin.0.x + dx;
            let z = origin.0.z + dz;
            let mut y = world.surface_height(x, z);
            let ground = loop {
                if y < world.bottom_y() {
                    break None;
                }
                let pos = BlockPos::new(x, y, z);
                let state = world.get_block_state(&pos);
                if is_disallowed(&state) {
                    return Err(Rejection::Disallowed { pos });
                }
                if is_ground(&state) {
                    break Some(y);
                }
                y -= 1;
            };
            match ground {
                Some(y) => heights.add(y),
                None => return Err(Rejection::NoGround { x, z }),
            }
        }
    }

    let Some(max_y) = heights.max() else {
        return Err(Rejection::NoGround {
            x: origin.0.x,
            z: origin.0.z,
        });
    };
    let deviation = heights.population_std_dev();
    if deviation > max_deviation {
        return Err(Rejection::TooUneven { deviation });
    }

    Ok(GroundLevel {
        origin: origin.with_y(round_half_up(heights.mean())),
        mean: heights.mean(),
        max_y,
        deviation,
    })
}
