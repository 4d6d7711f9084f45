use legacy_rand::LegacyRand;
use xoroshiro128::Xoroshiro;

use crate::math::vector2::Vector2;

pub mod legacy_rand;
pub mod xoroshiro128;

pub trait RandomImpl {
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    fn next_i32(&mut self) -> i32;

    /// Uniform in `0..bound`. `bound` must be positive.
    fn next_bounded_i32(&mut self, bound: i32) -> i32;

    fn next_i64(&mut self) -> i64;

    fn next_f32(&mut self) -> f32;
}

pub enum RandomGenerator {
    Legacy(LegacyRand),
    Xoroshiro(Xoroshiro),
}

impl RandomImpl for RandomGenerator {
    fn from_seed(seed: u64) -> Self {
        Self::Xoroshiro(Xoroshiro::from_seed(seed))
    }

    #[inline]
    fn next_i32(&mut self) -> i32 {
        match self {
            Self::Legacy(rand) => rand.next_i32(),
            Self::Xoroshiro(rand) => rand.next_i32(),
        }
    }

    #[inline]
    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        match self {
            Self::Legacy(rand) => rand.next_bounded_i32(bound),
            Self::Xoroshiro(rand) => rand.next_bounded_i32(bound),
        }
    }

    #[inline]
    fn next_i64(&mut self) -> i64 {
        match self {
            Self::Legacy(rand) => rand.next_i64(),
            Self::Xoroshiro(rand) => rand.next_i64(),
        }
    }

    #[inline]
    fn next_f32(&mut self) -> f32 {
        match self {
            Self::Legacy(rand) => rand.next_f32(),
            Self::Xoroshiro(rand) => rand.next_f32(),
        }
    }
}

/// A fresh seed from the thread local generator.
pub fn get_seed() -> u64 {
    rand::random()
}

/// Seed of the per-chunk random used for reproducible structure layout.
///
/// The squared and linear chunk terms wrap as 32-bit integers before they
/// are widened, so the same world seed, chunk and salt always yield the
/// same stream.
pub fn get_chunk_seed(world_seed: i64, chunk: Vector2<i32>, salt: i64) -> i64 {
    let x = chunk.x;
    let z = chunk.y;
    let x_term = x.wrapping_mul(x).wrapping_mul(4987142) as i64;
    let x_linear = x.wrapping_mul(5947611) as i64;
    let z_term = (z.wrapping_mul(z) as i64).wrapping_mul(4392871);
    let z_linear = z.wrapping_mul(389711) as i64;
    world_seed
        .wrapping_add(x_term)
        .wrapping_add(x_linear)
        .wrapping_add(z_term)
        .wrapping_add(z_linear)
        ^ salt
}

pub fn random_for_chunk(world_seed: i64, chunk: Vector2<i32>, salt: i64) -> RandomGenerator {
    RandomGenerator::Legacy(LegacyRand::from_seed(
        get_chunk_seed(world_seed, chunk, salt) as u64,
    ))
}

/// Seed for decorating the chunk at chunk coordinates (`chunk_x`, `chunk_z`).
pub fn get_population_seed(world_seed: i64, chunk_x: i32, chunk_z: i32) -> i64 {
    let mut random = LegacyRand::from_seed(world_seed as u64);
    let a = random.next_i64() / 2 * 2 + 1;
    let b = random.next_i64() / 2 * 2 + 1;
    ((chunk_x as i64).wrapping_mul(a)).wrapping_add((chunk_z as i64).wrapping_mul(b)) ^ world_seed
}

#[cfg(test)]
mod test {
    use super::{
        RandomImpl, get_chunk_seed, get_population_seed, legacy_rand::LegacyRand, random_for_chunk,
    };
    use crate::math::vector2::Vector2;

    #[test]
    fn chunk_seed_at_origin_is_salted_world_seed() {
        assert_eq!(get_chunk_seed(100, Vector2::new(0, 0), 0), 100);
        assert_eq!(get_chunk_seed(0, Vector2::new(0, 0), 987234911), 987234911);
    }

    #[test]
    fn chunk_seed_terms() {
        // 4987142 + 5947611 + 4392871 + 389711
        assert_eq!(get_chunk_seed(0, Vector2::new(1, 1), 0), 15717335);
        // 4987142 - 5947611 + 4392871 - 389711
        assert_eq!(get_chunk_seed(0, Vector2::new(-1, -1), 0), 3042691);
    }

    #[test]
    fn chunk_seed_wraps_like_32_bit_ints() {
        let x: i32 = 30_000;
        let expected_x = x.wrapping_mul(x).wrapping_mul(4987142) as i64
            + x.wrapping_mul(5947611) as i64;
        assert_eq!(get_chunk_seed(0, Vector2::new(x, 0), 0), expected_x);
    }

    #[test]
    fn chunk_random_is_reproducible() {
        let mut a = random_for_chunk(42, Vector2::new(3, -7), 987234911);
        let mut b = random_for_chunk(42, Vector2::new(3, -7), 987234911);
        for _ in 0..32 {
            assert_eq!(a.next_i64(), b.next_i64());
        }
        let mut c = random_for_chunk(42, Vector2::new(3, -6), 987234911);
        let mut a = random_for_chunk(42, Vector2::new(3, -7), 987234911);
        assert_ne!(
            (0..4).map(|_| a.next_i64()).collect::<Vec<_>>(),
            (0..4).map(|_| c.next_i64()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn population_seed_at_origin_is_world_seed() {
        assert_eq!(get_population_seed(1234, 0, 0), 1234);
        assert_ne!(get_population_seed(1234, 1, 0), 1234);
    }

    #[test]
    fn population_seed_steps_by_odd_multipliers() {
        let mut random = LegacyRand::from_seed(1234);
        let a = random.next_i64() / 2 * 2 + 1;
        let b = random.next_i64() / 2 * 2 + 1;
        assert_eq!(get_population_seed(1234, 1, 0), a ^ 1234);
        assert_eq!(get_population_seed(1234, 0, -1), b.wrapping_neg() ^ 1234);
        assert_eq!(
            get_population_seed(1234, 2, 3),
            a.wrapping_mul(2).wrapping_add(b.wrapping_mul(3)) ^ 1234
        );
    }
}
