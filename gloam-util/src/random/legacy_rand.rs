use super::RandomImpl;

const MULTIPLIER: u64 = 0x5DEECE66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;

/// The classic 48-bit linear congruential generator.
pub struct LegacyRand {
    seed: u64,
}

impl LegacyRand {
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

impl RandomImpl for LegacyRand {
    fn from_seed(seed: u64) -> Self {
        LegacyRand {
            seed: (seed ^ MULTIPLIER) & MASK,
        }
    }

    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        if bound & -bound == bound {
            return ((bound as i64 * self.next(31) as i64) >> 31) as i32;
        }

        loop {
            let bits = self.next(31);
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    fn next_i64(&mut self) -> i64 {
        let high = (self.next(32) as i64) << 32;
        high.wrapping_add(self.next(32) as i64)
    }

    fn next_f32(&mut self) -> f32 {
        self.next(24) as f32 / (1 << 24) as f32
    }
}
