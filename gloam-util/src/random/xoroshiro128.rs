use super::RandomImpl;

const GOLDEN_RATIO_64: u64 = 0x9E3779B97F4A7C15;
const SILVER_RATIO_64: u64 = 0x6A09E667F3BCC909;

pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

fn mix_stafford_13(mut seed: u64) -> u64 {
    seed = (seed ^ (seed >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    seed = (seed ^ (seed >> 27)).wrapping_mul(0x94D049BB133111EB);
    seed ^ (seed >> 31)
}

impl Xoroshiro {
    fn new(lo: u64, hi: u64) -> Self {
        if lo | hi == 0 {
            return Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            };
        }
        Self { lo, hi }
    }

    fn next(&mut self) -> u64 {
        let lo = self.lo;
        let mut hi = self.hi;
        let result = lo.wrapping_add(hi).rotate_left(17).wrapping_add(lo);
        hi ^= lo;
        self.lo = lo.rotate_left(49) ^ hi ^ (hi << 21);
        self.hi = hi.rotate_left(28);
        result
    }

    fn next_bits(&mut self, bits: u32) -> u64 {
        self.next() >> (64 - bits)
    }
}

impl RandomImpl for Xoroshiro {
    fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self::new(mix_stafford_13(lo), mix_stafford_13(hi))
    }

    fn next_i32(&mut self) -> i32 {
        self.next() as i32
    }

    fn next_bounded_i32(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive");
        let bound = bound as u64;
        let mut product = (self.next_i32() as u32 as u64).wrapping_mul(bound);
        let mut low = product & 0xFFFF_FFFF;
        if low < bound {
            let threshold = (bound.wrapping_neg() & 0xFFFF_FFFF) % bound;
            while low < threshold {
                product = (self.next_i32() as u32 as u64).wrapping_mul(bound);
                low = product & 0xFFFF_FFFF;
            }
        }
        (product >> 32) as i32
    }

    fn next_i64(&mut self) -> i64 {
        self.next() as i64
    }

    fn next_f32(&mut self) -> f32 {
        self.next_bits(24) as f32 * 5.9604645E-8
    }
}

#[cfg(test)]
mod test {
    use super::Xoroshiro;
    use crate::random::RandomImpl;

    #[test]
    fn zero_seed_is_not_degenerate() {
        let mut rand = Xoroshiro::new(0, 0);
        assert_ne!(rand.next_i64(), 0);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Xoroshiro::from_seed(99);
        let mut b = Xoroshiro::from_seed(99);
        for _ in 0..64 {
            assert_eq!(a.next_bounded_i32(37), b.next_bounded_i32(37));
        }
    }

    #[test]
    fn floats_in_unit_interval() {
        let mut rand = Xoroshiro::from_seed(5);
        for _ in 0..1000 {
            let f = rand.next_f32();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn bounded_stays_in_range() {
        let mut rand = Xoroshiro::from_seed(321);
        for bound in [1, 3, 16, 24, 1000] {
            for _ in 0..500 {
                assert!((0..bound).contains(&rand.next_bounded_i32(bound)));
            }
        }
    }
}
