//! 64-bit linear congruential generator.
//!
//! `x ← a·x + c (mod 2^64)` with Knuth's MMIX constants. Full period 2^64
//! for any seed. The low bits of an LCG are weak, so consumers should take
//! the high bits; `rand::Rng::gen::<f64>()` does exactly that (top 53 bits).

use rand::{Error, RngCore, SeedableRng};

/// Knuth MMIX multiplier.
const MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// Knuth MMIX increment.
const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Linear congruential uniform source.
///
/// Implements [`RngCore`] and [`SeedableRng`] so it plugs into the `rand`
/// ecosystem. Not suitable for cryptography.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::LinearCongruential;
/// use rand::{Rng, SeedableRng};
///
/// let mut a = LinearCongruential::seed_from_u64(7);
/// let mut b = a.clone();
///
/// // Jumping ahead equals stepping
/// for _ in 0..1000 {
///     a.next_state();
/// }
/// b.advance(1000);
/// assert_eq!(a, b);
///
/// let u: f64 = a.gen();
/// assert!((0.0..1.0).contains(&u));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCongruential {
    state: u64,
}

impl LinearCongruential {
    /// Creates a generator whose state is exactly `seed`.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the current internal state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances one step and returns the new state.
    #[inline]
    pub fn next_state(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Jumps `delta` steps ahead in O(log delta).
    ///
    /// Uses Brown's method: the affine map `x ↦ a·x + c` is composed with
    /// itself by repeated squaring.
    pub fn advance(&mut self, mut delta: u64) {
        let mut cur_mult = MULTIPLIER;
        let mut cur_plus = INCREMENT;
        let mut acc_mult: u64 = 1;
        let mut acc_plus: u64 = 0;

        while delta > 0 {
            if delta & 1 == 1 {
                acc_mult = acc_mult.wrapping_mul(cur_mult);
                acc_plus = acc_plus.wrapping_mul(cur_mult).wrapping_add(cur_plus);
            }
            cur_plus = cur_mult.wrapping_add(1).wrapping_mul(cur_plus);
            cur_mult = cur_mult.wrapping_mul(cur_mult);
            delta >>= 1;
        }

        self.state = acc_mult.wrapping_mul(self.state).wrapping_add(acc_plus);
    }
}

impl RngCore for LinearCongruential {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_state() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_state()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for LinearCongruential {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Uses `state` directly as the initial state.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_first_step_from_zero_is_increment() {
        let mut rng = LinearCongruential::new(0);
        assert_eq!(rng.next_u64(), INCREMENT);
        assert_eq!(
            rng.next_u64(),
            INCREMENT.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
        );
    }

    #[test]
    fn test_seed_paths_agree() {
        let a = LinearCongruential::seed_from_u64(0xDEAD_BEEF);
        let b = LinearCongruential::from_seed(0xDEAD_BEEF_u64.to_le_bytes());
        assert_eq!(a, b);
        assert_eq!(a.state(), 0xDEAD_BEEF);
    }

    #[test]
    fn test_advance_matches_stepping() {
        for delta in [0_u64, 1, 2, 3, 17, 1024, 4097] {
            let mut stepped = LinearCongruential::new(42);
            let mut jumped = stepped.clone();
            for _ in 0..delta {
                stepped.next_state();
            }
            jumped.advance(delta);
            assert_eq!(stepped, jumped, "delta = {}", delta);
        }
    }

    #[test]
    fn test_advance_composes() {
        let mut once = LinearCongruential::new(99);
        let mut twice = once.clone();
        once.advance(123_456);
        twice.advance(100_000);
        twice.advance(23_456);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_uniform_range_and_mean() {
        let mut rng = LinearCongruential::new(2024);
        let n = 100_000;
        let mut sum = 0.0;
        for _ in 0..n {
            let u: f64 = rng.gen();
            assert!((0.0..1.0).contains(&u));
            sum += u;
        }
        let mean = sum / n as f64;
        assert!((mean - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_fill_bytes_partial_chunk() {
        let mut a = LinearCongruential::new(5);
        let mut b = a.clone();
        let mut buf = [0_u8; 11];
        a.fill_bytes(&mut buf);
        let first = b.next_u64().to_le_bytes();
        let second = b.next_u64().to_le_bytes();
        assert_eq!(&buf[..8], &first);
        assert_eq!(&buf[8..], &second[..3]);
    }
}
