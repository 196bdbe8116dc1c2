use alloc::vec::Vec;

use crate::constants::{MULBERRY32_INCREMENT, U32_RANGE};
use crate::error::RngError;
use crate::hash::hash_to_u32;

/// Mulberry32 generator. Every step wraps at 32 bits; widening any
/// intermediate changes the sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

/// Hashes `seed` and builds a generator from it.
pub fn create_prng(seed: &str) -> SeededRng {
    SeededRng::from_seed_str(seed)
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(hash_to_u32(seed))
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY32_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// Uniform integer in `[min, max]`. Reversed bounds are swapped.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = ordered(min, max);
        let span = (i128::from(hi) - i128::from(lo) + 1) as f64;
        // Non-negative, so truncation is floor.
        let offset = (self.next_f64() * span) as i128;
        // Float rounding on spans near 2^64 can land one past `hi`.
        (i128::from(lo) + offset).min(i128::from(hi)) as i64
    }

    /// Uniform float in `[min, max)`. Reversed bounds are swapped; `min == max`
    /// yields `min`.
    ///
    /// Finite bounds always give a finite result below `max`. When `max - min`
    /// overflows, the offset is taken in halves.
    pub fn next_float(&mut self, min: f64, max: f64) -> f64 {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        let r = self.next_f64();
        let span = hi - lo;
        let value = if span.is_finite() {
            r * span + lo
        } else {
            let half = r * (hi / 2.0 - lo / 2.0);
            lo + half + half
        };
        // Rounding can land on `hi` when the bounds dwarf the span.
        if hi > lo && value >= hi {
            below(hi)
        } else {
            value
        }
    }

    /// Fisher-Yates from the last index down to 1.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as i64) as usize;
            items.swap(i, j);
        }
    }

    /// Shuffled copy of `items`; the input is left untouched.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        self.shuffle_in_place(&mut shuffled);
        shuffled
    }

    /// Uniform element of `items`. An empty slice consumes no draw.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RngError> {
        if items.is_empty() {
            return Err(RngError::EmptyCollection);
        }
        let index = self.next_int(0, items.len() as i64 - 1) as usize;
        Ok(&items[index])
    }

    /// Up to `count` elements sampled without replacement.
    ///
    /// The whole slice is shuffled regardless of `count`, so the draws consumed
    /// depend only on `items.len()`.
    pub fn pick_multiple<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut shuffled = self.shuffle(items);
        shuffled.truncate(count);
        shuffled
    }
}

#[inline]
fn ordered(a: i64, b: i64) -> (i64, i64) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Largest `f64` strictly below a finite `x`.
fn below(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn first_draws_for_12345_are_pinned() {
        let mut rng = create_prng("12345");
        assert_eq!(rng.next_u32(), 511_737_490);
        assert_eq!(rng.state(), 1_878_358_568);
        assert_eq!(rng.next_u32(), 1_301_029_584);
        assert_eq!(rng.next_u32(), 368_319_015);
        assert_eq!(rng.state(), 1_246_522_898);
    }

    #[test]
    fn zero_seed_is_a_valid_state() {
        let mut rng = SeededRng::new(0);
        assert_eq!(rng.next_u32(), 1_144_304_738);
        assert_eq!(rng.next_u32(), 1_416_247);
    }

    #[test]
    fn next_int_with_equal_bounds_returns_bound_and_draws() {
        let mut rng = create_prng("fixed");
        let before = rng.state();
        assert_eq!(rng.next_int(7, 7), 7);
        assert_ne!(rng.state(), before);
    }

    #[test]
    fn reversed_bounds_match_ordered_bounds() {
        let mut forward = create_prng("swap");
        let mut reversed = create_prng("swap");
        for _ in 0..100 {
            assert_eq!(forward.next_int(-5, 20), reversed.next_int(20, -5));
            assert_eq!(forward.next_float(1.0, 2.0), reversed.next_float(2.0, 1.0));
        }
    }

    #[test]
    fn next_int_handles_full_i64_span() {
        let mut rng = create_prng("wide");
        for _ in 0..1000 {
            let value = rng.next_int(i64::MIN, i64::MAX);
            assert!((i64::MIN..=i64::MAX).contains(&value));
        }
        assert_eq!(rng.next_int(i64::MAX, i64::MAX), i64::MAX);
    }

    #[test]
    fn next_float_with_equal_bounds_returns_min() {
        let mut rng = create_prng("flat");
        assert_eq!(rng.next_float(2.5, 2.5), 2.5);
    }

    #[test]
    fn below_steps_one_ulp_down() {
        assert_eq!(below(1.0), 1.0 - f64::EPSILON / 2.0);
        assert_eq!(below(-1.0), -1.0 - f64::EPSILON);
        assert!(below(0.0) < 0.0);
        assert_eq!(below(1e15 + 1.0), 1e15 + 0.875);
    }

    #[test]
    fn shuffle_leaves_input_untouched() {
        let input = vec![1, 2, 3, 4, 5];
        let mut rng = create_prng("abc");
        let shuffled = rng.shuffle(&input);
        assert_eq!(input, [1, 2, 3, 4, 5]);
        assert_eq!(shuffled.len(), input.len());
    }

    #[test]
    fn shuffle_of_short_slices_draws_nothing() {
        let mut rng = create_prng("short");
        let before = rng.state();
        assert!(rng.shuffle::<u8>(&[]).is_empty());
        assert_eq!(rng.shuffle(&['x']), ['x']);
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn pick_on_empty_slice_is_an_error_without_drawing() {
        let mut rng = create_prng("empty");
        let before = rng.state();
        assert_eq!(rng.pick::<u8>(&[]), Err(RngError::EmptyCollection));
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn pick_multiple_clamps_count() {
        let mut rng = create_prng("clamp");
        let items = ['a', 'b', 'c'];
        assert!(rng.pick_multiple(&items, 0).is_empty());
        let mut all = rng.pick_multiple(&items, 10);
        all.sort_unstable();
        assert_eq!(all, items);
    }

    #[test]
    fn pick_multiple_consumes_draws_independent_of_count() {
        let items: Vec<u32> = (0..8).collect();
        let mut few = create_prng("draws");
        let mut many = create_prng("draws");
        few.pick_multiple(&items, 1);
        many.pick_multiple(&items, 8);
        assert_eq!(few.state(), many.state());
    }
}
