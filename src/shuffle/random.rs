use rand::Rng;

/// A uniform integer source over an inclusive range.
///
/// Every `rand::Rng` is a `RandomSource`, so a seeded
/// `rand::rngs::StdRng` can stand in for the thread generator whenever a
/// reproducible ordering is needed.
pub trait RandomSource {
    /// Returns a uniformly distributed integer in `[min, max]`.
    ///
    /// `min` and `max` may both be returned. If `max < min` the bounds are
    /// swapped.
    fn random_number(&mut self, min: usize, max: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn random_number(&mut self, min: usize, max: usize) -> usize {
        let (lo, hi) = if max < min { (max, min) } else { (min, max) };
        self.random_range(lo..=hi)
    }
}

/// Wraps `number` into the inclusive range `[min, max]`.
///
/// Values inside the range are returned unchanged, values outside are
/// reduced modulo the range width `max - min + 1`.
pub fn wrap_number(number: i64, min: i64, max: i64) -> i64 {
    let (min, max) = if max < min { (max, min) } else { (min, max) };
    if number >= min && number <= max {
        return number;
    }

    let width = max - min + 1;
    min + (number - min).rem_euclid(width)
}

/// Wraps a cursor that may have run past the end of a sequence of `len`
/// elements back into `[0, len - 1]`.
pub fn wrap_index(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor % len }
}
