use super::random::RandomSource;

/// Shuffles `items` in place so that every permutation is equally likely.
///
/// Fisher-Yates: walks from the last index down to 1, swapping each
/// position with a uniformly chosen index in `[0, i]`. Performs exactly
/// `n - 1` exchanges and allocates nothing. Slices shorter than two
/// elements are left untouched.
pub fn unbiased_shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    if items.len() < 2 {
        return;
    }

    for i in (1..items.len()).rev() {
        let j = rng.random_number(0, i);
        items.swap(i, j);
    }
}
