use super::{
    Contributed, conflicts,
    probe::{Probe, probe},
    random::RandomSource,
    unbiased::unbiased_shuffle,
};

/// Probes spent looking for a window opener that does not repeat the
/// contributor closing the previous window.
pub const WINDOW_OPENER_PROBES: usize = 10;

/// Resolves the window size for a sequence of `len` items.
///
/// `None` and `Some(0)` fall back to a tenth of the sequence (rounded),
/// and the result is never below 1.
pub fn window_size(len: usize, size: Option<usize>) -> usize {
    match size {
        Some(size) if size > 0 => size,
        _ => ((len as f64) / 10.0).round().max(1.0) as usize,
    }
}

/// Shuffles each contiguous window of `items` independently.
///
/// The slice is split into `ceil(n / size)` windows, the last one possibly
/// shorter, and every window gets its own unbiased shuffle. Elements never
/// leave their window, so coarse ordering of the input survives. Returns the
/// window size used.
pub fn batch_shuffle<T, R>(items: &mut [T], size: Option<usize>, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    let size = window_size(items.len(), size);
    for window in items.chunks_mut(size) {
        unbiased_shuffle(window, rng);
    }
    size
}

/// Contributor-aware variant of [`batch_shuffle`].
///
/// After a window is shuffled, its first element is checked against the
/// contributor of the last element of the previous window. On a clash, up to
/// [`WINDOW_OPENER_PROBES`] random positions of the window are tried and the
/// first non-clashing one is swapped to the front. If none is found the clash
/// is kept.
pub fn batch_shuffle_by_contributor<T, R>(
    items: &mut [T],
    size: Option<usize>,
    rng: &mut R,
) -> usize
where
    T: Contributed,
    R: RandomSource + ?Sized,
{
    let size = window_size(items.len(), size);
    let mut previous: Option<String> = None;

    for window in items.chunks_mut(size) {
        unbiased_shuffle(window, rng);

        let last = window.len() - 1;
        let forbidden = previous.as_deref();
        let outcome = probe(
            0,
            WINDOW_OPENER_PROBES,
            |slot| !conflicts(forbidden, window[slot].contributor_id()),
            |_| rng.random_number(0, last),
            |_| None,
        );

        if let Probe::Accepted(slot) = outcome {
            window.swap(0, slot);
        }

        previous = window[last].contributor_id().map(str::to_string);
    }

    size
}
