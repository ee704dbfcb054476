use super::{
    error::{BatchSize, ShuffleError},
    probe::{first_open_slot, probe},
    random::{RandomSource, wrap_index},
};

/// Stride walk length after which the spread sampler stops jumping and
/// scans for the next open slot instead.
pub const SPREAD_PROBE_LIMIT: usize = 4096;

/// Resolves the stride bound for a sequence of `len` items.
///
/// `None` and `Some(0)` fall back to a tenth of the sequence (rounded up),
/// and the result is never below 1 so every jump can make progress.
pub fn stride_bound(len: usize, sample_size: Option<usize>) -> usize {
    match sample_size {
        Some(size) if size > 0 => size,
        _ => len.div_ceil(10).max(1),
    }
}

/// Draws `batch_size` elements spread across the whole of `items`.
///
/// A cursor starts at a random slot. For every pick, while the cursor sits on
/// a slot that was already taken it jumps forward by a random amount in
/// `[0, sample_size]`, wrapping around the end. The element under the cursor
/// is then taken and the walk continues from there.
///
/// The result is in cursor-visit order and never repeats a slot. When `items`
/// is shorter than `batch_size` the input is returned as is.
///
/// # Errors
///
/// Returns [`ShuffleError::InvalidArgument`] if `batch_size` is not a
/// positive integer.
pub fn spread_sample<T, B, R>(
    items: &[T],
    batch_size: B,
    sample_size: Option<usize>,
    rng: &mut R,
) -> Result<Vec<T>, ShuffleError>
where
    T: Clone,
    B: TryInto<BatchSize, Error = ShuffleError>,
    R: RandomSource + ?Sized,
{
    let batch_size = batch_size.try_into()?.get();
    let len = items.len();
    if len < batch_size {
        return Ok(items.to_vec());
    }

    let stride = stride_bound(len, sample_size);
    let mut selected = vec![false; len];
    let mut batch = Vec::with_capacity(batch_size);
    let mut cursor = rng.random_number(0, len - 1);

    for _ in 0..batch_size {
        cursor = next_open_slot(&selected, cursor, stride, rng);
        selected[cursor] = true;
        batch.push(items[cursor].clone());
    }

    Ok(batch)
}

/// Walks from `cursor` to a slot that has not been selected yet.
///
/// The cursor stays put if its own slot is open. Otherwise it jumps forward by
/// a random amount in `[0, stride]`, wrapping around the end, until it lands on
/// an open slot. After [`SPREAD_PROBE_LIMIT`] jumps the first open slot found
/// by a linear scan is used. At least one slot must be open.
pub(crate) fn next_open_slot<R>(
    selected: &[bool],
    cursor: usize,
    stride: usize,
    rng: &mut R,
) -> usize
where
    R: RandomSource + ?Sized,
{
    let len = selected.len();
    probe(
        cursor,
        SPREAD_PROBE_LIMIT,
        |slot| !selected[slot],
        |slot| wrap_index(slot + rng.random_number(0, stride), len),
        |slot| first_open_slot(selected, slot),
    )
    .index()
}
