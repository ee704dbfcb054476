use super::{
    Contributed, conflicts,
    error::{BatchSize, ShuffleError},
    probe::probe,
    random::{RandomSource, wrap_index},
    spread::{next_open_slot, stride_bound},
};

/// Contributor clashes tolerated per output position before the adjacency
/// constraint is dropped.
pub const CONTRIBUTOR_PROBE_LIMIT: usize = 25;

/// Spread sample that avoids placing two tracks added by the same
/// contributor next to each other.
///
/// Walks the input like [`spread_sample`](super::spread_sample): slots that
/// were already taken are stepped over without counting against any budget.
/// An open slot whose contributor matches the one of the element just emitted
/// is a clash, and the walk jumps on to the next open slot. After
/// [`CONTRIBUTOR_PROBE_LIMIT`] clashes for one position the open slot under
/// the cursor is taken regardless of its contributor. The relaxation only
/// lasts for that position. The output therefore always has `batch_size`
/// distinct elements whenever the input is large enough.
///
/// The contributor of the previous pick starts out as "none" on every call.
///
/// # Errors
///
/// Returns [`ShuffleError::InvalidArgument`] if `batch_size` is not a
/// positive integer.
pub fn contributor_aware_sample<T, B, R>(
    items: &[T],
    batch_size: B,
    sample_size: Option<usize>,
    rng: &mut R,
) -> Result<Vec<T>, ShuffleError>
where
    T: Contributed + Clone,
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
    let mut batch: Vec<T> = Vec::with_capacity(batch_size);
    let mut cursor = rng.random_number(0, len - 1);

    for _ in 0..batch_size {
        let previous = batch.last().and_then(|t| t.contributor_id());
        let start = next_open_slot(&selected, cursor, stride, rng);
        let outcome = probe(
            start,
            CONTRIBUTOR_PROBE_LIMIT,
            |slot| !conflicts(previous, items[slot].contributor_id()),
            |slot| {
                let jump = wrap_index(slot + rng.random_number(0, stride), len);
                next_open_slot(&selected, jump, stride, rng)
            },
            Some,
        );

        cursor = outcome.index();
        selected[cursor] = true;
        batch.push(items[cursor].clone());
    }

    Ok(batch)
}
