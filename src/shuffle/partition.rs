use super::{
    error::{BatchSize, ShuffleError},
    random::RandomSource,
    unbiased::unbiased_shuffle,
};

/// Default number of partitions used by [`partition_shuffle`].
pub const DEFAULT_PARTITIONS: usize = 4;

/// Splits `items` into `partitions` contiguous runs, shuffles and mixes them,
/// then interleaves them into a queue.
///
/// # Steps
///
/// 1. The first `partitions - 1` runs get `n / partitions` elements each, the
///    last run takes the remainder
/// 2. Every run gets its own [`unbiased_shuffle`]
/// 3. `exchanges` times (defaults to `n`, also when `Some(0)`), a random
///    element of a random run trades places with a random element of another
///    random run
/// 4. The runs are read round robin, one element per run in turn, skipping
///    runs that are used up, until `length` elements were taken
///
/// With `length` of `None` or at least `n` the runs are concatenated instead.
///
/// Each run is sampled from one region of the input, so the interleaved
/// queue covers the whole input evenly while the exchanges keep regions from
/// being recognisable.
///
/// # Errors
///
/// Returns [`ShuffleError::InvalidArgument`] when `partitions` is zero.
pub fn partition_shuffle<T, R>(
    mut items: Vec<T>,
    length: Option<usize>,
    exchanges: Option<usize>,
    partitions: usize,
    rng: &mut R,
) -> Result<Vec<T>, ShuffleError>
where
    R: RandomSource + ?Sized,
{
    let partitions = BatchSize::try_from(partitions)
        .map_err(|_| ShuffleError::InvalidArgument("partitions must be positive".to_string()))?
        .get();
    let count = items.len();
    let run_length = count / partitions;

    let mut runs: Vec<Vec<T>> = Vec::with_capacity(partitions);
    for _ in 1..partitions {
        let rest = items.split_off(run_length.min(items.len()));
        runs.push(items);
        items = rest;
    }
    runs.push(items);

    for run in runs.iter_mut() {
        unbiased_shuffle(run, rng);
    }

    let exchanges = exchanges.filter(|&e| e > 0).unwrap_or(count);
    for _ in 0..exchanges {
        exchange(&mut runs, rng);
    }

    match length {
        Some(length) if length < count => Ok(round_robin(runs, length)),
        _ => Ok(runs.into_iter().flatten().collect()),
    }
}

/// Swaps one random element of a random run with one of another random run.
/// The two picks may land in the same run.
fn exchange<T, R>(runs: &mut [Vec<T>], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    let last = runs.len() - 1;
    let from = rng.random_number(0, last);
    let to = rng.random_number(0, last);
    if runs[from].is_empty() || runs[to].is_empty() {
        return;
    }

    let from_index = rng.random_number(0, runs[from].len() - 1);
    let to_index = rng.random_number(0, runs[to].len() - 1);

    if from == to {
        runs[from].swap(from_index, to_index);
    } else {
        let (low, high) = if from < to { (from, to) } else { (to, from) };
        let (head, tail) = runs.split_at_mut(high);
        let (low_index, high_index) = if from < to {
            (from_index, to_index)
        } else {
            (to_index, from_index)
        };
        std::mem::swap(&mut head[low][low_index], &mut tail[0][high_index]);
    }
}

fn round_robin<T>(runs: Vec<Vec<T>>, length: usize) -> Vec<T> {
    let mut iters: Vec<_> = runs.into_iter().map(Vec::into_iter).collect();
    let mut queue = Vec::with_capacity(length);

    while queue.len() < length {
        let before = queue.len();
        for iter in iters.iter_mut() {
            if queue.len() == length {
                break;
            }
            if let Some(item) = iter.next() {
                queue.push(item);
            }
        }
        if queue.len() == before {
            break;
        }
    }

    queue
}
