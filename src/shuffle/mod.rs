//! # Shuffle Engine
//!
//! Randomized orderings that feel shuffled to a listener rather than being
//! merely uniform. Everything in this module is a synchronous, pure
//! transformation over an in-memory slice; the random source is always
//! passed in explicitly and no state survives between calls.
//!
//! ## Building Blocks
//!
//! - [`unbiased_shuffle`] - Fisher-Yates permutation, every ordering equally
//!   likely
//! - [`batch_shuffle`] / [`batch_shuffle_by_contributor`] - independent
//!   shuffles of fixed-size contiguous windows
//! - [`spread_sample`] - bounded sample drawn with random stride jumps so a
//!   short queue still spans a large playlist
//! - [`contributor_aware_sample`] - spread sample that avoids adjacent
//!   tracks added by the same collaborator, with a bounded fallback
//! - [`partition_shuffle`] - shuffles a few large partitions, trades
//!   elements between them and interleaves them into a queue
//! - [`rearrange_by_contributor`] - deterministic reordering that separates
//!   contributors, most frequent first
//!
//! ## Pipeline
//!
//! [`shuffle_queue`] chains the blocks the way a playback request uses them:
//! small playlists get a plain unbiased shuffle, larger ones are shuffled per
//! window and then reduced to the queue cap by a sampler.
//!
//! ```text
//! tracks -> batch shuffle -> spread / contributor-aware sample -> queue
//! ```
//!
//! ## Randomness
//!
//! Any `rand::Rng` works as a [`RandomSource`]. Seed a
//! `rand::rngs::StdRng` to get reproducible output.

mod batch;
mod contributor;
mod error;
mod partition;
mod probe;
mod random;
mod rearrange;
mod spread;
mod unbiased;

use std::{fmt, str::FromStr};

pub use batch::{WINDOW_OPENER_PROBES, batch_shuffle, batch_shuffle_by_contributor, window_size};
pub use contributor::{CONTRIBUTOR_PROBE_LIMIT, contributor_aware_sample};
pub use error::{BatchSize, ShuffleError};
pub use partition::{DEFAULT_PARTITIONS, partition_shuffle};
pub use probe::{Probe, first_open_slot, probe};
pub use random::{RandomSource, wrap_index, wrap_number};
pub use rearrange::rearrange_by_contributor;
pub use spread::{SPREAD_PROBE_LIMIT, spread_sample, stride_bound};
pub use unbiased::unbiased_shuffle;

/// Items that remember who added them to their source playlist.
pub trait Contributed {
    fn contributor_id(&self) -> Option<&str>;
}

/// Two neighbours clash only when both contributors are known and equal.
pub(crate) fn conflicts(previous: Option<&str>, candidate: Option<&str>) -> bool {
    matches!((previous, candidate), (Some(a), Some(b)) if a == b)
}

/// How a playback queue is derived from a playlist that exceeds the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Full unbiased shuffle, then keep the first `cap` tracks.
    Unbiased,
    /// Window shuffle, then spread sample.
    Batch,
    /// Spread sample straight from playlist order.
    Spread,
    /// Contributor-aware window shuffle, then contributor-aware sample.
    #[default]
    Contributor,
    /// Partition shuffle with round-robin interleaving.
    Partition,
    /// Partition shuffle, then contributors are kept apart greedily.
    Rearrange,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unbiased" => Ok(Strategy::Unbiased),
            "batch" => Ok(Strategy::Batch),
            "spread" => Ok(Strategy::Spread),
            "contributor" => Ok(Strategy::Contributor),
            "partition" => Ok(Strategy::Partition),
            "rearrange" => Ok(Strategy::Rearrange),
            other => Err(format!(
                "Invalid strategy: {other}. Use one of unbiased, batch, spread, contributor, partition, rearrange"
            )),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Unbiased => "unbiased",
            Strategy::Batch => "batch",
            Strategy::Spread => "spread",
            Strategy::Contributor => "contributor",
            Strategy::Partition => "partition",
            Strategy::Rearrange => "rearrange",
        };
        write!(f, "{}", name)
    }
}

/// Orders `items` for playback and caps the result at `cap` entries.
///
/// Inputs no longer than `cap` are shuffled with [`unbiased_shuffle`]
/// regardless of the strategy, since nothing has to be left out. The
/// [`Strategy::Rearrange`] strategy still separates contributors afterwards.
///
/// # Errors
///
/// Returns [`ShuffleError::InvalidArgument`] when `cap` is zero.
pub fn shuffle_queue<T, R>(
    mut items: Vec<T>,
    cap: usize,
    strategy: Strategy,
    window: Option<usize>,
    rng: &mut R,
) -> Result<Vec<T>, ShuffleError>
where
    T: Contributed + Clone,
    R: RandomSource + ?Sized,
{
    let cap = BatchSize::try_from(cap)?.get();

    if items.len() <= cap || strategy == Strategy::Unbiased {
        unbiased_shuffle(&mut items, rng);
        items.truncate(cap);
        if strategy == Strategy::Rearrange {
            items = rearrange_by_contributor(items);
        }
        return Ok(items);
    }

    match strategy {
        Strategy::Batch => {
            batch_shuffle(&mut items, window, rng);
            spread_sample(&items, cap, None, rng)
        }
        Strategy::Spread => spread_sample(&items, cap, None, rng),
        Strategy::Contributor => {
            batch_shuffle_by_contributor(&mut items, window, rng);
            contributor_aware_sample(&items, cap, None, rng)
        }
        Strategy::Partition => partition_shuffle(items, Some(cap), None, DEFAULT_PARTITIONS, rng),
        Strategy::Rearrange => {
            let queue = partition_shuffle(items, Some(cap), None, DEFAULT_PARTITIONS, rng)?;
            Ok(rearrange_by_contributor(queue))
        }
        Strategy::Unbiased => Ok(items),
    }
}
