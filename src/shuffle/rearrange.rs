use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, VecDeque},
};

use super::Contributed;

/// Reorders `items` so that no two neighbours share a contributor, whenever
/// such an order exists.
///
/// Items are grouped by contributor, keeping their relative order inside
/// each group. The output is built greedily: the group with the most items
/// left goes next, except the group placed just before, which only becomes a
/// candidate again after another group was placed. Ties go to the group seen
/// first in `items`. Items without a contributor form a group of their own
/// each.
///
/// If one contributor owns more than half of the items (rounded up), the
/// surplus cannot be separated and is appended at the end. The output is
/// always a permutation of the input.
///
/// This is deterministic: shuffle the input first to randomize the order
/// inside groups and the tie breaks.
pub fn rearrange_by_contributor<T>(items: Vec<T>) -> Vec<T>
where
    T: Contributed,
{
    let total = items.len();
    let mut groups: Vec<VecDeque<T>> = Vec::new();
    let mut by_contributor: HashMap<String, usize> = HashMap::new();

    for item in items {
        let group = match item.contributor_id() {
            Some(id) => *by_contributor.entry(id.to_string()).or_insert_with(|| {
                groups.push(VecDeque::new());
                groups.len() - 1
            }),
            None => {
                groups.push(VecDeque::new());
                groups.len() - 1
            }
        };
        groups[group].push_back(item);
    }

    let mut heap: BinaryHeap<(usize, Reverse<usize>)> = groups
        .iter()
        .enumerate()
        .map(|(index, group)| (group.len(), Reverse(index)))
        .collect();

    let mut arranged = Vec::with_capacity(total);
    let mut held: Option<(usize, Reverse<usize>)> = None;

    while let Some((remaining, Reverse(index))) = heap.pop() {
        if let Some(item) = groups[index].pop_front() {
            arranged.push(item);
        }
        if let Some(previous) = held.take() {
            heap.push(previous);
        }
        if remaining > 1 {
            held = Some((remaining - 1, Reverse(index)));
        }
    }

    if let Some((_, Reverse(index))) = held {
        arranged.extend(groups[index].drain(..));
    }

    arranged
}
