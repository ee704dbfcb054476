/// Outcome of a bounded probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// A slot satisfying the constraint was found within the probe budget.
    Accepted(usize),
    /// The budget ran out and the fallback strategy picked this slot.
    Relaxed(usize),
    /// Neither the probes nor the fallback found a slot. Holds the cursor the
    /// probing stopped at.
    Exhausted(usize),
}

impl Probe {
    /// The chosen slot, or the final cursor when nothing was found.
    pub fn index(self) -> usize {
        match self {
            Probe::Accepted(i) | Probe::Relaxed(i) | Probe::Exhausted(i) => i,
        }
    }
}

/// Attempts a constrained selection for at most `max_probes` steps, then
/// relaxes the constraint.
///
/// Starting at `cursor`, each probe tests the current slot with `accept`
/// and, on rejection, moves to `step(cursor)`. The slot reached after the
/// last step is tested too, so `max_probes` counts rejections. When every
/// probe is rejected `fallback` is called with the final cursor; it returns
/// the slot to use under the relaxed constraint, if any.
pub fn probe<A, S, F>(
    mut cursor: usize,
    max_probes: usize,
    mut accept: A,
    mut step: S,
    fallback: F,
) -> Probe
where
    A: FnMut(usize) -> bool,
    S: FnMut(usize) -> usize,
    F: FnOnce(usize) -> Option<usize>,
{
    for _ in 0..max_probes {
        if accept(cursor) {
            return Probe::Accepted(cursor);
        }
        cursor = step(cursor);
    }

    if accept(cursor) {
        return Probe::Accepted(cursor);
    }

    match fallback(cursor) {
        Some(index) => Probe::Relaxed(index),
        None => Probe::Exhausted(cursor),
    }
}

/// Linear scan for the first slot at or after `cursor` (wrapping around the
/// end of `selected`) that has not been selected yet.
pub fn first_open_slot(selected: &[bool], cursor: usize) -> Option<usize> {
    let len = selected.len();
    (0..len)
        .map(|offset| (cursor + offset) % len)
        .find(|&slot| !selected[slot])
}
