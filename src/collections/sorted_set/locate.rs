//! Step-halving search over ordered members.
//!
//! Rather than recomputing a midpoint, the probe moves by a step that starts at the
//! length and is halved (and rounded) each iteration, forwards while the probed member
//! orders before the target and backwards otherwise. The search stops on an exact
//! match, once the step falls to one half or below, or as soon as the probe brackets
//! the insertion boundary (the previous member orders before the target and the probed
//! member does not).

use super::comparator::{compare_probe, Comparator};
use arrayvec::ArrayVec;
use std::cmp::Ordering;

/// Upper bound on loop iterations: the step halves from `len` down to one half.
pub(crate) const MAX_STEPS: usize = usize::BITS as usize + 2;

type StepVec = ArrayVec<isize, MAX_STEPS>;

/// Member at probe position `i`, `None` when `i` is out of range.
#[inline]
fn at<T>(items: &[T], i: isize) -> Option<&T> {
    usize::try_from(i).ok().and_then(|i| items.get(i))
}

/// Locate `item` in `items`, which must be ordered by `c`.
///
/// Returns `Ok(index)` of a member equal (by [`PartialEq`]) to `item`, otherwise
/// `Err(index)` where `item` may be inserted keeping `items` ordered. When the probe
/// stops without an exact match, members tied with `item` under `c` are checked too.
#[inline]
pub(crate) fn locate<T, C>(items: &[T], item: &T, c: &C) -> Result<usize, usize>
where
    T: PartialEq,
    C: Comparator<T> + ?Sized,
{
    search(items, item, c, |_| {})
}

/// Same as [`locate`], also recording each probe position visited.
pub(crate) fn locate_traced<T, C>(items: &[T], item: &T, c: &C) -> ProbePath
where
    T: PartialEq,
    C: Comparator<T> + ?Sized,
{
    let mut steps = StepVec::new();
    let result = search(items, item, c, |i| steps.push(i));
    ProbePath { steps, result }
}

fn search<T, C, P>(items: &[T], item: &T, c: &C, mut probe: P) -> Result<usize, usize>
where
    T: PartialEq,
    C: Comparator<T> + ?Sized,
    P: FnMut(isize),
{
    let n = items.len();
    if n == 0 {
        return Err(0);
    }
    let end = isize::try_from(n).unwrap_or(isize::MAX);
    let target = Some(item);
    let hit = |i: isize| at(items, i).is_some_and(|m| m == item);

    let mut i: isize = 0;
    let mut d = n as f64;
    if c.compare(item, &items[0]) == Ordering::Less {
        d = 0.0;
        i = 0;
    }
    if c.compare(item, &items[n - 1]) == Ordering::Greater {
        d = 0.0;
        i = end;
    }
    while !hit(i) && d > 0.5 {
        d /= 2.0;
        let step = d.round() as isize;
        if compare_probe(c, at(items, i), target) == Ordering::Less {
            i += step;
        } else {
            i -= step;
        }
        probe(i);
        if i > 0
            && compare_probe(c, at(items, i - 1), target) == Ordering::Less
            && compare_probe(c, at(items, i), target) != Ordering::Less
        {
            d = 0.0;
        }
    }

    let found = hit(i);
    // An inconsistent comparator can walk the probe off either end.
    let i = i.clamp(0, end) as usize;
    if found {
        return Ok(i);
    }
    match tied_match(items, item, c, i) {
        Some(j) => Ok(j),
        None => Err(i),
    }
}

/// Find a member `==` to `item` among the run of members tied with it under `c`.
///
/// The run is contiguous and touches position `i`, the insertion point. Without ties
/// this costs at most two comparisons.
fn tied_match<T, C>(items: &[T], item: &T, c: &C, i: usize) -> Option<usize>
where
    T: PartialEq,
    C: Comparator<T> + ?Sized,
{
    let tied = |m: &T| c.compare(m, item) == Ordering::Equal;
    let before = items[..i]
        .iter()
        .rev()
        .take_while(|&m| tied(m))
        .position(|m| m == item)
        .map(|k| i - 1 - k);
    before.or_else(|| {
        items[i..]
            .iter()
            .take_while(|&m| tied(m))
            .position(|m| m == item)
            .map(|k| i + k)
    })
}

/// Record of one search, returned by [`SortedSet::probe_path`](super::SortedSet::probe_path).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbePath {
    steps: StepVec,
    result: Result<usize, usize>,
}

impl ProbePath {
    /// Probe position after each step, in order. A position may lie outside the
    /// members when the comparator disagrees with [`PartialEq`].
    pub fn steps(&self) -> &[isize] {
        &self.steps
    }

    /// Number of steps taken.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// No steps were needed (empty set, a value outside the range of the members,
    /// or a match at the first position).
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Outcome of the search: `Ok(index)` if found, `Err(insertion point)` otherwise.
    pub fn result(&self) -> Result<usize, usize> {
        self.result
    }
}
