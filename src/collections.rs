pub mod set;

pub use set::Set;

pub mod sorted_set;

pub use sorted_set::{Comparator, SortedSet};

mod iter;

pub use iter::{IntoIter, Iter};

use std::fmt;

/// Operations common to [`Set`] and [`SortedSet`].
///
/// Implementors supply storage access, lookup and insertion; membership, size and
/// visiting are derived from those. Lookup is the point where the two containers
/// differ: [`Set`] scans linearly, [`SortedSet`] searches its ordered members.
pub trait Container<T> {
    /// The members in storage order.
    fn members(&self) -> &[T];

    /// Position of `item` in [`members`](Container::members), if present.
    fn index_of(&self, item: &T) -> Option<usize>;

    /// Adds `item` unless an equal member is already present. Returns `true` if it was added.
    fn add(&mut self, item: T) -> bool;

    /// Is `item` a member.
    fn has_member(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Number of members.
    fn size(&self) -> usize {
        self.members().len()
    }

    /// Calls `visitor` with each member and its position, in storage order.
    fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&T, usize),
    {
        for_each(Some(self.members()), visitor);
    }
}

/// Calls `visitor` with each item of `list` and its position.
///
/// `None` visits nothing. Any iterable works, including slices, vectors and both set types.
///
/// # Example
///
/// ```
/// use setkit::collections::{for_each, Set};
///
/// let set = Set::from(["a", "b"]);
/// let mut seen = Vec::new();
/// for_each(Some(&set), |s, i| seen.push((*s, i)));
/// assert_eq!(seen, [("a", 0), ("b", 1)]);
///
/// for_each(None::<Vec<u8>>, |_, _| unreachable!());
/// ```
pub fn for_each<I, F>(list: Option<I>, mut visitor: F)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    let Some(list) = list else { return };
    for (i, item) in list.into_iter().enumerate() {
        visitor(item, i);
    }
}

/// Error returned by [`SortedSet::from_sorted_vec`] when the values are not strictly ascending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnorderedError {
    /// Position of the first value that is not greater than its predecessor.
    pub index: usize,
}

impl fmt::Display for UnorderedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value at index {} is not properly ordered relative to its predecessor",
            self.index
        )
    }
}

impl std::error::Error for UnorderedError {}
