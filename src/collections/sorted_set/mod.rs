//! [`SortedSet`] a set that keeps its members ordered by a [`Comparator`].
//!
//! Members live in a single vector kept in comparator order. Lookup and insertion share
//! one step-halving search (see [`SortedSet::probe_path`]) which reports either the
//! position of an equal member or the position where a new member belongs.
//!
//! Two notions of sameness are involved. Positioning uses the comparator, while a
//! member only counts as present when it is also [`PartialEq`] equal to the probe.
//! A value that compares equal to a member but is not `==` to it is reported absent,
//! and [`insert`](SortedSet::insert) places it next to its comparator-equal peers.
//! Lookup checks every such peer, so no two members are ever `==`.
//!
//!# Features
//!
//! - `serde` : enables serialisation of [`SortedSet`] via serde crate. Deserialisation
//!   appends directly while the input is ascending.

use std::collections::TryReserveError;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use super::{Container, IntoIter, Iter, UnorderedError};

mod comparator;
pub use comparator::{Comparator, FnOrder, NaturalOrder, PartialOrder, Reverse};

mod locate;
pub use locate::ProbePath;

/// An ordered set based on a sorted vector.
///
/// # Guide to methods
///
/// Set Creation: [`new`], [`with_comparator`], [`from_list`], [`from_list_with`],
/// [`from_sorted_vec`]
///
/// Properties: [`len`], [`is_empty`], [`contains`], [`index_of`], [`insertion_point`],
/// [`comparator`]
///
/// Insertion: [`insert`]
///
/// Retrieve: [`get`], [`first`], [`last`]
///
/// Iterators: [`iter`]
///
/// Diagnostics: [`probe_path`]
///
/// [`new`]: SortedSet::new
/// [`with_comparator`]: SortedSet::with_comparator
/// [`from_list`]: SortedSet::from_list
/// [`from_list_with`]: SortedSet::from_list_with
/// [`from_sorted_vec`]: SortedSet::from_sorted_vec
/// [`len`]: SortedSet::len
/// [`is_empty`]: SortedSet::is_empty
/// [`contains`]: SortedSet::contains
/// [`index_of`]: SortedSet::index_of
/// [`insertion_point`]: SortedSet::insertion_point
/// [`comparator`]: SortedSet::comparator
/// [`insert`]: SortedSet::insert
/// [`get`]: SortedSet::get
/// [`first`]: SortedSet::first
/// [`last`]: SortedSet::last
/// [`iter`]: SortedSet::iter
/// [`probe_path`]: SortedSet::probe_path
///
/// # Examples
///
/// ```
/// use setkit::collections::SortedSet;
///
/// let mut set = SortedSet::from([5, 3, 8, 1]);
/// assert_eq!(set.as_slice(), &[1, 3, 5, 8]);
///
/// set.insert(3);
/// assert_eq!(set.len(), 4);
///
/// set.insert(0);
/// assert_eq!(set.as_slice(), &[0, 1, 3, 5, 8]);
/// assert!(set.contains(&8));
/// assert!(!set.contains(&9));
/// ```
///
/// A different order is chosen with the comparator type parameter:
///
/// ```
/// use setkit::collections::SortedSet;
/// use setkit::collections::sorted_set::{NaturalOrder, Reverse};
///
/// let set = SortedSet::from_list_with(Some(["pear", "apple", "fig"]), Reverse(NaturalOrder));
/// assert_eq!(set.as_slice(), &["pear", "fig", "apple"]);
/// ```
pub struct SortedSet<T, C = NaturalOrder> {
    members: Vec<T>,
    cmp: C,
}

impl<T> SortedSet<T> {
    /// Returns a new, empty `SortedSet` ordered by [`Ord`].
    ///
    /// # Example
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use setkit::collections::SortedSet;
    ///
    /// let mut set: SortedSet<i32> = SortedSet::new();
    /// ```
    #[must_use]
    pub const fn new() -> SortedSet<T> {
        SortedSet {
            members: Vec::new(),
            cmp: NaturalOrder,
        }
    }

    /// Returns a set holding the distinct items of `list`, if any, ordered by [`Ord`].
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let set = SortedSet::from_list(Some(vec![2, 9, 2, 4]));
    /// assert_eq!(set.as_slice(), &[2, 4, 9]);
    /// ```
    pub fn from_list<I>(list: Option<I>) -> SortedSet<T>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        Self::from_list_with(list, NaturalOrder)
    }
}

impl<T, C> SortedSet<T, C> {
    /// Returns a new, empty set ordered by `cmp`.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    /// use setkit::collections::sorted_set::FnOrder;
    ///
    /// let mut set = SortedSet::with_comparator(FnOrder(|a: &i32, b: &i32| b.cmp(a)));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&2));
    /// ```
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        Self {
            members: Vec::new(),
            cmp,
        }
    }

    /// Returns a set ordered by `cmp` holding the distinct items of `list`, if any.
    pub fn from_list_with<I>(list: Option<I>, cmp: C) -> Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
        C: Comparator<T>,
    {
        let mut set = Self::with_comparator(cmp);
        super::for_each(list, |item, _| {
            set.insert(item);
        });
        set
    }

    /// Builds a set directly from a vector that is already strictly ascending under `cmp`.
    ///
    /// # Errors
    ///
    /// Returns [`UnorderedError`] naming the first value that is not greater than its predecessor.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    /// use setkit::collections::sorted_set::NaturalOrder;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![1, 2, 4], NaturalOrder).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// let err = SortedSet::from_sorted_vec(vec![1, 4, 4], NaturalOrder).unwrap_err();
    /// assert_eq!(err.index, 2);
    /// ```
    pub fn from_sorted_vec(members: Vec<T>, cmp: C) -> Result<Self, UnorderedError>
    where
        C: Comparator<T>,
    {
        if let Some(w) = members
            .windows(2)
            .position(|w| cmp.compare(&w[0], &w[1]).is_ge())
        {
            return Err(UnorderedError { index: w + 1 });
        }
        Ok(Self { members, cmp })
    }

    /// Returns number of members in the set
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let mut v = SortedSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Does the set have any members
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let mut v = SortedSet::new();
    /// assert!(v.is_empty());
    /// v.insert(1);
    /// assert!(!v.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The comparator that orders the set.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Adds a value to the set at its ordered position, unless the value is already present.
    ///
    /// Returns whether the value was newly inserted.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: PartialEq,
        C: Comparator<T>,
    {
        match self.insertion_point(&value) {
            Some(i) => {
                self.members.insert(i, value);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the set contains the value.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let set = SortedSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
        C: Comparator<T>,
    {
        self.index_of(value).is_some()
    }

    /// Returns the position of the value in the set, if present.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let set = SortedSet::from([30, 10, 20]);
    /// assert_eq!(set.index_of(&20), Some(1));
    /// assert_eq!(set.index_of(&25), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
        C: Comparator<T>,
    {
        locate::locate(&self.members, value, &self.cmp).ok()
    }

    /// Returns the position where the value would be inserted, or `None` if it is already present.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let set = SortedSet::from([10, 20, 30]);
    /// assert_eq!(set.insertion_point(&25), Some(2));
    /// assert_eq!(set.insertion_point(&20), None);
    /// ```
    pub fn insertion_point(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
        C: Comparator<T>,
    {
        locate::locate(&self.members, value, &self.cmp).err()
    }

    /// Runs the search for `value` and returns the probe positions it visited along with the outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let set: SortedSet<u32> = (0..1024).collect();
    /// let path = set.probe_path(&700);
    /// assert_eq!(path.result(), Ok(700));
    /// assert!(path.len() <= 12);
    /// ```
    pub fn probe_path(&self, value: &T) -> ProbePath
    where
        T: PartialEq,
        C: Comparator<T>,
    {
        locate::locate_traced(&self.members, value, &self.cmp)
    }

    /// Returns a reference to the member at `index` in order, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.members.get(index)
    }

    /// Returns a reference to the first member, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// assert_eq!(set.first(), None);
    /// set.insert(9);
    /// set.insert(4);
    /// assert_eq!(set.first(), Some(&4));
    /// assert_eq!(set.last(), Some(&9));
    /// ```
    pub fn first(&self) -> Option<&T> {
        self.members.first()
    }

    /// Returns a reference to the last member, if any.
    pub fn last(&self) -> Option<&T> {
        self.members.last()
    }

    /// Gets an iterator that visits the members in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.members)
    }

    /// The members as a slice, in ascending order.
    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    /// Converts the set into a vector of its members, in ascending order.
    pub fn into_vec(self) -> Vec<T> {
        self.members
    }

    /// Reserves capacity for at least `additional` more members.
    pub fn reserve(&mut self, additional: usize) {
        self.members.reserve(additional);
    }

    /// Tries to reserve capacity for at least `additional` more members.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity overflows or the allocator reports a failure.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.members.try_reserve(additional)
    }

    #[cfg(test)]
    pub(crate) fn check(&self)
    where
        C: Comparator<T>,
    {
        for w in self.members.windows(2) {
            assert!(self.cmp.compare(&w[0], &w[1]).is_le());
        }
    }
} // end impl SortedSet

impl<T: PartialEq, C: Comparator<T>> Container<T> for SortedSet<T, C> {
    fn members(&self) -> &[T] {
        &self.members
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        SortedSet::index_of(self, item)
    }

    fn add(&mut self, item: T) -> bool {
        self.insert(item)
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from_list(Some(arr))
    }
}

impl<T, C: Default> Default for SortedSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone> Clone for SortedSet<T, C> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: Debug, C> Debug for SortedSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for SortedSet<T, C> {
    fn eq(&self, other: &SortedSet<T, C>) -> bool {
        self.members == other.members
    }
}

impl<T: Eq, C> Eq for SortedSet<T, C> {}

impl<T: Hash, C> Hash for SortedSet<T, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.members.hash(state);
    }
}

impl<T: PartialEq, C: Comparator<T> + Default> FromIterator<T> for SortedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list_with(Some(iter), C::default())
    }
}

impl<T: PartialEq, C: Comparator<T>> Extend<T> for SortedSet<T, C> {
    #[inline]
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        iter.into_iter().for_each(move |elem| {
            self.insert(elem);
        });
    }
}

impl<'a, T: 'a + PartialEq + Copy, C: Comparator<T>> Extend<&'a T> for SortedSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, C> IntoIterator for SortedSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the set's members in ascending order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.members)
    }
}

impl<'a, T, C> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
use serde::{
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

#[cfg(feature = "serde")]
use std::marker::PhantomData;

#[cfg(feature = "serde")]
impl<T: Serialize, C> Serialize for SortedSet<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for m in self {
            seq.serialize_element(m)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<T, C> {
    marker: PhantomData<fn() -> SortedSet<T, C>>,
}

#[cfg(feature = "serde")]
impl<'de, T, C> Visitor<'de> for SortedSetVisitor<T, C>
where
    T: Deserialize<'de> + PartialEq,
    C: Comparator<T> + Default,
{
    type Value = SortedSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("SortedSet")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = SortedSet::with_comparator(C::default());
        set.reserve(access.size_hint().unwrap_or(0).min(4096));
        // Append while input ascends, then fall back to searching.
        while let Some(item) = access.next_element()? {
            if let Some(last) = set.members.last() {
                if set.cmp.compare(last, &item).is_ge() {
                    set.insert(item);
                    break;
                }
            }
            set.members.push(item);
        }
        while let Some(item) = access.next_element()? {
            set.insert(item);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> Deserialize<'de> for SortedSet<T, C>
where
    T: Deserialize<'de> + PartialEq,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(all(test, not(miri), feature = "cap"))]
#[global_allocator]
static ALLOCATOR: cap::Cap<std::alloc::System> =
    cap::Cap::new(std::alloc::System, usize::MAX);

#[cfg(test)]
fn print_memory() {
    #[cfg(all(test, not(miri), feature = "cap"))]
    println!("Memory allocated: {} bytes", ALLOCATOR.allocated());
}

#[cfg(all(test, not(miri), not(feature = "cap")))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(test)]
mod mytests;
