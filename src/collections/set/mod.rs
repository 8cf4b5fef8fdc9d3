//! [`Set`] an unordered set that keeps its members in insertion order.

use std::collections::TryReserveError;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use super::{Container, IntoIter, Iter};

/// A set backed by a vector, with members kept in the order they were first added.
///
/// Uniqueness is enforced with a linear scan using [`PartialEq`], so the set suits
/// small collections and element types that are not ordered or hashable.
///
/// # Guide to methods
///
/// Set Creation: [`new`], [`with_capacity`], [`from_list`]
///
/// Properties: [`len`], [`is_empty`], [`contains`], [`index_of`]
///
/// Insertion: [`insert`]
///
/// Iterators: [`iter`]
///
/// [`new`]: Set::new
/// [`with_capacity`]: Set::with_capacity
/// [`from_list`]: Set::from_list
/// [`len`]: Set::len
/// [`is_empty`]: Set::is_empty
/// [`contains`]: Set::contains
/// [`index_of`]: Set::index_of
/// [`insert`]: Set::insert
/// [`iter`]: Set::iter
///
/// # Examples
///
/// ```
/// use setkit::collections::Set;
///
/// let mut set = Set::from(["a", "b", "a"]);
/// assert_eq!(set.len(), 2);
///
/// set.insert("c");
/// assert!(set.contains(&"c"));
///
/// let members: Vec<_> = set.iter().copied().collect();
/// assert_eq!(members, ["a", "b", "c"]);
/// ```
pub struct Set<T> {
    members: Vec<T>,
}

impl<T> Set<T> {
    /// Returns a new, empty `Set`.
    ///
    /// # Example
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use setkit::collections::Set;
    ///
    /// let mut set: Set<i32> = Set::new();
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Returns a new, empty `Set` with room for at least `capacity` members.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
        }
    }

    /// Returns a set holding the distinct items of `list`, if any, in iteration order.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::Set;
    ///
    /// let set = Set::from_list(Some(vec![3, 1, 3]));
    /// assert_eq!(set.as_slice(), &[3, 1]);
    ///
    /// let empty: Set<i32> = Set::from_list(None::<Vec<i32>>);
    /// assert!(empty.is_empty());
    /// ```
    pub fn from_list<I>(list: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: PartialEq,
    {
        let mut set = Self::new();
        super::for_each(list, |item, _| {
            set.insert(item);
        });
        set
    }

    /// Returns number of members in the set
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::Set;
    ///
    /// let mut v = Set::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Does the set have any members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Adds a value to the end of the set, unless an equal value is already present.
    ///
    /// Returns whether the value was newly inserted.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: PartialEq,
    {
        if self.contains(&value) {
            return false;
        }
        self.members.push(value);
        true
    }

    /// Returns `true` if the set contains a member equal to the value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Returns the position of the member equal to the value, if any.
    ///
    /// # Example
    ///
    /// ```
    /// use setkit::collections::Set;
    ///
    /// let set = Set::from(['x', 'y']);
    /// assert_eq!(set.index_of(&'y'), Some(1));
    /// assert_eq!(set.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.members.iter().position(|m| m == value)
    }

    /// Gets an iterator that visits the members in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.members)
    }

    /// The members as a slice, in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    /// Converts the set into a vector of its members, in insertion order.
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
}

impl<T: PartialEq> Container<T> for Set<T> {
    fn members(&self) -> &[T] {
        &self.members
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        Set::index_of(self, item)
    }

    fn add(&mut self, item: T) -> bool {
        self.insert(item)
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for Set<T> {
    fn from(arr: [T; N]) -> Self {
        Self::from_list(Some(arr))
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
        }
    }
}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two sets are equal if they hold equal members in the same order.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Set<T>) -> bool {
        self.members == other.members
    }
}

impl<T: Eq> Eq for Set<T> {}

impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.members.hash(state);
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_list(Some(iter))
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    #[inline]
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        iter.into_iter().for_each(move |elem| {
            self.insert(elem);
        });
    }
}

impl<'a, T: 'a + PartialEq + Copy> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the set's members in insertion order.
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.members)
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
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
impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for m in self {
            seq.serialize_element(m)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SetVisitor<T> {
    marker: PhantomData<fn() -> Set<T>>,
}

#[cfg(feature = "serde")]
impl<'de, T> Visitor<'de> for SetVisitor<T>
where
    T: Deserialize<'de> + PartialEq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Set")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut set = Set::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some(item) = access.next_element()? {
            set.insert(item);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Set<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod mytests;
