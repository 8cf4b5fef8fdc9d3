use std::cmp::Ordering;
use std::fmt;

/// Total order used by a [`SortedSet`](super::SortedSet) for all positioning decisions.
pub trait Comparator<T> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders by the element type's [`Ord`] implementation. The default comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders by [`PartialOrd`], treating incomparable values (such as `NaN`) as equal.
///
/// As `NaN != NaN`, a set ordered this way never finds a `NaN` member: each
/// `insert(f64::NAN)` adds another entry and `contains(&f64::NAN)` is always false.
///
/// # Example
///
/// ```
/// use setkit::collections::SortedSet;
/// use setkit::collections::sorted_set::PartialOrder;
///
/// let set = SortedSet::from_list_with(Some([2.5, -1.0, 0.5]), PartialOrder);
/// assert_eq!(set.as_slice(), &[-1.0, 0.5, 2.5]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PartialOrder;

impl<T: PartialOrd> Comparator<T> for PartialOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if a < b {
            Ordering::Less
        } else if a > b {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Orders with a closure.
///
/// # Example
///
/// ```
/// use setkit::collections::SortedSet;
/// use setkit::collections::sorted_set::FnOrder;
///
/// let by_len = FnOrder(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let set = SortedSet::from_list_with(Some(["ccc", "a", "bb"]), by_len);
/// assert_eq!(set.as_slice(), &["a", "bb", "ccc"]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnOrder<F>(pub F);

impl<T, F> Comparator<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnOrder")
    }
}

/// Reverses another comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reverse<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Compare two possibly missing operands. A missing operand compares equal to anything.
#[inline]
pub(crate) fn compare_probe<T, C>(c: &C, a: Option<&T>, b: Option<&T>) -> Ordering
where
    C: Comparator<T> + ?Sized,
{
    match (a, b) {
        (Some(a), Some(b)) => c.compare(a, b),
        _ => Ordering::Equal,
    }
}

#[test]
fn comparator_test() {
    assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
    assert_eq!(Reverse(NaturalOrder).compare(&1, &2), Ordering::Greater);
    assert_eq!(PartialOrder.compare(&f64::NAN, &1.0), Ordering::Equal);
    assert_eq!(PartialOrder.compare(&3.0, &1.0), Ordering::Greater);
    assert_eq!(compare_probe(&NaturalOrder, Some(&1), None), Ordering::Equal);
    assert_eq!(compare_probe::<i32, _>(&NaturalOrder, None, None), Ordering::Equal);
}
