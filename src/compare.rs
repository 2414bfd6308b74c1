use core::cmp::Ordering;

use crate::CrimeRecord;

/// The ordering used by [`lower_bound`] and [`upper_bound`].
///
/// A set always stores its records in identifier order; a comparator only
/// decides how bound queries interpret their argument. It must be a strict
/// weak ordering over [`CrimeRecord`].
///
/// Any `Fn(&CrimeRecord, &CrimeRecord) -> Ordering` is a comparator.
///
/// [`lower_bound`]: crate::OrderedRecordSet::lower_bound
/// [`upper_bound`]: crate::OrderedRecordSet::upper_bound
///
/// # Examples
///
/// ```
/// use crime_set::{CrimeRecord, OrderedRecordSet};
///
/// let by_arrest = |a: &CrimeRecord, b: &CrimeRecord| a.is_arrest().cmp(&b.is_arrest());
/// let mut set = OrderedRecordSet::with_comparator(by_arrest);
/// set.insert(CrimeRecord::new(1, "0460", "SIMPLE", false));
/// set.insert(CrimeRecord::new(2, "0460", "SIMPLE", true));
///
/// let probe = CrimeRecord::new(0, "", "", true);
/// assert_eq!(set.lower_bound(&probe).get().map(CrimeRecord::id), Some(2));
/// ```
pub trait Comparator {
    /// `true` if this ordering sorts records exactly as their identifiers do.
    ///
    /// Bound queries binary search when this holds and scan linearly
    /// otherwise, since the stored sequence is only guaranteed to be
    /// partitioned under identifier order.
    const ID_ORDERED: bool = false;

    /// Total order of `a` relative to `b`.
    fn compare(&self, a: &CrimeRecord, b: &CrimeRecord) -> Ordering;

    /// Strict "ordered before" predicate derived from [`compare`](Comparator::compare).
    fn less(&self, a: &CrimeRecord, b: &CrimeRecord) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// Orders records by identifier. This is the default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ById;

impl Comparator for ById {
    const ID_ORDERED: bool = true;

    fn compare(&self, a: &CrimeRecord, b: &CrimeRecord) -> Ordering {
        a.id().cmp(&b.id())
    }
}

/// Orders records by IUCR code, breaking ties by identifier.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ByCode;

impl Comparator for ByCode {
    fn compare(&self, a: &CrimeRecord, b: &CrimeRecord) -> Ordering {
        a.code().cmp(b.code()).then_with(|| a.id().cmp(&b.id()))
    }
}

/// Orders records by description, breaking ties by identifier.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ByDescription;

impl Comparator for ByDescription {
    fn compare(&self, a: &CrimeRecord, b: &CrimeRecord) -> Ordering {
        a.description().cmp(b.description()).then_with(|| a.id().cmp(&b.id()))
    }
}

impl<F> Comparator for F
where
    F: Fn(&CrimeRecord, &CrimeRecord) -> Ordering,
{
    fn compare(&self, a: &CrimeRecord, b: &CrimeRecord) -> Ordering {
        self(a, b)
    }
}
