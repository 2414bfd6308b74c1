use alloc::vec::Vec;

use super::OrderedRecordSet;
use crate::compare::ById;

impl OrderedRecordSet<ById> {
    /// Creates an empty set with room for at least `capacity` records.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::OrderedRecordSet;
    ///
    /// let set = OrderedRecordSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1) plus the allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedRecordSet {
            records: Vec::with_capacity(capacity),
            comparator: ById,
        }
    }
}

impl<C> OrderedRecordSet<C> {
    /// Creates an empty set with room for at least `capacity` records, whose
    /// bound queries use `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{ByCode, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::with_capacity_and_comparator(16, ByCode);
    /// assert_eq!(set.comparator(), &ByCode);
    /// assert!(set.capacity() >= 16);
    /// ```
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        OrderedRecordSet {
            records: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Returns how many records the set can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Reserves room for at least `additional` more records.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `isize::MAX` bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.records.reserve(additional);
    }

    /// Shrinks the capacity as close to [`len`](Self::len) as possible.
    pub fn shrink_to_fit(&mut self) {
        self.records.shrink_to_fit();
    }
}
