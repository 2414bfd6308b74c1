use core::ops::Index;

use super::OrderedRecordSet;
use crate::{CrimeRecord, Rank};

impl<C> OrderedRecordSet<C> {
    /// Returns the record at position `rank` in identifier order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(30, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(10, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(20, "0460", "SIMPLE", false),
    /// ]);
    /// assert_eq!(set.get_by_rank(1).map(CrimeRecord::id), Some(20));
    /// assert!(set.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<&CrimeRecord> {
        self.records.get(rank)
    }

    /// Returns the zero-based rank of the record with identifier `id`, or
    /// `None` if it is not stored.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(10, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(20, "0460", "SIMPLE", false),
    /// ]);
    /// assert_eq!(set.rank_of(20), Some(1));
    /// assert_eq!(set.rank_of(15), None);
    /// ```
    #[must_use]
    pub fn rank_of(&self, id: i64) -> Option<usize> {
        self.search(id).ok()
    }
}

/// Indexes into the set by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<C> Index<Rank> for OrderedRecordSet<C> {
    type Output = CrimeRecord;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).expect("index out of bounds")
    }
}
