use alloc::vec::{self, Vec};
use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::CrimeRecord;
use crate::compare::{ById, Comparator};
use crate::error::{InsertError, InvariantViolation};
use crate::filter::{All, Arrested, DescriptionMatch, Filter};

mod capacity;
mod cursor;
mod order_statistic;

pub use cursor::{ArrestCursor, Cursor, CursorMut, DescriptionCursor};

/// An ordered set of [`CrimeRecord`]s, unique by identifier.
///
/// Records are stored in a single vector sorted strictly ascending by
/// [`CrimeRecord::id`], and every stored identifier is positive. Lookups and
/// insertion points are found by binary search; insertion and removal shift
/// the tail of the vector.
///
/// The comparator `C` only affects [`lower_bound`](Self::lower_bound) and
/// [`upper_bound`](Self::upper_bound). It never changes how records are
/// stored, so a set can answer bound queries along the IUCR code or the
/// description while still being keyed by identifier.
///
/// Cursors borrow the set, so the borrow checker rules out using a cursor
/// across a later insertion or removal.
///
/// # Examples
///
/// ```
/// use crime_set::{CrimeRecord, OrderedRecordSet};
///
/// let mut chicago = OrderedRecordSet::new();
/// chicago.insert(CrimeRecord::new(50, "0486", "DOMESTIC BATTERY SIMPLE", true));
/// chicago.insert(CrimeRecord::new(10, "0460", "SIMPLE", false));
/// chicago.insert(CrimeRecord::new(30, "0460", "SIMPLE", true));
///
/// // Duplicates are turned away.
/// assert!(!chicago.insert(CrimeRecord::new(30, "0820", "$500 AND UNDER", false)));
///
/// let ids: Vec<_> = chicago.iter().map(CrimeRecord::id).collect();
/// assert_eq!(ids, [10, 30, 50]);
///
/// let battery = chicago.find_by_description("BATTERY");
/// assert_eq!(battery.len(), 1);
///
/// let arrested: Vec<_> = chicago.arrests().map(CrimeRecord::id).collect();
/// assert_eq!(arrested, [30, 50]);
/// ```
pub struct OrderedRecordSet<C = ById> {
    records: Vec<CrimeRecord>,
    comparator: C,
}

/// An iterator over the records of an `OrderedRecordSet` in identifier order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedRecordSet`].
///
/// [`iter`]: OrderedRecordSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a> {
    inner: slice::Iter<'a, CrimeRecord>,
}

/// An owning iterator over the records of an `OrderedRecordSet` in identifier order.
pub struct IntoIter {
    inner: vec::IntoIter<CrimeRecord>,
}

/// An iterator over the records of an `OrderedRecordSet` that pass a [`Filter`].
///
/// This `struct` is created by [`OrderedRecordSet::arrests`],
/// [`OrderedRecordSet::description_matches`], [`OrderedRecordSet::filtered`]
/// and [`Cursor::records_until`].
///
/// # Examples
///
/// ```
/// use crime_set::{CrimeRecord, OrderedRecordSet};
///
/// let set = OrderedRecordSet::from([
///     CrimeRecord::new(1, "0460", "SIMPLE", false),
///     CrimeRecord::new(2, "0460", "SIMPLE", true),
///     CrimeRecord::new(3, "0486", "DOMESTIC BATTERY SIMPLE", true),
/// ]);
///
/// let mut arrests = set.arrests();
/// assert_eq!(arrests.next().map(CrimeRecord::id), Some(2));
/// assert_eq!(arrests.next_back().map(CrimeRecord::id), Some(3));
/// assert!(arrests.next().is_none());
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filtered<'a, F> {
    inner: slice::Iter<'a, CrimeRecord>,
    filter: F,
}

/// First violation of "positive and strictly ascending identifiers" in
/// `records`.
fn check_records(records: &[CrimeRecord]) -> Result<(), InvariantViolation> {
    let mut previous: Option<i64> = None;
    for (index, record) in records.iter().enumerate() {
        let id = record.id();
        if id <= 0 {
            return Err(InvariantViolation::NonPositiveId {
                index,
                id,
            });
        }
        if let Some(previous) = previous
            && previous >= id
        {
            return Err(InvariantViolation::OutOfOrder {
                index,
                previous,
                current: id,
            });
        }
        previous = Some(id);
    }
    Ok(())
}

/// Panics if `records` break the set's invariants. Only compiled in with
/// debug assertions or the `check-invariants` feature.
#[inline]
fn assert_invariants(records: &[CrimeRecord]) {
    #[cfg(any(debug_assertions, feature = "check-invariants"))]
    if let Err(violation) = check_records(records) {
        panic!("[invariants] OrderedRecordSet: {violation}");
    }
    #[cfg(not(any(debug_assertions, feature = "check-invariants")))]
    let _ = records;
}

impl OrderedRecordSet<ById> {
    /// Makes a new, empty `OrderedRecordSet` whose bound queries use
    /// identifier order.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::OrderedRecordSet;
    ///
    /// let set = OrderedRecordSet::new();
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Self {
        OrderedRecordSet {
            records: Vec::new(),
            comparator: ById,
        }
    }
}

impl<C> OrderedRecordSet<C> {
    /// Makes a new, empty `OrderedRecordSet` whose bound queries use `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{ByCode, CrimeRecord, OrderedRecordSet};
    ///
    /// let mut set = OrderedRecordSet::with_comparator(ByCode);
    /// set.insert(CrimeRecord::new(1, "0460", "SIMPLE", false));
    /// set.insert(CrimeRecord::new(2, "0820", "$500 AND UNDER", false));
    ///
    /// // Storage is still by id; only the bound query looks at the code.
    /// let probe = CrimeRecord::new(0, "0500", "", false);
    /// assert_eq!(set.lower_bound(&probe).get().map(CrimeRecord::id), Some(2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        OrderedRecordSet {
            records: Vec::new(),
            comparator,
        }
    }

    /// Returns a reference to the comparator used by bound queries.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of records in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let mut set = OrderedRecordSet::new();
    /// assert_eq!(set.len(), 0);
    /// set.insert(CrimeRecord::new(1, "0460", "SIMPLE", false));
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set contains no records.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the stored records as a slice in identifier order.
    #[must_use]
    pub fn as_slice(&self) -> &[CrimeRecord] {
        &self.records
    }

    /// Verifies the representation invariants: every identifier is positive
    /// and identifiers are strictly ascending.
    ///
    /// Returns the first violation found. A well-behaved set always returns
    /// `Ok(())`; this exists so tests and paranoid callers can audit it.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`] describing the first offending record.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn check_rep(&self) -> Result<(), InvariantViolation> {
        check_records(&self.records)
    }

    #[inline]
    fn assert_invariants(&self) {
        assert_invariants(&self.records);
    }

    /// Binary search by identifier: `Ok(index)` if present, otherwise
    /// `Err(insertion point)`.
    #[inline]
    fn search(&self, id: i64) -> Result<usize, usize> {
        self.records.binary_search_by(|record| record.id().cmp(&id))
    }

    /// Returns `true` if a record with identifier `id` is stored.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.search(id).is_ok()
    }

    /// Returns the record with identifier `id`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([CrimeRecord::new(12, "0460", "SIMPLE", false)]);
    /// assert_eq!(set.get(12).map(CrimeRecord::code), Some("0460"));
    /// assert!(set.get(13).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&CrimeRecord> {
        self.search(id).ok().map(|index| &self.records[index])
    }

    /// Returns the record with the smallest identifier.
    #[must_use]
    pub fn first(&self) -> Option<&CrimeRecord> {
        self.records.first()
    }

    /// Returns the record with the largest identifier.
    #[must_use]
    pub fn last(&self) -> Option<&CrimeRecord> {
        self.records.last()
    }

    /// Returns a cursor at the record with identifier `id`, or the
    /// [`end`](Self::end) cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([CrimeRecord::new(12345, "0460", "SIMPLE", false)]);
    /// assert!(set.find(12345) != set.end());
    /// assert!(set.find(54321) == set.end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn find(&self, id: i64) -> Cursor<'_> {
        let index = self.search(id).unwrap_or(self.records.len());
        Cursor::at(&self.records, index, All)
    }

    /// Like [`find`](Self::find), keyed by `record.id()`. The other fields of
    /// `record` are ignored.
    pub fn find_record(&self, record: &CrimeRecord) -> Cursor<'_> {
        self.find(record.id())
    }

    /// Read-write form of [`find`](Self::find).
    pub fn find_mut(&mut self, id: i64) -> CursorMut<'_> {
        let index = self.search(id).unwrap_or(self.records.len());
        CursorMut::at(&mut self.records, index, All)
    }

    /// Read-write form of [`find_record`](Self::find_record).
    pub fn find_record_mut(&mut self, record: &CrimeRecord) -> CursorMut<'_> {
        self.find_mut(record.id())
    }

    /// Adds a record to the set.
    ///
    /// Returns `false`, leaving the set untouched, if a record with the same
    /// identifier is already stored or the identifier is not positive.
    /// Use [`try_insert`](Self::try_insert) to learn which.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let mut set = OrderedRecordSet::new();
    ///
    /// assert_eq!(set.insert(CrimeRecord::new(2, "0460", "SIMPLE", false)), true);
    /// assert_eq!(set.insert(CrimeRecord::new(2, "0460", "SIMPLE", false)), false);
    /// assert_eq!(set.insert(CrimeRecord::new(0, "0460", "SIMPLE", false)), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) search plus O(n) to shift the tail.
    pub fn insert(&mut self, record: CrimeRecord) -> bool {
        self.try_insert(record).is_ok()
    }

    /// Adds a record to the set, returning the rank it was stored at.
    ///
    /// # Errors
    ///
    /// - [`InsertError::NonPositiveId`] if `record.id() <= 0`.
    /// - [`InsertError::DuplicateId`] if the identifier is already stored.
    ///
    /// The set is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, InsertError, OrderedRecordSet};
    ///
    /// let mut set = OrderedRecordSet::new();
    /// assert_eq!(set.try_insert(CrimeRecord::new(20, "0460", "SIMPLE", false)), Ok(0));
    /// assert_eq!(set.try_insert(CrimeRecord::new(10, "0460", "SIMPLE", false)), Ok(0));
    /// assert_eq!(
    ///     set.try_insert(CrimeRecord::new(20, "0820", "$500 AND UNDER", true)),
    ///     Err(InsertError::DuplicateId(20))
    /// );
    /// ```
    pub fn try_insert(&mut self, record: CrimeRecord) -> Result<usize, InsertError> {
        let id = record.id();
        if id <= 0 {
            log::trace!("rejecting record with non-positive id {id}");
            return Err(InsertError::NonPositiveId(id));
        }
        match self.search(id) {
            Ok(_) => {
                log::trace!("rejecting duplicate record id {id}");
                Err(InsertError::DuplicateId(id))
            }
            Err(index) => {
                self.records.insert(index, record);
                self.assert_invariants();
                Ok(index)
            }
        }
    }

    /// Removes the record with identifier `id`. Returns whether it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let mut set = OrderedRecordSet::from([CrimeRecord::new(2, "0460", "SIMPLE", false)]);
    /// assert_eq!(set.remove(2), true);
    /// assert_eq!(set.remove(2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) search plus O(n) to shift the tail.
    pub fn remove(&mut self, id: i64) -> bool {
        self.take(id).is_some()
    }

    /// Removes the record whose identifier equals `record.id()`. The other
    /// fields of `record` are ignored.
    pub fn remove_record(&mut self, record: &CrimeRecord) -> bool {
        self.remove(record.id())
    }

    /// Removes and returns the record with identifier `id`, if any.
    pub fn take(&mut self, id: i64) -> Option<CrimeRecord> {
        match self.search(id) {
            Ok(index) => {
                let record = self.records.remove(index);
                self.assert_invariants();
                Some(record)
            }
            Err(_) => {
                log::trace!("no record with id {id} to remove");
                None
            }
        }
    }

    /// Retains only the records for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let mut set = OrderedRecordSet::from([
    ///     CrimeRecord::new(1, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(2, "0460", "SIMPLE", true),
    /// ]);
    /// set.retain(CrimeRecord::is_arrest);
    /// assert_eq!(set.iter().map(CrimeRecord::id).collect::<Vec<_>>(), [2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&CrimeRecord) -> bool,
    {
        self.records.retain(|record| f(record));
        self.assert_invariants();
    }

    /// Clears the set, removing all records. Keeps the allocated capacity.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns the records whose IUCR code equals `code`, as a new set.
    ///
    /// The new set carries a clone of this set's comparator. An empty set
    /// means nothing matched.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(1, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(2, "0820", "$500 AND UNDER", false),
    ///     CrimeRecord::new(3, "0486", "DOMESTIC BATTERY SIMPLE", true),
    /// ]);
    /// let simple = set.find_by_code("0460");
    /// assert_eq!(simple.len(), 1);
    /// assert_eq!(set.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Self
    where
        C: Clone,
    {
        let found = self.sub_collection(|record: &CrimeRecord| record.code() == code);
        log::debug!("find_by_code({code:?}) matched {} of {} records", found.len(), self.len());
        found
    }

    /// Returns the records whose description contains `text`, as a new set.
    ///
    /// Matching is exact, case-sensitive substring containment. An empty
    /// `text` matches every record.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(1, "0486", "DOMESTIC BATTERY SIMPLE", false),
    ///     CrimeRecord::new(2, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(3, "0820", "$500 AND UNDER", false),
    /// ]);
    /// assert_eq!(set.find_by_description("SIMPLE").len(), 2);
    /// assert!(set.find_by_description("simple").is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n · |description|)
    #[must_use]
    pub fn find_by_description(&self, text: &str) -> Self
    where
        C: Clone,
    {
        let found = self.sub_collection(DescriptionMatch::new(text));
        log::debug!("find_by_description({text:?}) matched {} of {} records", found.len(), self.len());
        found
    }

    /// Returns the records where an arrest was made, as a new set.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(1, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(2, "0486", "DOMESTIC BATTERY SIMPLE", true),
    ///     CrimeRecord::new(3, "0820", "$500 AND UNDER", true),
    /// ]);
    /// let arrests = set.find_arrests();
    /// assert_eq!(arrests.iter().map(CrimeRecord::id).collect::<Vec<_>>(), [2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn find_arrests(&self) -> Self
    where
        C: Clone,
    {
        self.sub_collection(Arrested)
    }

    /// A single forward scan keeps identifier order, so the copied records
    /// satisfy the invariants without re-sorting.
    fn sub_collection<F: Filter>(&self, filter: F) -> Self
    where
        C: Clone,
    {
        let found = OrderedRecordSet {
            records: self.filtered(filter).cloned().collect(),
            comparator: self.comparator.clone(),
        };
        found.assert_invariants();
        found
    }

    /// Gets an iterator that visits the records in ascending identifier order.
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; O(1) per step.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Gets an iterator over the records that pass `filter`, in identifier order.
    pub fn filtered<F: Filter>(&self, filter: F) -> Filtered<'_, F> {
        Filtered {
            inner: self.records.iter(),
            filter,
        }
    }

    /// Gets an iterator over the records where an arrest was made.
    pub fn arrests(&self) -> Filtered<'_, Arrested> {
        self.filtered(Arrested)
    }

    /// Gets an iterator over the records whose description contains `text`.
    pub fn description_matches<'p>(&self, text: &'p str) -> Filtered<'_, DescriptionMatch<'p>> {
        self.filtered(DescriptionMatch::new(text))
    }

    /// Returns a cursor at the first record, or at the end if the set is empty.
    pub fn begin(&self) -> Cursor<'_> {
        self.begin_filtered(All)
    }

    /// Returns the past-the-end cursor.
    pub fn end(&self) -> Cursor<'_> {
        self.end_filtered(All)
    }

    /// Returns a cursor at the first record that passes `filter`, or at the
    /// end if none does.
    pub fn begin_filtered<F: Filter>(&self, filter: F) -> Cursor<'_, F> {
        Cursor::at(&self.records, 0, filter)
    }

    /// Returns the past-the-end cursor for `filter`.
    pub fn end_filtered<F: Filter>(&self, filter: F) -> Cursor<'_, F> {
        Cursor::at(&self.records, self.records.len(), filter)
    }

    /// Returns a cursor at the first record where an arrest was made.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(1, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(2, "0460", "SIMPLE", true),
    /// ]);
    /// let cursor = set.arrest_begin();
    /// assert_eq!(cursor.get().map(CrimeRecord::id), Some(2));
    /// ```
    pub fn arrest_begin(&self) -> ArrestCursor<'_> {
        self.begin_filtered(Arrested)
    }

    /// Returns the past-the-end cursor for [`arrest_begin`](Self::arrest_begin).
    pub fn arrest_end(&self) -> ArrestCursor<'_> {
        self.end_filtered(Arrested)
    }

    /// Returns a cursor at the first record whose description contains `text`.
    pub fn description_begin<'p>(&self, text: &'p str) -> DescriptionCursor<'_, 'p> {
        self.begin_filtered(DescriptionMatch::new(text))
    }

    /// Returns the past-the-end cursor for [`description_begin`](Self::description_begin).
    pub fn description_end<'p>(&self, text: &'p str) -> DescriptionCursor<'_, 'p> {
        self.end_filtered(DescriptionMatch::new(text))
    }

    /// Read-write form of [`begin`](Self::begin).
    pub fn begin_mut(&mut self) -> CursorMut<'_> {
        CursorMut::at(&mut self.records, 0, All)
    }

    /// Read-write cursor at the first record that passes `filter`.
    pub fn begin_filtered_mut<F: Filter>(&mut self, filter: F) -> CursorMut<'_, F> {
        CursorMut::at(&mut self.records, 0, filter)
    }

    /// Read-write form of [`end`](Self::end).
    pub fn end_mut(&mut self) -> CursorMut<'_> {
        let len = self.records.len();
        CursorMut::at(&mut self.records, len, All)
    }
}

impl<C: Comparator> OrderedRecordSet<C> {
    /// Position of the first record `e` for which `comparator.less(e, x)` is false.
    fn lower_bound_index(&self, x: &CrimeRecord) -> usize {
        let cmp = &self.comparator;
        if C::ID_ORDERED {
            self.records.partition_point(|e| cmp.less(e, x))
        } else {
            self.records.iter().position(|e| !cmp.less(e, x)).unwrap_or(self.records.len())
        }
    }

    /// Position of the first record `e` for which `comparator.less(x, e)` is true.
    fn upper_bound_index(&self, x: &CrimeRecord) -> usize {
        let cmp = &self.comparator;
        if C::ID_ORDERED {
            self.records.partition_point(|e| !cmp.less(x, e))
        } else {
            self.records.iter().position(|e| cmp.less(x, e)).unwrap_or(self.records.len())
        }
    }

    /// Returns a cursor at the first record that is not ordered before `x`
    /// under the set's comparator, or the end cursor if every record is.
    ///
    /// With a comparator that agrees with identifier order (such as
    /// [`ById`]) this is a binary search. Any other comparator is applied by
    /// a forward scan, and the result is the first record in identifier
    /// order that satisfies the condition.
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
    /// let probe = CrimeRecord::new(15, "", "", false);
    /// assert_eq!(set.lower_bound(&probe).get().map(CrimeRecord::id), Some(20));
    ///
    /// let probe = CrimeRecord::new(20, "", "", false);
    /// assert_eq!(set.lower_bound(&probe).get().map(CrimeRecord::id), Some(20));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) for identifier-ordered comparators, O(n) otherwise.
    pub fn lower_bound(&self, x: &CrimeRecord) -> Cursor<'_> {
        Cursor::at(&self.records, self.lower_bound_index(x), All)
    }

    /// Returns a cursor at the first record ordered strictly after `x` under
    /// the set's comparator, or the end cursor if there is none.
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
    /// let probe = CrimeRecord::new(10, "", "", false);
    /// assert_eq!(set.upper_bound(&probe).get().map(CrimeRecord::id), Some(20));
    ///
    /// let probe = CrimeRecord::new(20, "", "", false);
    /// assert!(set.upper_bound(&probe) == set.end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) for identifier-ordered comparators, O(n) otherwise.
    pub fn upper_bound(&self, x: &CrimeRecord) -> Cursor<'_> {
        Cursor::at(&self.records, self.upper_bound_index(x), All)
    }

    /// Read-write form of [`lower_bound`](Self::lower_bound).
    pub fn lower_bound_mut(&mut self, x: &CrimeRecord) -> CursorMut<'_> {
        let index = self.lower_bound_index(x);
        CursorMut::at(&mut self.records, index, All)
    }

    /// Read-write form of [`upper_bound`](Self::upper_bound).
    pub fn upper_bound_mut(&mut self, x: &CrimeRecord) -> CursorMut<'_> {
        let index = self.upper_bound_index(x);
        CursorMut::at(&mut self.records, index, All)
    }
}

impl<C: Default> OrderedRecordSet<C> {
    /// Builds a set from the records in the half-open cursor range
    /// `[first, last)`, as if each one were passed to [`insert`](Self::insert).
    ///
    /// Only records accepted by `first`'s filter are taken.
    ///
    /// # Panics
    ///
    /// Panics if the cursors point into different sets, or if `first` is
    /// positioned after `last`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(10, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(20, "0460", "SIMPLE", true),
    ///     CrimeRecord::new(30, "0820", "$500 AND UNDER", true),
    /// ]);
    ///
    /// let head: OrderedRecordSet = OrderedRecordSet::from_range(&set.begin(), &set.find(30));
    /// assert_eq!(head.iter().map(CrimeRecord::id).collect::<Vec<_>>(), [10, 20]);
    ///
    /// let arrests: OrderedRecordSet = OrderedRecordSet::from_range(&set.arrest_begin(), &set.arrest_end());
    /// assert_eq!(arrests.len(), 2);
    /// ```
    #[must_use]
    pub fn from_range<F, G>(first: &Cursor<'_, F>, last: &Cursor<'_, G>) -> Self
    where
        F: Filter + Clone,
    {
        let mut set = OrderedRecordSet::with_comparator(C::default());
        set.extend(first.records_until(last).cloned());
        log::debug!("built set of {} records from cursor range", set.len());
        set
    }
}

impl<C: Clone> Clone for OrderedRecordSet<C> {
    fn clone(&self) -> Self {
        OrderedRecordSet {
            records: self.records.clone(),
            comparator: self.comparator.clone(),
        }
    }

    /// Overwrites `self` with an independent copy of `source`, reusing the
    /// existing allocation where possible.
    fn clone_from(&mut self, source: &Self) {
        self.records.clone_from(&source.records);
        self.comparator.clone_from(&source.comparator);
    }
}

impl<C, D> PartialEq<OrderedRecordSet<D>> for OrderedRecordSet<C> {
    /// Two sets are equal when they hold the same identifiers. Comparators
    /// are not compared.
    fn eq(&self, other: &OrderedRecordSet<D>) -> bool {
        self.records == other.records
    }
}

impl<C> Eq for OrderedRecordSet<C> {}

impl<C> fmt::Debug for OrderedRecordSet<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<C: Default> Default for OrderedRecordSet<C> {
    fn default() -> Self {
        OrderedRecordSet::with_comparator(C::default())
    }
}

impl<C: Default> FromIterator<CrimeRecord> for OrderedRecordSet<C> {
    /// Collects records through [`insert`](OrderedRecordSet::insert); rejected
    /// records are dropped.
    fn from_iter<I: IntoIterator<Item = CrimeRecord>>(iter: I) -> Self {
        let mut set = OrderedRecordSet::default();
        set.extend(iter);
        set
    }
}

impl<C> Extend<CrimeRecord> for OrderedRecordSet<C> {
    fn extend<I: IntoIterator<Item = CrimeRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl<'a, C> Extend<&'a CrimeRecord> for OrderedRecordSet<C> {
    fn extend<I: IntoIterator<Item = &'a CrimeRecord>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<const N: usize> From<[CrimeRecord; N]> for OrderedRecordSet {
    fn from(arr: [CrimeRecord; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<C> IntoIterator for OrderedRecordSet<C> {
    type Item = CrimeRecord;
    type IntoIter = IntoIter;

    /// Gets an iterator for moving the records out in ascending identifier order.
    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.records.into_iter(),
        }
    }
}

impl<'a, C> IntoIterator for &'a OrderedRecordSet<C> {
    type Item = &'a CrimeRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CrimeRecord;

    fn next(&mut self) -> Option<&'a CrimeRecord> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<&'a CrimeRecord> {
        self.next_back()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<&'a CrimeRecord> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl Default for Iter<'_> {
    /// Creates an empty `ordered_record_set::Iter`.
    ///
    /// ```
    /// # use crime_set::ordered_record_set;
    /// let iter: ordered_record_set::Iter<'_> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            inner: slice::Iter::default(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = CrimeRecord;

    fn next(&mut self) -> Option<CrimeRecord> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<CrimeRecord> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl FusedIterator for IntoIter {}

impl fmt::Debug for IntoIter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<'a, F> Filtered<'a, F> {
    pub(crate) fn new(records: &'a [CrimeRecord], filter: F) -> Self {
        Filtered {
            inner: records.iter(),
            filter,
        }
    }
}

impl<'a, F: Filter> Iterator for Filtered<'a, F> {
    type Item = &'a CrimeRecord;

    fn next(&mut self) -> Option<&'a CrimeRecord> {
        let filter = &self.filter;
        self.inner.find(|record| filter.accepts(record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.inner.len()))
    }
}

impl<'a, F: Filter> DoubleEndedIterator for Filtered<'a, F> {
    fn next_back(&mut self) -> Option<&'a CrimeRecord> {
        let filter = &self.filter;
        self.inner.rfind(|record| filter.accepts(record))
    }
}

impl<F: Filter> FusedIterator for Filtered<'_, F> {}

impl<F: Clone> Clone for Filtered<'_, F> {
    fn clone(&self) -> Self {
        Filtered {
            inner: self.inner.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for Filtered<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filtered").field("remaining", &self.inner.len()).field("filter", &self.filter).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::ByCode;

    fn record(id: i64, code: &str, description: &str, arrest: bool) -> CrimeRecord {
        CrimeRecord::new(id, code, description, arrest)
    }

    #[test]
    fn check_rep_reports_out_of_order_and_non_positive() {
        let mut set = OrderedRecordSet::new();
        set.records.push(record(5, "0460", "SIMPLE", false));
        set.records.push(record(5, "0460", "SIMPLE", false));
        assert_eq!(
            set.check_rep(),
            Err(InvariantViolation::OutOfOrder {
                index: 1,
                previous: 5,
                current: 5,
            })
        );

        set.records.clear();
        set.records.push(record(0, "0460", "SIMPLE", false));
        assert_eq!(
            set.check_rep(),
            Err(InvariantViolation::NonPositiveId {
                index: 0,
                id: 0,
            })
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "[invariants] OrderedRecordSet")]
    fn corrupted_set_panics_on_next_mutation() {
        let mut set = OrderedRecordSet::new();
        set.records.push(record(9, "0460", "SIMPLE", false));
        set.records.push(record(3, "0460", "SIMPLE", false));
        set.insert(record(20, "0460", "SIMPLE", false));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "[invariants] OrderedRecordSet")]
    fn corrupted_set_panics_on_cursor_removal() {
        let mut set = OrderedRecordSet::new();
        set.records.push(record(9, "0460", "SIMPLE", false));
        set.records.push(record(3, "0460", "SIMPLE", false));
        set.records.push(record(1, "0460", "SIMPLE", false));
        let mut cursor = set.end_mut();
        assert!(cursor.move_prev());
        let _ = cursor.remove_current();
    }

    #[test]
    fn non_id_comparator_scans_for_bounds() {
        let mut set = OrderedRecordSet::with_comparator(ByCode);
        set.insert(record(1, "0820", "$500 AND UNDER", false));
        set.insert(record(2, "0460", "SIMPLE", false));
        set.insert(record(3, "0486", "DOMESTIC BATTERY SIMPLE", false));

        // Identifier order is 0820, 0460, 0486: not partitioned by code, so
        // the first qualifying record in storage order wins.
        let probe = record(0, "0470", "", false);
        assert_eq!(set.lower_bound_index(&probe), 0);
        assert_eq!(set.upper_bound_index(&probe), 0);

        let probe = record(i64::MAX, "0820", "", false);
        assert_eq!(set.lower_bound_index(&probe), 3);
        assert_eq!(set.upper_bound_index(&probe), 3);
    }

    #[test]
    fn sub_collection_keeps_comparator() {
        let mut set = OrderedRecordSet::with_comparator(ByCode);
        set.insert(record(1, "0460", "SIMPLE", false));
        let found = set.find_by_code("0460");
        assert_eq!(found.comparator(), &ByCode);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn clone_from_reuses_and_detaches() {
        let source = OrderedRecordSet::from([record(1, "0460", "SIMPLE", false), record(2, "0460", "SIMPLE", true)]);
        let mut target = OrderedRecordSet::from([record(9, "0820", "$500 AND UNDER", false)]);
        target.clone_from(&source);
        assert_eq!(target, source);

        target.remove(1);
        assert_eq!(source.len(), 2);
        assert_eq!(target.len(), 1);
    }
}
