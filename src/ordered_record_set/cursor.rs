use alloc::vec::Vec;
use core::fmt;
use core::ptr;

use super::{Filtered, assert_invariants};
use crate::CrimeRecord;
use crate::filter::{All, Arrested, DescriptionMatch, Filter};

/// A read-only cursor that visits only records with the arrest flag set.
pub type ArrestCursor<'a> = Cursor<'a, Arrested>;

/// A read-only cursor that visits only records whose description contains a
/// pattern.
pub type DescriptionCursor<'a, 'p> = Cursor<'a, DescriptionMatch<'p>>;

/// First index at or after `from` whose record passes `filter`, or
/// `records.len()`.
fn seek_forward<F: Filter>(records: &[CrimeRecord], from: usize, filter: &F) -> usize {
    let from = from.min(records.len());
    records[from..].iter().position(|record| filter.accepts(record)).map_or(records.len(), |offset| from + offset)
}

/// Last index strictly before `before` whose record passes `filter`.
fn seek_backward<F: Filter>(records: &[CrimeRecord], before: usize, filter: &F) -> Option<usize> {
    let before = before.min(records.len());
    records[..before].iter().rposition(|record| filter.accepts(record))
}

/// A position in an [`OrderedRecordSet`](crate::OrderedRecordSet), plus a
/// shared borrow of its storage.
///
/// A cursor is either on a record that passes its filter `F`, or at the end.
/// Moving skips every record the filter rejects, in either direction.
///
/// Two cursors compare equal when they point into the same set at the same
/// position, whatever their filters. Set identity is the set's own storage,
/// so cursors into two distinct empty sets are never equal.
///
/// # Examples
///
/// ```
/// use crime_set::{CrimeRecord, OrderedRecordSet};
///
/// let set = OrderedRecordSet::from([
///     CrimeRecord::new(1, "0460", "SIMPLE", false),
///     CrimeRecord::new(2, "0460", "SIMPLE", true),
///     CrimeRecord::new(3, "0820", "$500 AND UNDER", true),
/// ]);
///
/// let mut cursor = set.arrest_begin();
/// let mut seen = Vec::new();
/// while cursor != set.arrest_end() {
///     seen.push(cursor.get().unwrap().id());
///     cursor.move_next();
/// }
/// assert_eq!(seen, [2, 3]);
///
/// // And back again; record 1 is skipped.
/// assert!(cursor.move_prev());
/// assert!(cursor.move_prev());
/// assert!(!cursor.move_prev());
/// assert_eq!(cursor.get().map(CrimeRecord::id), Some(2));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a, F = All> {
    records: &'a Vec<CrimeRecord>,
    index: usize,
    filter: F,
}

impl<'a, F: Filter> Cursor<'a, F> {
    /// Positions at the first record at or after `index` that passes `filter`.
    #[allow(clippy::ptr_arg)] // the vector's address identifies the set
    pub(super) fn at(records: &'a Vec<CrimeRecord>, index: usize, filter: F) -> Self {
        let index = seek_forward(records, index, &filter);
        Cursor {
            records,
            index,
            filter,
        }
    }

    /// Re-filters this cursor, moving forward to the first record at or after
    /// the current position that passes `filter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{Arrested, CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(1, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(2, "0460", "SIMPLE", true),
    /// ]);
    /// let arrests = set.begin().with_filter(Arrested);
    /// assert_eq!(arrests.get().map(CrimeRecord::id), Some(2));
    /// ```
    pub fn with_filter<G: Filter>(self, filter: G) -> Cursor<'a, G> {
        Cursor::at(self.records, self.index, filter)
    }

    /// The record under the cursor, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<&'a CrimeRecord> {
        self.records.get(self.index)
    }

    /// The rank of the record under the cursor, or `None` at the end.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (self.index < self.records.len()).then_some(self.index)
    }

    /// Returns `true` if the cursor is past the last record.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index >= self.records.len()
    }

    /// The filter this cursor stops on.
    #[must_use]
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Advances to the next record that passes the filter.
    ///
    /// Returns `false` once the cursor reaches the end; moving from the end
    /// leaves it there.
    pub fn move_next(&mut self) -> bool {
        if !self.is_end() {
            self.index = seek_forward(self.records, self.index + 1, &self.filter);
        }
        !self.is_end()
    }

    /// Steps back to the previous record that passes the filter.
    ///
    /// Returns `false`, without moving, if there is no such record.
    pub fn move_prev(&mut self) -> bool {
        match seek_backward(self.records, self.index, &self.filter) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// The record [`move_next`](Self::move_next) would land on.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'a CrimeRecord> {
        if self.is_end() {
            return None;
        }
        self.records.get(seek_forward(self.records, self.index + 1, &self.filter))
    }

    /// The record [`move_prev`](Self::move_prev) would land on.
    #[must_use]
    pub fn peek_prev(&self) -> Option<&'a CrimeRecord> {
        seek_backward(self.records, self.index, &self.filter).map(|index| &self.records[index])
    }

    /// Iterates over the records in `[self, last)` that pass this cursor's filter.
    ///
    /// # Panics
    ///
    /// Panics if `last` points into a different set, or lies before `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use crime_set::{CrimeRecord, OrderedRecordSet};
    ///
    /// let set = OrderedRecordSet::from([
    ///     CrimeRecord::new(10, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(20, "0460", "SIMPLE", false),
    ///     CrimeRecord::new(30, "0460", "SIMPLE", false),
    /// ]);
    /// let low = CrimeRecord::new(15, "", "", false);
    /// let high = CrimeRecord::new(30, "", "", false);
    /// let ids: Vec<_> = set
    ///     .lower_bound(&low)
    ///     .records_until(&set.upper_bound(&high))
    ///     .map(CrimeRecord::id)
    ///     .collect();
    /// assert_eq!(ids, [20, 30]);
    /// ```
    pub fn records_until<G>(&self, last: &Cursor<'_, G>) -> Filtered<'a, F>
    where
        F: Clone,
    {
        assert!(self.same_storage(last), "cursor range spans two different sets");
        assert!(self.index <= last.index, "cursor range start is after its end");
        Filtered::new(&self.records[self.index..last.index], self.filter.clone())
    }
}

impl<F> Cursor<'_, F> {
    /// Compares the backing vectors, not their buffers: empty vectors share a
    /// dangling buffer pointer.
    fn same_storage<G>(&self, other: &Cursor<'_, G>) -> bool {
        ptr::eq(self.records, other.records)
    }
}

impl<F, G> PartialEq<Cursor<'_, G>> for Cursor<'_, F> {
    fn eq(&self, other: &Cursor<'_, G>) -> bool {
        self.same_storage(other) && self.index == other.index
    }
}

impl<F> Eq for Cursor<'_, F> {}

impl<F: fmt::Debug> fmt::Debug for Cursor<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("id", &self.records.get(self.index).map(CrimeRecord::id))
            .field("filter", &self.filter)
            .finish()
    }
}

/// A position in an [`OrderedRecordSet`](crate::OrderedRecordSet) holding an
/// exclusive borrow of its storage.
///
/// Moves like [`Cursor`] and can additionally remove the record under it.
/// Records are never handed out mutably, since changing an identifier in
/// place would break the set's ordering. A `CursorMut` converts into a
/// [`Cursor`]; there is no conversion back.
///
/// # Examples
///
/// ```
/// use crime_set::{Arrested, CrimeRecord, OrderedRecordSet};
///
/// let mut set = OrderedRecordSet::from([
///     CrimeRecord::new(1, "0460", "SIMPLE", false),
///     CrimeRecord::new(2, "0460", "SIMPLE", true),
///     CrimeRecord::new(3, "0820", "$500 AND UNDER", true),
///     CrimeRecord::new(4, "0820", "$500 AND UNDER", false),
/// ]);
///
/// let mut cursor = set.begin_filtered_mut(Arrested);
/// while cursor.remove_current().is_some() {}
///
/// assert_eq!(set.iter().map(CrimeRecord::id).collect::<Vec<_>>(), [1, 4]);
/// ```
pub struct CursorMut<'a, F = All> {
    records: &'a mut Vec<CrimeRecord>,
    index: usize,
    filter: F,
}

impl<'a, F: Filter> CursorMut<'a, F> {
    /// Positions at the first record at or after `index` that passes `filter`.
    pub(super) fn at(records: &'a mut Vec<CrimeRecord>, index: usize, filter: F) -> Self {
        let index = seek_forward(records, index, &filter);
        CursorMut {
            records,
            index,
            filter,
        }
    }

    /// See [`Cursor::get`].
    #[must_use]
    pub fn get(&self) -> Option<&CrimeRecord> {
        self.records.get(self.index)
    }

    /// See [`Cursor::index`].
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (self.index < self.records.len()).then_some(self.index)
    }

    /// See [`Cursor::is_end`].
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.index >= self.records.len()
    }

    /// See [`Cursor::move_next`].
    pub fn move_next(&mut self) -> bool {
        if !self.is_end() {
            self.index = seek_forward(self.records, self.index + 1, &self.filter);
        }
        !self.is_end()
    }

    /// See [`Cursor::move_prev`].
    pub fn move_prev(&mut self) -> bool {
        match seek_backward(self.records, self.index, &self.filter) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    /// Removes the record under the cursor and returns it. The cursor moves
    /// on to the next record that passes the filter.
    ///
    /// Returns `None` at the end.
    pub fn remove_current(&mut self) -> Option<CrimeRecord> {
        if self.is_end() {
            return None;
        }
        let record = self.records.remove(self.index);
        assert_invariants(self.records);
        self.index = seek_forward(self.records, self.index, &self.filter);
        Some(record)
    }

    /// A read-only view of this cursor for the duration of the borrow.
    pub fn as_cursor(&self) -> Cursor<'_, F>
    where
        F: Clone,
    {
        Cursor {
            records: &*self.records,
            index: self.index,
            filter: self.filter.clone(),
        }
    }
}

impl<'a, F> From<CursorMut<'a, F>> for Cursor<'a, F> {
    fn from(cursor: CursorMut<'a, F>) -> Self {
        let CursorMut {
            records,
            index,
            filter,
        } = cursor;
        let records: &'a Vec<CrimeRecord> = records;
        Cursor {
            records,
            index,
            filter,
        }
    }
}

impl<F: fmt::Debug> fmt::Debug for CursorMut<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("id", &self.records.get(self.index).map(CrimeRecord::id))
            .field("filter", &self.filter)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::OrderedRecordSet;

    fn sample() -> OrderedRecordSet {
        OrderedRecordSet::from([
            CrimeRecord::new(1, "0460", "SIMPLE", false),
            CrimeRecord::new(2, "0486", "DOMESTIC BATTERY SIMPLE", true),
            CrimeRecord::new(3, "0820", "$500 AND UNDER", false),
            CrimeRecord::new(4, "0486", "DOMESTIC BATTERY SIMPLE", true),
            CrimeRecord::new(5, "0460", "SIMPLE", false),
        ])
    }

    #[test]
    fn seek_helpers_clamp_and_skip() {
        let set = sample();
        let records = set.as_slice();
        assert_eq!(seek_forward(records, 0, &Arrested), 1);
        assert_eq!(seek_forward(records, 2, &Arrested), 3);
        assert_eq!(seek_forward(records, 4, &Arrested), 5);
        assert_eq!(seek_forward(records, 99, &All), 5);
        assert_eq!(seek_backward(records, 5, &Arrested), Some(3));
        assert_eq!(seek_backward(records, 1, &Arrested), None);
        assert_eq!(seek_backward(records, 99, &All), Some(4));
    }

    #[test]
    fn move_next_at_end_stays_at_end() {
        let set = sample();
        let mut cursor = set.end();
        assert!(!cursor.move_next());
        assert!(cursor.is_end());
        assert_eq!(cursor.index(), None);
        assert!(cursor.get().is_none());
        assert!(cursor.peek_next().is_none());
        assert_eq!(cursor.peek_prev().map(CrimeRecord::id), Some(5));
    }

    #[test]
    fn post_increment_via_copy() {
        let set = sample();
        let mut cursor = set.description_begin("BATTERY");
        let before = cursor;
        cursor.move_next();
        assert_eq!(before.get().map(CrimeRecord::id), Some(2));
        assert_eq!(cursor.get().map(CrimeRecord::id), Some(4));
        assert_eq!(before.peek_next().map(CrimeRecord::id), Some(4));
        assert_eq!(cursor.peek_prev().map(CrimeRecord::id), Some(2));
        assert!(!cursor.move_next());
        assert!(cursor == set.description_end("BATTERY"));
    }

    #[test]
    fn cursors_from_different_sets_differ() {
        let a = sample();
        let b = sample();
        assert!(a.begin() != b.begin());
        assert!(a.begin() == a.find(1));
    }

    #[test]
    #[should_panic(expected = "cursor range spans two different sets")]
    fn records_until_rejects_foreign_cursor() {
        let a = sample();
        let b = sample();
        let _ = a.begin().records_until(&b.end());
    }

    #[test]
    fn cursors_from_distinct_empty_sets_differ() {
        let a = OrderedRecordSet::new();
        let b = OrderedRecordSet::new();
        assert!(a.begin() != b.end());
        assert!(a.begin() == a.end());
    }

    #[test]
    #[should_panic(expected = "cursor range spans two different sets")]
    fn records_until_rejects_cursor_into_other_empty_set() {
        let a = OrderedRecordSet::new();
        let b = OrderedRecordSet::new();
        let _ = a.begin().records_until(&b.end());
    }

    #[test]
    #[should_panic(expected = "cursor range start is after its end")]
    fn records_until_rejects_inverted_range() {
        let set = sample();
        let _ = set.end().records_until(&set.begin());
    }

    #[test]
    fn cursor_mut_widens_to_cursor() {
        let mut set = sample();
        let mut cursor = set.find_mut(3);
        assert_eq!(cursor.as_cursor().get().map(CrimeRecord::id), Some(3));
        assert_eq!(cursor.remove_current().map(|record| record.id()), Some(3));
        assert_eq!(cursor.get().map(CrimeRecord::id), Some(4));
        assert!(cursor.move_prev());
        let cursor: Cursor<'_> = cursor.into();
        assert_eq!(cursor.get().map(CrimeRecord::id), Some(2));
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn remove_current_at_end_is_none() {
        let mut set = sample();
        let mut cursor = set.end_mut();
        assert!(cursor.remove_current().is_none());
        assert!(cursor.move_prev());
        assert_eq!(cursor.remove_current().map(|record| record.id()), Some(5));
        assert!(cursor.is_end());
    }
}
