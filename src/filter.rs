use crate::CrimeRecord;

/// Decides which records a [`Cursor`](crate::ordered_record_set::Cursor) or
/// [`Filtered`](crate::ordered_record_set::Filtered) iterator stops on.
///
/// Any `Fn(&CrimeRecord) -> bool` is a filter.
pub trait Filter {
    /// Returns `true` if a cursor should stop on `record`.
    fn accepts(&self, record: &CrimeRecord) -> bool;
}

/// Accepts every record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct All;

impl Filter for All {
    #[inline]
    fn accepts(&self, _record: &CrimeRecord) -> bool {
        true
    }
}

/// Accepts records whose arrest flag is set.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Arrested;

impl Filter for Arrested {
    #[inline]
    fn accepts(&self, record: &CrimeRecord) -> bool {
        record.is_arrest()
    }
}

/// Accepts records whose description contains the given text.
///
/// Matching is exact substring containment: case-sensitive, no Unicode
/// normalization. An empty pattern matches every record.
///
/// # Examples
///
/// ```
/// use crime_set::{CrimeRecord, DescriptionMatch, Filter};
///
/// let filter = DescriptionMatch::new("BATTERY");
/// assert!(filter.accepts(&CrimeRecord::new(1, "0486", "DOMESTIC BATTERY SIMPLE", false)));
/// assert!(!filter.accepts(&CrimeRecord::new(2, "0486", "domestic battery simple", false)));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct DescriptionMatch<'p> {
    pattern: &'p str,
}

impl<'p> DescriptionMatch<'p> {
    /// Matches descriptions containing `pattern`.
    #[must_use]
    pub const fn new(pattern: &'p str) -> Self {
        DescriptionMatch {
            pattern,
        }
    }

    /// The text being searched for.
    #[must_use]
    pub const fn pattern(&self) -> &'p str {
        self.pattern
    }
}

impl Filter for DescriptionMatch<'_> {
    #[inline]
    fn accepts(&self, record: &CrimeRecord) -> bool {
        record.description().contains(self.pattern)
    }
}

impl<F> Filter for F
where
    F: Fn(&CrimeRecord) -> bool,
{
    #[inline]
    fn accepts(&self, record: &CrimeRecord) -> bool {
        self(record)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_matches_everything() {
        let filter = DescriptionMatch::new("");
        assert!(filter.accepts(&CrimeRecord::new(1, "0460", "", false)));
        assert!(filter.accepts(&CrimeRecord::new(2, "0460", "SIMPLE", false)));
    }

    #[test]
    fn arrested_reads_the_flag() {
        assert!(Arrested.accepts(&CrimeRecord::new(1, "0460", "SIMPLE", true)));
        assert!(!Arrested.accepts(&CrimeRecord::new(2, "0460", "SIMPLE", false)));
        assert!(All.accepts(&CrimeRecord::new(2, "0460", "SIMPLE", false)));
    }

    #[test]
    fn closures_are_filters() {
        let domestic = |record: &CrimeRecord| record.is_domestic();
        assert!(domestic.accepts(&CrimeRecord::new(1, "0486", "", false).with_domestic(true)));
    }
}
