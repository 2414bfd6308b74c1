/// A zero-based position in the identifier order of an
/// [`OrderedRecordSet`](crate::OrderedRecordSet).
///
/// # Examples
///
/// ```
/// use crime_set::{CrimeRecord, OrderedRecordSet, Rank};
///
/// let mut set = OrderedRecordSet::new();
/// set.insert(CrimeRecord::new(30, "0460", "SIMPLE", false));
/// set.insert(CrimeRecord::new(10, "0820", "$500 AND UNDER", true));
///
/// assert_eq!(set[Rank(0)].id(), 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
