use thiserror::Error;

/// Why a record was turned away by [`OrderedRecordSet::try_insert`].
///
/// [`OrderedRecordSet::try_insert`]: crate::OrderedRecordSet::try_insert
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum InsertError {
    /// A record with this identifier is already stored.
    #[error("a record with id {0} is already in the set")]
    DuplicateId(i64),
    /// Stored identifiers must be strictly positive.
    #[error("record id must be positive, got {0}")]
    NonPositiveId(i64),
}

/// A broken representation invariant found by
/// [`OrderedRecordSet::check_rep`](crate::OrderedRecordSet::check_rep).
///
/// Seeing one of these means the set itself is defective.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum InvariantViolation {
    /// A stored identifier is zero or negative.
    #[error("record at index {index} has non-positive id {id}")]
    NonPositiveId { index: usize, id: i64 },
    /// Identifiers are not strictly ascending at `index`.
    #[error("record at index {index} has id {current}, not greater than preceding id {previous}")]
    OutOfOrder { index: usize, previous: i64, current: i64 },
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offending_ids() {
        assert_eq!(InsertError::DuplicateId(42).to_string(), "a record with id 42 is already in the set");
        assert_eq!(InsertError::NonPositiveId(-1).to_string(), "record id must be positive, got -1");
        assert_eq!(
            InvariantViolation::OutOfOrder {
                index: 3,
                previous: 9,
                current: 9,
            }
            .to_string(),
            "record at index 3 has id 9, not greater than preceding id 9"
        );
    }
}
