//! An ordered set of crime records for Rust.
//!
//! This crate provides [`OrderedRecordSet`], a sorted, duplicate-free
//! collection of [`CrimeRecord`]s keyed by incident identifier, together with
//! the queries an incident log needs:
//!
//! - [`find`](OrderedRecordSet::find) / [`remove`](OrderedRecordSet::remove) by identifier
//! - [`find_by_code`](OrderedRecordSet::find_by_code) - every record with a given IUCR code
//! - [`find_by_description`](OrderedRecordSet::find_by_description) - every record whose
//!   description contains a substring
//! - [`lower_bound`](OrderedRecordSet::lower_bound) / [`upper_bound`](OrderedRecordSet::upper_bound)
//!   under a pluggable [`Comparator`]
//! - Bidirectional [`Cursor`]s, including filtering cursors that only stop on
//!   arrests or on matching descriptions
//!
//! # Example
//!
//! ```
//! use crime_set::{ByCode, CrimeRecord, OrderedRecordSet};
//!
//! let mut chicago = OrderedRecordSet::with_comparator(ByCode);
//! chicago.insert(CrimeRecord::new(10_230_953, "0460", "SIMPLE", false));
//! chicago.insert(CrimeRecord::new(10_224_738, "0486", "DOMESTIC BATTERY SIMPLE", true));
//! chicago.insert(CrimeRecord::new(10_224_739, "0810", "OVER $500", false));
//!
//! // Iteration is always by identifier.
//! assert_eq!(chicago.first().map(CrimeRecord::id), Some(10_224_738));
//!
//! // Sub-collection queries return new, independent sets.
//! let battery = chicago.find_by_description("BATTERY");
//! assert_eq!(battery.len(), 1);
//!
//! // Filtering cursors skip records that do not qualify.
//! let cursor = chicago.arrest_begin();
//! assert_eq!(cursor.get().map(CrimeRecord::code), Some("0486"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`check-invariants`** - Re-check the representation after every mutation in
//!   release builds too (always on with debug assertions)
//!
//! # Implementation
//!
//! Records live in one `Vec` sorted strictly ascending by identifier.
//! Membership and insertion points are found by binary search. Cursors are a
//! slice borrow plus an index, generic over a [`Filter`].

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod compare;
mod error;
mod filter;
mod order_statistic;
mod record;

pub mod ordered_record_set;

pub use compare::{ByCode, ByDescription, ById, Comparator};
pub use error::{InsertError, InvariantViolation};
pub use filter::{All, Arrested, DescriptionMatch, Filter};
pub use order_statistic::Rank;
pub use ordered_record_set::{ArrestCursor, Cursor, CursorMut, DescriptionCursor, Filtered, OrderedRecordSet};
pub use record::CrimeRecord;
