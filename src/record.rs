use alloc::string::String;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// A single reported crime incident.
///
/// Only the fields the containers need are modelled. Equality, ordering and
/// hashing look at the identifier alone; two records with the same `id` are
/// the same incident as far as any collection in this crate is concerned.
///
/// # Examples
///
/// ```
/// use crime_set::CrimeRecord;
///
/// let record = CrimeRecord::new(10_224_738, "0486", "DOMESTIC BATTERY SIMPLE", false)
///     .with_primary_type("BATTERY")
///     .with_domestic(true);
///
/// assert_eq!(record.id(), 10_224_738);
/// assert_eq!(record.code(), "0486");
/// assert!(record.is_domestic());
/// assert!(!record.is_arrest());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CrimeRecord {
    id: i64,
    code: String,
    description: String,
    arrest: bool,
    case_number: String,
    primary_type: String,
    domestic: bool,
}

impl CrimeRecord {
    /// Creates a record with the given identifier, IUCR code, description and
    /// arrest flag. The remaining fields start out empty.
    ///
    /// The identifier is not validated here; sets reject records whose
    /// identifier is not positive.
    pub fn new(id: i64, code: impl Into<String>, description: impl Into<String>, arrest: bool) -> Self {
        CrimeRecord {
            id,
            code: code.into(),
            description: description.into(),
            arrest,
            ..CrimeRecord::default()
        }
    }

    /// Sets the police case number.
    #[must_use]
    pub fn with_case_number(mut self, case_number: impl Into<String>) -> Self {
        self.case_number = case_number.into();
        self
    }

    /// Sets the primary offense type (e.g. `"BATTERY"`).
    #[must_use]
    pub fn with_primary_type(mut self, primary_type: impl Into<String>) -> Self {
        self.primary_type = primary_type.into();
        self
    }

    /// Sets the domestic-incident flag.
    #[must_use]
    pub fn with_domestic(mut self, domestic: bool) -> Self {
        self.domestic = domestic;
        self
    }

    /// The unique incident identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The IUCR classification code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Free-text description of the offence.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether an arrest was made.
    #[must_use]
    pub fn is_arrest(&self) -> bool {
        self.arrest
    }

    /// Police case number, empty if unknown.
    #[must_use]
    pub fn case_number(&self) -> &str {
        &self.case_number
    }

    /// Primary offence category, e.g. `BATTERY`.
    #[must_use]
    pub fn primary_type(&self) -> &str {
        &self.primary_type
    }

    /// Whether the incident was domestic-related.
    #[must_use]
    pub fn is_domestic(&self) -> bool {
        self.domestic
    }
}

impl PartialEq for CrimeRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CrimeRecord {}

impl PartialOrd for CrimeRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CrimeRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for CrimeRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
