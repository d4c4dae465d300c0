//! Error types for cat record validation.
//!
//! Generation itself cannot fail; these errors describe data that violates
//! the record invariants, typically a fixture read back from disk.

use thiserror::Error;
use uuid::Uuid;

/// Reasons a cat record or dataset fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The name is not part of the reference name pool.
    #[error("unknown cat name: '{name}'")]
    UnknownName {
        /// The rejected name.
        name: String,
    },

    /// The breed is not part of the reference breed pool.
    #[error("unknown cat breed: '{breed}'")]
    UnknownBreed {
        /// The rejected breed.
        breed: String,
    },

    /// The age lies outside the accepted range.
    #[error("cat age {age} is outside {min}..={max}")]
    AgeOutOfRange {
        /// The rejected age.
        age: u8,
        /// Smallest accepted age.
        min: u8,
        /// Largest accepted age.
        max: u8,
    },

    /// The dataset does not hold the expected number of cats.
    #[error("expected {expected} cats, found {actual}")]
    WrongRecordCount {
        /// Number of cats a dataset must hold.
        expected: usize,
        /// Number of cats actually present.
        actual: usize,
    },

    /// Two cats in a dataset share an identifier.
    #[error("duplicate cat id {id} at index {index}")]
    DuplicateId {
        /// The repeated identifier.
        id: Uuid,
        /// Position of the second occurrence in the dataset.
        index: usize,
    },

    /// A record inside a dataset is invalid.
    #[error("cat at index {index} is invalid: {source}")]
    InvalidRecord {
        /// Position of the record in the dataset.
        index: usize,
        /// The record's own validation failure.
        #[source]
        source: Box<RecordError>,
    },
}
