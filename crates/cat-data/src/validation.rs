//! Record validation against the reference pools and age range.
//!
//! Generated datasets always pass; these checks exist for fixtures read back
//! from disk or hand-edited by developers.
//!
//! # Validation Rules
//!
//! - Name must be one of [`CAT_NAMES`]
//! - Breed must be one of [`CAT_BREEDS`]
//! - Age must lie in [`AGE_MIN`]`..=`[`AGE_MAX`]
//! - A dataset must hold exactly [`CAT_COUNT`] cats
//! - Cat identifiers must be distinct within a dataset

use std::collections::HashSet;

use crate::error::RecordError;
use crate::generator::{AGE_MAX, AGE_MIN, CAT_COUNT};
use crate::pools::{CAT_BREEDS, CAT_NAMES};
use crate::record::{CatRecord, Dataset};

/// Returns `true` if the name belongs to the reference name pool.
///
/// # Examples
///
/// ```
/// use cat_data::is_known_name;
///
/// assert!(is_known_name("Whiskers"));
/// assert!(!is_known_name("whiskers"));
/// ```
#[must_use]
pub fn is_known_name(name: &str) -> bool {
    CAT_NAMES.contains(&name)
}

/// Returns `true` if the breed belongs to the reference breed pool.
#[must_use]
pub fn is_known_breed(breed: &str) -> bool {
    CAT_BREEDS.contains(&breed)
}

/// Returns `true` if the age lies within the generated range.
#[must_use]
pub const fn is_valid_age(age: u8) -> bool {
    age >= AGE_MIN && age <= AGE_MAX
}

impl CatRecord {
    /// Checks the record against the pools and the age range.
    ///
    /// # Errors
    ///
    /// Returns the first [`RecordError`] found, checking name, breed, then
    /// age.
    pub fn validate(&self) -> Result<(), RecordError> {
        if !is_known_name(&self.name) {
            return Err(RecordError::UnknownName {
                name: self.name.clone(),
            });
        }
        if !is_known_breed(&self.breed) {
            return Err(RecordError::UnknownBreed {
                breed: self.breed.clone(),
            });
        }
        if !is_valid_age(self.age) {
            return Err(RecordError::AgeOutOfRange {
                age: self.age,
                min: AGE_MIN,
                max: AGE_MAX,
            });
        }
        Ok(())
    }
}

impl Dataset {
    /// Checks the record count, then every record and its id in order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::WrongRecordCount`] if the dataset does not hold
    /// [`CAT_COUNT`] cats, [`RecordError::InvalidRecord`] for the first record
    /// that fails [`CatRecord::validate`], or [`RecordError::DuplicateId`]
    /// for the first id already seen earlier in the dataset.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.cats.len() != CAT_COUNT {
            return Err(RecordError::WrongRecordCount {
                expected: CAT_COUNT,
                actual: self.cats.len(),
            });
        }

        let mut seen_ids = HashSet::with_capacity(self.cats.len());
        for (index, cat) in self.cats.iter().enumerate() {
            cat.validate()
                .map_err(|source| RecordError::InvalidRecord {
                    index,
                    source: Box::new(source),
                })?;
            if !seen_ids.insert(cat.id) {
                return Err(RecordError::DuplicateId { id: cat.id, index });
            }
        }

        Ok(())
    }
}
