//! Random cat records for the development fake server.
//!
//! The fake server answers its `/cats` route with a freshly generated batch
//! of cats. This crate owns that batch: the reference name and breed pools,
//! the record types, the generator, and a small dump CLI that writes the
//! same document to disk for json-server style fixtures.
//!
//! # Overview
//!
//! - [`generate`] returns a [`Dataset`] of exactly [`CAT_COUNT`] cats drawn
//!   from the thread-local generator
//! - [`generate_with_rng`] runs the same algorithm over any [`rand::Rng`],
//!   which makes seeded, reproducible dumps possible
//! - [`CatRecord::validate`] and [`Dataset::validate`] check data read back
//!   from JSON against the pools and the age range
//!
//! # Example
//!
//! ```
//! use cat_data::{CAT_COUNT, generate};
//!
//! let dataset = generate();
//!
//! assert_eq!(dataset.cats.len(), CAT_COUNT);
//! assert!(dataset.validate().is_ok());
//! ```

mod atomic_io;
pub mod dump_cli;
mod error;
mod generator;
mod pools;
mod record;
mod validation;

pub use error::RecordError;
pub use generator::{AGE_MAX, AGE_MIN, CAT_COUNT, generate, generate_with_rng};
pub use pools::{CAT_BREEDS, CAT_NAMES};
pub use record::{CatRecord, Dataset};
pub use validation::{is_known_breed, is_known_name, is_valid_age};
