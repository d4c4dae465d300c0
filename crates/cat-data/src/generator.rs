//! Random cat generation.
//!
//! Every call builds a fresh [`Dataset`] of [`CAT_COUNT`] cats. Names and
//! breeds are drawn uniformly with replacement from the reference pools and
//! ages uniformly from [`AGE_MIN`]`..=`[`AGE_MAX`].

use rand::Rng;
use tracing::debug;
use uuid::{Builder, Uuid};

use crate::pools::{CAT_BREEDS, CAT_NAMES};
use crate::record::{CatRecord, Dataset};

/// Number of cats in every generated dataset.
pub const CAT_COUNT: usize = 100;

/// Youngest age a generated cat may have.
pub const AGE_MIN: u8 = 1;

/// Oldest age a generated cat may have.
pub const AGE_MAX: u8 = 20;

/// Generates a dataset of random cats.
///
/// Draws from the thread-local generator, so concurrent callers never share
/// mutable state and each call owns its output.
///
/// # Example
///
/// ```
/// use cat_data::{CAT_NAMES, generate};
///
/// let dataset = generate();
///
/// assert!(dataset.cats.iter().all(|cat| CAT_NAMES.contains(&cat.name.as_str())));
/// ```
#[must_use]
pub fn generate() -> Dataset {
    generate_with_rng(&mut rand::rng())
}

/// Generates a dataset of random cats from the supplied generator.
///
/// A seeded generator yields the same dataset on every call, which the dump
/// CLI uses for reproducible fixtures.
///
/// # Example
///
/// ```
/// use cat_data::generate_with_rng;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let first = generate_with_rng(&mut ChaCha8Rng::seed_from_u64(7));
/// let second = generate_with_rng(&mut ChaCha8Rng::seed_from_u64(7));
///
/// assert_eq!(first, second);
/// ```
#[must_use]
pub fn generate_with_rng<R: Rng>(rng: &mut R) -> Dataset {
    let mut cats = Vec::with_capacity(CAT_COUNT);

    for _ in 0..CAT_COUNT {
        cats.push(generate_single_cat(rng));
    }

    debug!(count = cats.len(), "generated cat dataset");
    Dataset { cats }
}

fn generate_single_cat<R: Rng>(rng: &mut R) -> CatRecord {
    CatRecord {
        id: random_uuid(rng),
        name: pick(rng, &CAT_NAMES).to_owned(),
        breed: pick(rng, &CAT_BREEDS).to_owned(),
        age: rng.random_range(AGE_MIN..=AGE_MAX),
    }
}

/// Builds a version 4 UUID from the generator's bytes.
fn random_uuid<R: Rng>(rng: &mut R) -> Uuid {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid()
}

#[expect(
    clippy::indexing_slicing,
    reason = "the index is drawn from 0..N and the pools are non-empty"
)]
fn pick<R: Rng, const N: usize>(rng: &mut R, pool: &[&'static str; N]) -> &'static str {
    pool[rng.random_range(0..N)]
}
