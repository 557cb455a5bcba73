//! # Cultivar Related
//!
//! Randomized "related items" selection for a focal record.
//!
//! Candidates come from strictly ordered tiers: same hybridizer first,
//! then shared hue terms in the color description, then a random backfill
//! from the rest of the collection. Randomness is injected through
//! [`rand::Rng`], so callers (and tests) control determinism by seeding.

mod selector;

pub use selector::{select_related, RELATED_LIMIT};
