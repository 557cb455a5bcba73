//! # Cultivar Filter
//!
//! Compound filtering over the record store.
//!
//! A [`FilterSpec`] is a bag of independently optional dimensions; each
//! active dimension narrows the result (pure AND composition) and an unset
//! dimension never constrains. Evaluation is total and stateless: the same
//! store and spec always produce the same ordered subset.

mod engine;
mod numeric;
mod spec;

pub use engine::{apply, is_rebloomer, matches};
pub use numeric::leading_number;
pub use spec::{FilterSpec, MatchType, RangeFilter, YearRange};
