//! # Cultivar Store
//!
//! Record model and loader for a read-only cultivar catalog.
//!
//! The backing source is one JSON object per line. The store is populated
//! once and never mutated; every downstream view preserves load order.

mod error;
mod model;
mod store;

pub use error::{Result, StoreError};
pub use model::{non_empty, Record};
pub use store::RecordStore;
