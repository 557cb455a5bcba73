//! # Cultivar Taxonomy
//!
//! Categorical tags derived from free-text record fields.
//!
//! ## Pipeline
//!
//! ```text
//! Record[]
//!     │
//!     ├──> Tag derivation (rule table, substring scans)
//!     │      └─> per-record tag set
//!     │
//!     ├──> Aggregation
//!     │      └─> sorted tag universe
//!     │
//!     └──> Presentation aids
//!            ├─ display groups (Colors, Patterns, Forms, ...)
//!            └─ related-category navigation table
//! ```
//!
//! Tags are never stored on a record; they are recomputed from the fields
//! that carry them. All scans are case-insensitive, independent, and
//! additive.

mod category;
mod derive;
mod groups;
mod related;

pub use category::records_with_tag;
pub use derive::{all_tags, derive_tags, hues_in, HUES};
pub use groups::{grouped, TagGroup};
pub use related::related_categories;
