//! # Cultivar Catalog
//!
//! The long-lived catalog engine tying the leaf crates together.
//!
//! ## Data flow
//!
//! ```text
//! varieties.jsonl
//!     │
//!     ├──> RecordStore (load once, immutable)
//!     │      │
//!     │      ├──> Taxonomy (tag universe, cached)
//!     │      ├──> Filter engine ──> PageCursor window
//!     │      ├──> Slug resolver
//!     │      └──> Related-item selector
//! ```
//!
//! A [`Catalog`] is constructed once at startup and holds the only two
//! caches in the system: the record store itself and the tag universe.
//! Everything else is computed per call from the immutable records.

mod pagination;
mod service;

pub use pagination::{PageCursor, DEFAULT_PAGE_SIZE};
pub use service::Catalog;
