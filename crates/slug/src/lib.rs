//! # Cultivar Slug
//!
//! URL identifiers for record names, and the fallback chain that maps them
//! back.
//!
//! Cultivar naming conventions permit apostrophes, commas, exclamation
//! marks, periods, hyphens and slashes, so the forward transform has to
//! keep that punctuation readable while staying URL-safe. The transform is
//! lossy for whitespace runs, which is why resolution is tiered rather
//! than a strict inverse.

mod resolver;
mod slug;

pub use resolver::{normalize_name, resolve};
pub use slug::{name_from_slug, to_slug};
