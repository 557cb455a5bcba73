use std::collections::BTreeSet;
use std::path::Path;

use once_cell::sync::OnceCell;
use rand::Rng;

use cultivar_filter::FilterSpec;
use cultivar_store::{Record, RecordStore};

/// The catalog engine: an immutable record store plus a populate-once
/// tag-universe cache.
///
/// One instance lives for the whole process; tests construct a fresh one
/// per case via [`Catalog::from_records`]. There is no invalidation path
/// for either cache -- a new deployment is the refresh mechanism.
pub struct Catalog {
    store: RecordStore,
    tags: OnceCell<Vec<String>>,
}

impl Catalog {
    /// Open a catalog backed by a line-delimited JSON file.
    ///
    /// A missing or unreadable source yields an empty catalog; browsing
    /// degrades to "no results" rather than failing.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(RecordStore::load(path))
    }

    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            tags: OnceCell::new(),
        }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(RecordStore::from_records(records))
    }

    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The sorted tag universe, computed on first request and cached.
    pub fn all_tags(&self) -> &[String] {
        self.tags
            .get_or_init(|| cultivar_taxonomy::all_tags(self.store.records()))
    }

    /// Derived tags for a single record.
    pub fn tags_for(&self, record: &Record) -> BTreeSet<String> {
        cultivar_taxonomy::derive_tags(record)
    }

    /// Resolve a URL slug through the three-tier fallback chain.
    pub fn find_by_slug(&self, slug: &str) -> Option<&Record> {
        cultivar_slug::resolve(self.store.records(), slug)
    }

    /// Records matching a raw category tag.
    pub fn records_with_tag(&self, tag: &str) -> Vec<&Record> {
        cultivar_taxonomy::records_with_tag(self.store.records(), tag)
    }

    /// Order-preserving filtered view of the store.
    pub fn filter(&self, spec: &FilterSpec) -> Vec<&Record> {
        cultivar_filter::apply(self.store.records(), spec)
    }

    /// Up to four related records for a focal record.
    pub fn related<R: Rng + ?Sized>(&self, focal: &Record, rng: &mut R) -> Vec<&Record> {
        cultivar_related::select_related(focal, self.store.records(), rng)
    }
}
