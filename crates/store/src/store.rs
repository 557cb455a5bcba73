use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, StoreError};
use crate::model::Record;

/// Immutable, load-ordered collection of catalog records.
///
/// Built once at process start and shared read-only from then on. There is
/// no refresh path short of constructing a new store.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Load records from a line-delimited JSON file.
    ///
    /// A missing or unreadable source degrades to an empty store so that
    /// downstream components see "no results" instead of a crash. Callers
    /// that need the cause can use [`RecordStore::try_load`].
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => store,
            Err(e) => {
                log::error!("failed to load records from {}: {e}", path.display());
                Self {
                    records: Vec::new(),
                }
            }
        }
    }

    /// Fallible variant of [`load`](Self::load).
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(Self::parse(&content))
    }

    /// Parse line-delimited JSON content.
    ///
    /// Malformed lines are quarantined individually: skipped with a warning
    /// rather than aborting the whole load. Blank lines are ignored.
    pub fn parse(content: &str) -> Self {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(idx + 1, line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    log::warn!("quarantined record: {e}");
                }
            }
        }

        if skipped > 0 {
            log::warn!("{skipped} malformed line(s) quarantined during load");
        }
        log::info!("loaded {} records", records.len());

        Self::from_records(records)
    }

    /// Build a store from already-parsed records.
    pub fn from_records(records: Vec<Record>) -> Self {
        // Names are the identity key. Duplicates are kept in load order and
        // the first occurrence wins every lookup downstream.
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.to_lowercase()) {
                log::warn!("duplicate record name: {:?}", record.name);
            }
        }
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

fn parse_line(line: usize, content: &str) -> Result<Record> {
    serde_json::from_str(content).map_err(|source| StoreError::ParseFailure { line, source })
}
