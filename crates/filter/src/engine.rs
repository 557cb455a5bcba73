use cultivar_store::{non_empty, Record};

use crate::spec::{FilterSpec, MatchType};

/// Apply a compound filter, preserving the relative order of `records`.
///
/// Dimensions compose by pure AND, so the result is independent of the
/// order in which they are checked.
pub fn apply<'a>(records: &'a [Record], spec: &FilterSpec) -> Vec<&'a Record> {
    records.iter().filter(|record| matches(record, spec)).collect()
}

/// Whether a single record passes every active dimension of the spec.
pub fn matches(record: &Record, spec: &FilterSpec) -> bool {
    if let Some(query) = active_text(&spec.search) {
        if !text_matches(&record.name, query, spec.match_type) {
            return false;
        }
    }

    if let Some(query) = active_text(&spec.hybridizer) {
        if !text_matches(&record.hybridizer, query, spec.hybridizer_match_type) {
            return false;
        }
    }

    if !spec.year_range.admits(&record.year) {
        return false;
    }

    if let Some(ploidy) = active_text(&spec.ploidy) {
        if record.ploidy.as_deref() != Some(ploidy) {
            return false;
        }
    }

    if !spec.bloom_size.admits(record.bloom_size.as_deref()) {
        return false;
    }
    if !spec.scape_height.admits(record.scape_height.as_deref()) {
        return false;
    }
    if !spec.branches.admits(record.branches.as_deref()) {
        return false;
    }
    if !spec.bud_count.admits(record.bud_count.as_deref()) {
        return false;
    }

    if !spec.bloom_season.is_empty() {
        let season = record.bloom_season.as_deref().unwrap_or("");
        if !spec.bloom_season.iter().any(|wanted| wanted == season) {
            return false;
        }
    }

    if spec.rebloom && !is_rebloomer(record) {
        return false;
    }

    if let Some(foliage) = active_text(&spec.foliage_type) {
        if record.foliage_type.as_deref() != Some(foliage) {
            return false;
        }
    }

    true
}

/// Any of the three free-text fields mentioning "rebloom" marks a
/// rebloomer, regardless of which one carries it.
pub fn is_rebloomer(record: &Record) -> bool {
    [&record.bloom_season, &record.bloom_habit, &record.notes]
        .into_iter()
        .any(|field| {
            non_empty(field)
                .map(|text| text.to_lowercase().contains("rebloom"))
                .unwrap_or(false)
        })
}

fn active_text(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|text| !text.is_empty())
}

fn text_matches(value: &str, query: &str, match_type: MatchType) -> bool {
    let value = value.to_lowercase();
    let query = query.to_lowercase();
    match match_type {
        MatchType::Exact => value == query,
        MatchType::Substring => value.contains(&query),
    }
}
