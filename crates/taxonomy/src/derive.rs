use std::collections::BTreeSet;

use cultivar_store::{non_empty, Record};

/// Hue vocabulary: lowercase search term mapped to its display tag.
///
/// Shared with the related-item selector for color similarity, so extending
/// the palette means extending this table and nothing else. Synonyms are
/// deliberately not matched ("violet" is not "purple").
pub const HUES: &[(&str, &str)] = &[
    ("purple", "Purple"),
    ("lavender", "Lavender"),
    ("blue", "Blue"),
    ("pink", "Pink"),
    ("red", "Red"),
    ("yellow", "Yellow"),
    ("orange", "Orange"),
    ("cream", "Cream"),
    ("white", "White"),
];

const PATTERNS: &[(&str, &str)] = &[
    ("eye", "Eye"),
    ("edge", "Edge"),
    ("watermark", "Watermark"),
    ("throat", "Green Throat"),
];

const FORMS: &[(&str, &str)] = &[
    ("unusual", "Unusual Form"),
    ("spider", "Spider"),
    ("crispate", "Crispate"),
    ("cascade", "Cascade"),
];

const SEASONS: &[(&str, &str)] = &[
    ("early", "Early"),
    ("mid", "Midseason"),
    ("late", "Late"),
    ("rebloom", "Rebloomer"),
];

const SCULPTING: &[(&str, &str)] = &[("cristate", "Cristate"), ("relief", "Relief")];

/// Hue terms present in a free-text color description.
pub fn hues_in(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    HUES.iter()
        .filter(|(term, _)| lowered.contains(term))
        .map(|(term, _)| *term)
        .collect()
}

fn scan(text: &str, table: &[(&str, &str)], tags: &mut BTreeSet<String>) {
    let lowered = text.to_lowercase();
    for (term, tag) in table {
        if lowered.contains(term) {
            tags.insert((*tag).to_string());
        }
    }
}

/// Derive the categorical tag set for one record.
///
/// Rules are independent and additive; a single field can trigger several
/// tags and no rule ever suppresses another.
pub fn derive_tags(record: &Record) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();

    if let Some(ploidy) = non_empty(&record.ploidy) {
        tags.insert(ploidy.to_string());
    }
    if let Some(foliage) = non_empty(&record.foliage_type) {
        tags.insert(foliage.to_string());
    }
    if let Some(season) = non_empty(&record.bloom_season) {
        scan(season, SEASONS, &mut tags);
    }
    if let Some(color) = non_empty(&record.color_description) {
        scan(color, HUES, &mut tags);
        scan(color, PATTERNS, &mut tags);
    }
    if let Some(form) = non_empty(&record.form) {
        scan(form, FORMS, &mut tags);
    }
    if let Some(sculpting) = non_empty(&record.sculpting) {
        tags.insert("Sculpted".to_string());
        scan(sculpting, SCULPTING, &mut tags);
    }
    if non_empty(&record.fragrance).is_some() {
        tags.insert("Fragrant".to_string());
    }

    tags
}

/// Sorted union of derived tags across the whole collection.
pub fn all_tags(records: &[Record]) -> Vec<String> {
    let mut union = BTreeSet::new();
    for record in records {
        union.extend(derive_tags(record));
    }
    union.into_iter().collect()
}
