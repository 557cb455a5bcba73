use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use cultivar_store::{non_empty, Record};
use cultivar_taxonomy::hues_in;

/// Upper bound on the related set.
pub const RELATED_LIMIT: usize = 4;

/// At most this many slots go to same-hybridizer matches, leaving room for
/// color-similar picks even under a prolific hybridizer.
const HYBRIDIZER_SLOTS: usize = 2;

/// Pick up to four related records for a focal record.
///
/// The focal record is never returned and names never repeat across tiers.
/// The result length is `min(4, N - 1)` for a collection of N distinct
/// names. Tier priority and the count bound are contractual; membership
/// within a tier depends on the shuffle.
pub fn select_related<'a, R: Rng + ?Sized>(
    focal: &Record,
    all: &'a [Record],
    rng: &mut R,
) -> Vec<&'a Record> {
    let mut related: Vec<&'a Record> = Vec::with_capacity(RELATED_LIMIT);
    let mut used: HashSet<&str> = HashSet::new();
    used.insert(focal.name.as_str());

    let mut same_hybridizer: Vec<&Record> = all
        .iter()
        .filter(|r| r.name != focal.name && r.hybridizer == focal.hybridizer)
        .collect();

    let focal_hues = non_empty(&focal.color_description)
        .map(hues_in)
        .unwrap_or_default();
    let mut similar_colors: Vec<&Record> = all
        .iter()
        .filter(|r| {
            r.name != focal.name
                && !same_hybridizer.iter().any(|h| h.name == r.name)
                && shares_a_hue(&focal_hues, r)
        })
        .collect();

    same_hybridizer.shuffle(rng);
    for record in same_hybridizer.into_iter().take(HYBRIDIZER_SLOTS) {
        if used.insert(record.name.as_str()) {
            related.push(record);
        }
    }

    similar_colors.shuffle(rng);
    for record in similar_colors {
        if related.len() >= RELATED_LIMIT {
            break;
        }
        if used.insert(record.name.as_str()) {
            related.push(record);
        }
    }

    if related.len() < RELATED_LIMIT {
        let mut remaining: Vec<&Record> = all
            .iter()
            .filter(|r| !used.contains(r.name.as_str()))
            .collect();
        remaining.shuffle(rng);
        for record in remaining {
            if related.len() >= RELATED_LIMIT {
                break;
            }
            if used.insert(record.name.as_str()) {
                related.push(record);
            }
        }
    }

    related
}

fn shares_a_hue(focal_hues: &[&str], record: &Record) -> bool {
    if focal_hues.is_empty() {
        return false;
    }
    non_empty(&record.color_description)
        .map(|text| {
            let hues = hues_in(text);
            focal_hues.iter().any(|hue| hues.contains(hue))
        })
        .unwrap_or(false)
}
