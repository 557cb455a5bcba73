use cultivar_store::Record;

use crate::slug::{name_from_slug, to_slug};

/// Resolve a slug to a record through a three-tier fallback chain.
///
/// 1. Forward transform: `to_slug(name)` equals the input slug.
/// 2. Approximate inverse: the name recovered from the slug equals a
///    record name case-insensitively.
/// 3. Normalized: both sides stripped of punctuation and compared, which
///    tolerates drift in either direction.
///
/// The first record in load order wins a tie. No match is `None` -- a
/// normal outcome for the caller to render, not an error.
pub fn resolve<'a>(records: &'a [Record], slug: &str) -> Option<&'a Record> {
    let wanted = slug.to_lowercase();
    if let Some(record) = records.iter().find(|r| to_slug(&r.name) == wanted) {
        return Some(record);
    }

    let candidate = name_from_slug(slug).to_lowercase();
    if let Some(record) = records.iter().find(|r| r.name.to_lowercase() == candidate) {
        return Some(record);
    }

    let normalized = normalize_name(&candidate);
    if normalized.is_empty() {
        return None;
    }
    records.iter().find(|r| normalize_name(&r.name) == normalized)
}

/// Strip everything but alphanumerics, underscores and spaces, collapse
/// whitespace, and lowercase. Both sides of a tier-3 comparison go through
/// this, so punctuation drift cancels out.
pub fn normalize_name(name: &str) -> String {
    let kept: String = name
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_' || ch.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn corpus() -> Vec<Record> {
        vec![
            Record::new("Dream Sequence", "Jones", "2005"),
            Record::new("Hey Mr. Bud", "Rice", "1999"),
            Record::new("Lacy Doily's", "Rice", "2001"),
            Record::new("Either/Or", "Smith", "2010"),
            Record::new("Two-Part Name", "Smith", "2012"),
        ]
    }

    fn resolve_name<'a>(records: &'a [Record], slug: &str) -> Option<&'a str> {
        resolve(records, slug).map(|r| r.name.as_str())
    }

    #[test]
    fn tier_one_matches_the_forward_transform() {
        let records = corpus();
        for record in &records {
            assert_eq!(
                resolve_name(&records, &to_slug(&record.name)),
                Some(record.name.as_str()),
                "round trip failed for {:?}",
                record.name
            );
        }
    }

    #[test]
    fn tier_one_is_case_insensitive() {
        let records = corpus();
        assert_eq!(
            resolve_name(&records, "DREAM-SEQUENCE"),
            Some("Dream Sequence")
        );
    }

    #[test]
    fn tier_two_recovers_names_from_spaced_slugs() {
        let records = corpus();
        // Not a valid forward transform (spaces instead of hyphens survive
        // percent-decoding), but the approximate inverse finds the name.
        assert_eq!(
            resolve_name(&records, "dream%20sequence"),
            Some("Dream Sequence")
        );
    }

    #[test]
    fn tier_three_tolerates_punctuation_drift() {
        let records = corpus();
        // Apostrophe dropped by an external linker.
        assert_eq!(resolve_name(&records, "lacy-doilys"), Some("Lacy Doily's"));
        // Period dropped.
        assert_eq!(resolve_name(&records, "hey-mr-bud"), Some("Hey Mr. Bud"));
    }

    #[test]
    fn hyphenated_names_resolve_despite_lossy_hyphens() {
        let records = corpus();
        assert_eq!(
            resolve_name(&records, "two-part-name"),
            Some("Two-Part Name")
        );
    }

    #[test]
    fn unknown_slug_is_none_not_an_error() {
        let records = corpus();
        assert_eq!(resolve(&records, "no-such-cultivar"), None);
        assert_eq!(resolve(&records, ""), None);
    }

    #[test]
    fn first_record_wins_under_duplicate_names() {
        let records = vec![
            Record::new("Twin", "Rice", "2001"),
            Record::new("Twin", "Smith", "2002"),
        ];
        assert_eq!(resolve(&records, "twin").unwrap().hybridizer, "Rice");
    }

    #[test]
    fn normalize_strips_punctuation_and_collapses_space() {
        assert_eq!(normalize_name("Lacy  Doily's!"), "lacy doilys");
        assert_eq!(normalize_name("Hey Mr. Bud"), "hey mr bud");
    }
}
