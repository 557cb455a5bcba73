use std::collections::HashSet;
use std::io::Write;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::NamedTempFile;

use cultivar_catalog::{Catalog, PageCursor};
use cultivar_filter::{FilterSpec, MatchType, YearRange};
use cultivar_slug::{normalize_name, to_slug};
use cultivar_store::Record;

fn corpus() -> Vec<Record> {
    vec![
        Record::new("Aztec Headdress", "Rice", "2004")
            .with_ploidy("Diploid")
            .with_color_description("Cream pink with a rose red eye")
            .with_bloom_season("Early-Mid, Rebloom"),
        Record::new("Blue Dolphin", "Smith", "1998")
            .with_ploidy("Diploid")
            .with_color_description("violet eye with green throat"),
        Record::new("Hey Mr. Bud", "Rice", "1999")
            .with_color_description("Yellow self")
            .with_bloom_season("Late")
            .with_foliage_type("Dormant"),
        Record::new("Lacy Doily's", "Rice", "2001")
            .with_color_description("Cream with lavender watermark")
            .with_fragrance("Light"),
        Record::new("Either/Or", "Jones", "2010")
            .with_form("Unusual form, crispate")
            .with_ploidy("Tetraploid"),
        Record::new("Dream Sequence", "Jones", "2005")
            .with_color_description("Purple with blue eye")
            .with_sculpting("Cristate relief"),
    ]
}

#[test]
fn loads_from_file_and_quarantines_bad_lines() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"name":"Aztec Headdress","hybridizer":"Rice","year":"2004"}}"#
    )
    .unwrap();
    writeln!(file, "{{broken json").unwrap();
    writeln!(
        file,
        r#"{{"name":"Blue Dolphin","hybridizer":"Smith","year":"1998"}}"#
    )
    .unwrap();

    let catalog = Catalog::open(file.path());

    let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Aztec Headdress", "Blue Dolphin"]);
}

#[test]
fn missing_source_degrades_to_an_empty_catalog() {
    let catalog = Catalog::open("/nonexistent/varieties.jsonl");

    assert!(catalog.is_empty());
    assert!(catalog.all_tags().is_empty());
    assert!(catalog.filter(&FilterSpec::default()).is_empty());
    assert_eq!(catalog.find_by_slug("anything"), None);
}

#[test]
fn tag_universe_is_sorted_and_cached() {
    let catalog = Catalog::from_records(corpus());

    let first = catalog.all_tags().to_vec();
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(first, sorted);
    assert!(first.contains(&"Rebloomer".to_string()));
    assert!(first.contains(&"Green Throat".to_string()));

    // Same cached slice on repeated access.
    assert_eq!(catalog.all_tags().as_ptr(), catalog.all_tags().as_ptr());
}

#[test]
fn every_record_round_trips_through_its_slug() {
    let catalog = Catalog::from_records(corpus());

    for record in catalog.records() {
        let resolved = catalog
            .find_by_slug(&to_slug(&record.name))
            .unwrap_or_else(|| panic!("no record for slug of {:?}", record.name));
        assert_eq!(
            normalize_name(&resolved.name),
            normalize_name(&record.name)
        );
    }
}

#[test]
fn category_listing_respects_the_producing_rule() {
    let catalog = Catalog::from_records(corpus());

    for tag in catalog.all_tags().to_vec() {
        for record in catalog.records_with_tag(&tag) {
            // Substring field matching may be broader than derivation for
            // compound tags; every returned record must still derive some tag.
            assert!(
                !catalog.tags_for(record).is_empty(),
                "{} returned for {tag} but derives nothing",
                record.name
            );
        }
    }

    // Spot checks against the derivation rules themselves.
    for tag in ["Cream", "Dormant", "Diploid", "Rebloomer"] {
        for record in catalog.records_with_tag(tag) {
            assert!(
                catalog.tags_for(record).contains(tag),
                "{} returned for {tag} without deriving it",
                record.name
            );
        }
    }
}

#[test]
fn filtering_composes_with_pagination() {
    let catalog = Catalog::from_records(corpus());

    let spec = FilterSpec {
        hybridizer: Some("rice".into()),
        ..Default::default()
    };
    let filtered = catalog.filter(&spec);
    assert_eq!(filtered.len(), 3);

    let mut cursor = PageCursor::new(2);
    cursor.reset(filtered.len());

    assert_eq!(cursor.slice(&filtered).len(), 2);
    assert!(cursor.has_more());
    assert!(cursor.advance());
    assert_eq!(cursor.slice(&filtered).len(), 3);
    assert!(!cursor.advance());

    // A narrower spec means a reset, never a stale window.
    let spec = FilterSpec {
        hybridizer: Some("rice".into()),
        match_type: MatchType::Substring,
        year_range: YearRange {
            start: Some(2000),
            end: None,
        },
        ..Default::default()
    };
    let filtered = catalog.filter(&spec);
    cursor.reset(filtered.len());
    assert_eq!(cursor.slice(&filtered).len(), filtered.len());
}

#[test]
fn filter_results_preserve_load_order() {
    let catalog = Catalog::from_records(corpus());

    let spec = FilterSpec {
        search: Some("e".into()),
        ..Default::default()
    };
    let positions: Vec<usize> = catalog
        .filter(&spec)
        .iter()
        .map(|r| {
            catalog
                .records()
                .iter()
                .position(|o| o.name == r.name)
                .unwrap()
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn related_selection_honors_the_contract() {
    let catalog = Catalog::from_records(corpus());
    let focal = catalog.records()[0].clone();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let related = catalog.related(&focal, &mut rng);

        assert_eq!(related.len(), 4.min(catalog.len() - 1), "seed {seed}");
        let names: Vec<&str> = related.iter().map(|r| r.name.as_str()).collect();
        assert!(!names.contains(&focal.name.as_str()), "seed {seed}");
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len(), "seed {seed}");
    }
}
