use cultivar_store::{non_empty, Record};

/// Records whose tag-contributing fields substring-match a raw tag.
///
/// The tag text is matched case-insensitively against the free-text fields
/// that feed tag derivation. "Rebloomer" is special-cased: it checks
/// `bloom_season` alone, since "rebloomer" never appears literally in the
/// data.
pub fn records_with_tag<'a>(records: &'a [Record], tag: &str) -> Vec<&'a Record> {
    let needle = tag.trim().to_lowercase();

    records
        .iter()
        .filter(|record| {
            if needle == "rebloomer" {
                return contains(&record.bloom_season, "rebloom");
            }

            [
                &record.color_description,
                &record.bloom_season,
                &record.foliage_type,
                &record.ploidy,
                &record.form,
                &record.sculpting,
            ]
            .into_iter()
            .any(|field| contains(field, &needle))
        })
        .collect()
}

fn contains(field: &Option<String>, needle: &str) -> bool {
    non_empty(field)
        .map(|text| text.to_lowercase().contains(needle))
        .unwrap_or(false)
}
