use serde::{Deserialize, Serialize};

/// One catalog item. `name` is the sole identity key; there is no numeric ID.
///
/// Every optional field may be absent or empty in the source data. Absence
/// contributes nothing to tags or filters and must never be an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub hybridizer: String,
    /// String-encoded introduction year; non-numeric values survive load and
    /// are handled (excluded) by the filter engine.
    pub year: String,

    pub ploidy: Option<String>,
    pub bloom_size: Option<String>,
    pub scape_height: Option<String>,
    pub branches: Option<String>,
    pub bud_count: Option<String>,
    pub bloom_season: Option<String>,
    pub foliage_type: Option<String>,
    pub bloom_habit: Option<String>,
    pub form: Option<String>,
    pub sculpting: Option<String>,
    pub fragrance: Option<String>,
    pub color_description: Option<String>,
    pub parentage: Option<String>,
    pub notes: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub availability: Option<String>,
    /// Opaque image reference, passed through to the presentation layer.
    pub image_url: Option<String>,
    /// Opaque external reference URL.
    pub learn_more_url: Option<String>,
    /// Alternate identifier used by hybridizers before registration.
    #[serde(rename = "seedling_#")]
    pub seedling_id: Option<String>,
}

macro_rules! with_fields {
    ($($setter:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $setter(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )*
    };
}

impl Record {
    /// A record with only the required fields set.
    pub fn new(name: impl Into<String>, hybridizer: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hybridizer: hybridizer.into(),
            year: year.into(),
            ploidy: None,
            bloom_size: None,
            scape_height: None,
            branches: None,
            bud_count: None,
            bloom_season: None,
            foliage_type: None,
            bloom_habit: None,
            form: None,
            sculpting: None,
            fragrance: None,
            color_description: None,
            parentage: None,
            notes: None,
            description: None,
            price: None,
            availability: None,
            image_url: None,
            learn_more_url: None,
            seedling_id: None,
        }
    }

    with_fields! {
        with_ploidy => ploidy,
        with_bloom_size => bloom_size,
        with_scape_height => scape_height,
        with_branches => branches,
        with_bud_count => bud_count,
        with_bloom_season => bloom_season,
        with_foliage_type => foliage_type,
        with_bloom_habit => bloom_habit,
        with_form => form,
        with_sculpting => sculpting,
        with_fragrance => fragrance,
        with_color_description => color_description,
        with_parentage => parentage,
        with_notes => notes,
        with_description => description,
        with_price => price,
        with_availability => availability,
        with_image_url => image_url,
        with_learn_more_url => learn_more_url,
        with_seedling_id => seedling_id,
    }
}

/// An optional free-text field, treating the empty string as absent.
pub fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_record() {
        let line = r#"{"name":"Blue Dolphin","hybridizer":"Smith","year":"1998","ploidy":"Diploid","color_description":"violet eye with green throat","seedling_#":"S-42"}"#;
        let record: Record = serde_json::from_str(line).unwrap();

        assert_eq!(record.name, "Blue Dolphin");
        assert_eq!(record.ploidy.as_deref(), Some("Diploid"));
        assert_eq!(record.seedling_id.as_deref(), Some("S-42"));
        assert_eq!(record.bloom_size, None);
    }

    #[test]
    fn missing_optionals_default_to_none() {
        let record: Record =
            serde_json::from_str(r#"{"name":"Plain","hybridizer":"Doe","year":"2000"}"#).unwrap();

        assert_eq!(record.form, None);
        assert_eq!(record.fragrance, None);
        assert_eq!(record.learn_more_url, None);
    }

    #[test]
    fn rejects_record_without_required_fields() {
        let result = serde_json::from_str::<Record>(r#"{"hybridizer":"Doe","year":"2000"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn non_empty_ignores_blank_text() {
        assert_eq!(non_empty(&Some("Sculpted".into())), Some("Sculpted"));
        assert_eq!(non_empty(&Some("   ".into())), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&None), None);
    }
}
