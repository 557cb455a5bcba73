use serde::{Deserialize, Serialize};

use crate::numeric::leading_number;

/// How a text dimension compares against a record field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    #[default]
    Substring,
}

/// Inclusive numeric bounds over a free-text measurement field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeFilter {
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Whether a raw field value passes the bounds. With any bound active,
    /// an absent or unparsable value fails; it never passes by default.
    pub fn admits(&self, raw: Option<&str>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(value) = raw.and_then(leading_number) else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Inclusive bounds over the string-encoded introduction year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearRange {
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl YearRange {
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn admits(&self, raw: &str) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(year) = leading_number(raw).map(|y| y as i32) else {
            return false;
        };
        self.start.map_or(true, |start| year >= start) && self.end.map_or(true, |end| year <= end)
    }
}

/// The set of active narrowing constraints for one evaluation.
///
/// Never persisted; the owning UI rebuilds the result from scratch whenever
/// any dimension changes. `Default` means "no constraints" on every
/// dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Name search text.
    pub search: Option<String>,
    pub match_type: MatchType,

    /// Attribution (hybridizer) search text.
    pub hybridizer: Option<String>,
    pub hybridizer_match_type: MatchType,

    pub year_range: YearRange,

    /// Exact ploidy value.
    pub ploidy: Option<String>,

    pub bloom_size: RangeFilter,
    pub scape_height: RangeFilter,
    pub branches: RangeFilter,
    pub bud_count: RangeFilter,

    /// Raw `bloom_season` values; a record must carry one of them verbatim.
    /// Distinct from the substring-derived season tags.
    pub bloom_season: Vec<String>,

    /// Any of bloom_season, bloom_habit, notes mentioning "rebloom".
    pub rebloom: bool,

    /// Exact foliage type value.
    pub foliage_type: Option<String>,
}
