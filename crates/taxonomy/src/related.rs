use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Hand-authored cross-navigation between categories.
///
/// Navigational metadata only: the table feeds "related categories" links
/// and plays no part in filtering or in related-item selection.
static RELATED: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let entries: &[(&str, &[&str])] = &[
        // Colors
        ("Purple", &["Lavender", "Blue", "Eye", "Watermark"]),
        ("Lavender", &["Purple", "Blue", "Pink", "Eye"]),
        ("Blue", &["Lavender", "Purple", "Eye", "Green Throat"]),
        ("Pink", &["Lavender", "Red", "Cream", "Watermark"]),
        ("Red", &["Pink", "Orange", "Edge"]),
        ("Yellow", &["Cream", "Orange", "Green Throat"]),
        ("Orange", &["Red", "Yellow", "Edge"]),
        ("Cream", &["Yellow", "White", "Pink"]),
        ("White", &["Cream", "Green Throat", "Edge"]),
        // Patterns
        ("Eye", &["Watermark", "Purple", "Lavender", "Blue"]),
        ("Edge", &["Orange", "Red", "White", "Yellow"]),
        ("Watermark", &["Eye", "Purple", "Lavender"]),
        ("Green Throat", &["Blue", "Yellow", "White"]),
        // Forms
        ("Unusual Form", &["Spider", "Crispate", "Cascade"]),
        ("Spider", &["Unusual Form", "Crispate"]),
        ("Crispate", &["Spider", "Unusual Form", "Cascade"]),
        ("Cascade", &["Crispate", "Unusual Form"]),
        // Ploidy
        ("Diploid", &["Tetraploid", "Cristate", "Unusual Form"]),
        ("Tetraploid", &["Diploid", "Edge", "Relief"]),
        // Foliage
        ("Dormant", &["Semi-Evergreen", "Early", "Late"]),
        ("Evergreen", &["Semi-Evergreen", "Rebloomer"]),
        ("Semi-Evergreen", &["Dormant", "Evergreen"]),
        // Bloom season
        ("Early", &["Midseason", "Dormant"]),
        ("Midseason", &["Early", "Late"]),
        ("Late", &["Midseason", "Rebloomer"]),
        ("Rebloomer", &["Late", "Evergreen", "Semi-Evergreen"]),
        // Special features
        ("Sculpted", &["Cristate", "Relief", "Unusual Form"]),
        ("Cristate", &["Sculpted", "Diploid", "Unusual Form"]),
        ("Relief", &["Sculpted", "Tetraploid"]),
        ("Fragrant", &["Rebloomer", "Cream", "Yellow"]),
    ];
    entries.iter().copied().collect()
});

/// Related categories for a tag, at most four. Tags outside the table
/// resolve to an empty slice.
pub fn related_categories(tag: &str) -> &'static [&'static str] {
    RELATED.get(tag).copied().unwrap_or(&[])
}
