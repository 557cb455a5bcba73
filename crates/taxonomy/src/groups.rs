use std::fmt;

/// Display grouping over the tag universe.
///
/// Purely a presentation aid: grouping has no effect on filtering or on
/// tag derivation. Any tag outside the named memberships lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagGroup {
    Colors,
    Patterns,
    Forms,
    BloomSeason,
    Ploidy,
    Foliage,
    Other,
}

impl TagGroup {
    pub const ALL: [TagGroup; 7] = [
        TagGroup::Colors,
        TagGroup::Patterns,
        TagGroup::Forms,
        TagGroup::BloomSeason,
        TagGroup::Ploidy,
        TagGroup::Foliage,
        TagGroup::Other,
    ];

    /// The group a tag belongs to.
    pub fn of(tag: &str) -> TagGroup {
        match tag {
            "Purple" | "Lavender" | "Blue" | "Pink" | "Red" | "Yellow" | "Orange" | "Cream"
            | "White" => TagGroup::Colors,
            "Eye" | "Edge" | "Watermark" | "Green Throat" => TagGroup::Patterns,
            "Unusual Form" | "Spider" | "Crispate" | "Cascade" | "Sculpted" | "Cristate"
            | "Relief" => TagGroup::Forms,
            "Early" | "Midseason" | "Late" | "Rebloomer" => TagGroup::BloomSeason,
            "Diploid" | "Tetraploid" => TagGroup::Ploidy,
            "Dormant" | "Evergreen" | "Semi-Evergreen" => TagGroup::Foliage,
            _ => TagGroup::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TagGroup::Colors => "Colors",
            TagGroup::Patterns => "Patterns",
            TagGroup::Forms => "Forms",
            TagGroup::BloomSeason => "Bloom Season",
            TagGroup::Ploidy => "Ploidy",
            TagGroup::Foliage => "Foliage",
            TagGroup::Other => "Other",
        }
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partition a tag list into non-empty display groups, preserving the
/// incoming tag order within each group.
pub fn grouped(tags: &[String]) -> Vec<(TagGroup, Vec<&str>)> {
    TagGroup::ALL
        .iter()
        .filter_map(|&group| {
            let members: Vec<&str> = tags
                .iter()
                .map(String::as_str)
                .filter(|tag| TagGroup::of(tag) == group)
                .collect();
            (!members.is_empty()).then_some((group, members))
        })
        .collect()
}
