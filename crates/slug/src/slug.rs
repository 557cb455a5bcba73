use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left bare by `encodeURIComponent`: alphanumerics plus
/// `- _ . ! ~ * ' ( )`. Everything else is percent-encoded.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Marker sequences standing in for slashes, which cannot appear literally
/// in a path segment.
const FWD_MARKER: &str = "-fwd-";
const BACK_MARKER: &str = "-back-";

/// URL-safe identifier for a record name. Total; never fails.
///
/// Whitespace runs become single hyphens, slashes become marker sequences,
/// and the permitted naming punctuation (`' , ! . -`) survives the
/// encoding step literally. The result is lowercase.
pub fn to_slug(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }

    let hyphenated = name.trim().split_whitespace().collect::<Vec<_>>().join("-");
    let marked = hyphenated
        .replace('/', FWD_MARKER)
        .replace('\\', BACK_MARKER);

    let encoded = utf8_percent_encode(&marked, URI_COMPONENT).to_string();
    let restored = encoded
        .replace("%27", "'")
        .replace("%2C", ",")
        .replace("%21", "!")
        .replace("%2E", ".")
        .replace("%2D", "-");

    restored.to_lowercase()
}

/// Best-effort inverse of [`to_slug`].
///
/// Lossy by design: every hyphen becomes a space (including hyphens that
/// were part of the original name) and whitespace runs collapse. Callers
/// compare the result through the tiered resolver, never byte-for-byte.
pub fn name_from_slug(slug: &str) -> String {
    if slug.is_empty() {
        return String::new();
    }

    let decoded = percent_decode_str(slug).decode_utf8_lossy();
    let spaced = decoded.replace('-', " ").replace("fwd", "/").replace("back", "\\");

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(to_slug("Dream Sequence"), "dream-sequence");
        assert_eq!(to_slug("  Stacked   Spaces  "), "stacked-spaces");
    }

    #[test]
    fn permitted_punctuation_survives() {
        assert_eq!(to_slug("Hey Mr. Bud"), "hey-mr.-bud");
        assert_eq!(to_slug("Lacy Doily's"), "lacy-doily's");
        assert_eq!(to_slug("Wow, Really!"), "wow,-really!");
    }

    #[test]
    fn slashes_become_markers() {
        assert_eq!(to_slug("Either/Or"), "either-fwd-or");
        assert_eq!(to_slug("Back\\Slash"), "back-back-slash");
    }

    #[test]
    fn disallowed_symbols_are_percent_encoded() {
        assert_eq!(to_slug("Salt & Pepper"), "salt-%26-pepper");
    }

    #[test]
    fn empty_and_blank_names_yield_empty_slugs() {
        assert_eq!(to_slug(""), "");
        assert_eq!(to_slug("   "), "");
    }

    #[test]
    fn name_from_slug_restores_spacing_and_slashes() {
        assert_eq!(name_from_slug("dream-sequence"), "dream sequence");
        assert_eq!(name_from_slug("either-fwd-or"), "either / or");
        assert_eq!(name_from_slug("salt-%26-pepper"), "salt & pepper");
        assert_eq!(name_from_slug(""), "");
    }
}
