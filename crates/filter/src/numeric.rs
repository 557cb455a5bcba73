/// Parse the leading numeric prefix of a free-text measurement.
///
/// Catalog measurements carry units and annotations (`6.5"`, `32 in.`,
/// `5 way branching`), so a strict full-string parse would reject nearly
/// everything. Only the prefix is read; a value with no numeric prefix is
/// `None` and fails whichever range bound is active.
pub fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_dot = false;

    for (idx, ch) in trimmed.char_indices() {
        let ok = match ch {
            '0'..='9' => true,
            '.' if !seen_dot => {
                seen_dot = true;
                true
            }
            '+' | '-' if idx == 0 => true,
            _ => false,
        };
        if !ok {
            break;
        }
        end = idx + ch.len_utf8();
    }

    trimmed[..end].parse().ok()
}
