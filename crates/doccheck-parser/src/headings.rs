//! Heading extraction.

/// Extract all heading labels at the given depth.
///
/// A heading at depth `level` is a line starting with exactly `level`
/// `#` characters followed by at least one space. The returned labels
/// are trimmed; deeper and shallower headings are ignored.
pub fn extract_headings(text: &str, level: usize) -> Vec<String> {
    if level == 0 {
        return Vec::new();
    }

    text.lines()
        .filter_map(|line| {
            let hashes = line.chars().take_while(|&c| c == '#').count();
            if hashes != level {
                return None;
            }
            let rest = &line[hashes..];
            let label = rest.strip_prefix(' ')?;
            Some(label.trim().to_string())
        })
        .filter(|label| !label.is_empty())
        .collect()
}
