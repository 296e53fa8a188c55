//! Flat frontmatter parsing.
//!
//! The frontmatter block is delimited by `---` lines at the very start of
//! the file. Between the markers, each `key: value` line contributes one
//! flat string field; a single layer of matching quotes is stripped from
//! values. The contract is intentionally shallow: no nesting, no lists,
//! no type coercion. Existing corpora rely on this tolerance, so do not
//! upgrade this to a full structured-data parser.

use indexmap::IndexMap;

const MARKER: &str = "---";

/// Parse the leading frontmatter block of a page.
///
/// Returns the parsed fields and the body text that follows the block.
/// Fails soft: when the file does not start with the marker, or the
/// closing marker is missing, the field map is empty and the body is the
/// whole input.
pub fn parse_frontmatter(text: &str) -> (IndexMap<String, String>, &str) {
    let Some(rest) = text.strip_prefix(MARKER) else {
        return (IndexMap::new(), text);
    };
    let Some(rest) = rest.strip_prefix('\n') else {
        return (IndexMap::new(), text);
    };

    // Find the closing marker on its own line.
    let Some(block_len) = find_closing_marker(rest) else {
        return (IndexMap::new(), text);
    };

    let block = &rest[..block_len];
    let mut after = &rest[block_len + MARKER.len()..];
    if let Some(stripped) = after.strip_prefix('\n') {
        after = stripped;
    }

    let mut fields = IndexMap::new();
    for line in block.lines() {
        let Some(colon) = line.find(':') else {
            continue;
        };
        if colon == 0 {
            continue;
        }
        let key = line[..colon].trim();
        let value = strip_quotes(line[colon + 1..].trim());
        fields.insert(key.to_string(), value.to_string());
    }

    (fields, after)
}

/// Byte length of the frontmatter block body, up to (not including) the
/// closing marker line.
fn find_closing_marker(rest: &str) -> Option<usize> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches('\n') == MARKER {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Strip a single layer of matching single or double quotes.
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 {
        let bytes = value.as_bytes();
        let first = bytes[0];
        let last = bytes[value.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
