//! Fenced code block extraction.
//!
//! A fence opens with three backticks at the start of a line, optionally
//! followed by a language tag on the same line, and closes with the next
//! line that starts with three backticks. Fences are a matched-pair
//! requirement: an opening fence with no closing fence yields no block.

use doccheck_core::CodeBlock;

const FENCE: &str = "```";

/// Extract all fenced code blocks from a page body.
///
/// Each block records its language tag (the word immediately following
/// the opening fence, if any), its literal body, and the 1-based line
/// number of the opening fence. A dangling opening fence at the end of
/// the input is dropped.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    let mut blocks = Vec::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, line)) = lines.next() {
        let Some(tag_part) = line.strip_prefix(FENCE) else {
            continue;
        };

        let language = parse_language_tag(tag_part);
        let open_line = index + 1;
        let mut body_lines = Vec::new();
        let mut closed = false;

        for (_, body_line) in lines.by_ref() {
            if body_line.starts_with(FENCE) {
                closed = true;
                break;
            }
            body_lines.push(body_line);
        }

        if closed {
            let mut body = body_lines.join("\n");
            if !body_lines.is_empty() {
                body.push('\n');
            }
            blocks.push(CodeBlock::new(language, body, open_line));
        }
        // An unterminated fence extracts nothing; the remaining input has
        // already been consumed, so scanning ends here.
    }

    blocks
}

/// Extract the diagram blocks: the subset of code blocks tagged with the
/// diagram language (case-insensitive).
pub fn extract_diagram_blocks(text: &str) -> Vec<CodeBlock> {
    extract_code_blocks(text)
        .into_iter()
        .filter(CodeBlock::is_diagram)
        .collect()
}

/// The language tag is the run of word characters (plus `#`, for `c#`)
/// immediately after the opening fence.
fn parse_language_tag(tag_part: &str) -> Option<String> {
    let end = tag_part
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '#'))
        .unwrap_or(tag_part.len());
    let tag = &tag_part[..end];
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_string())
    }
}
