//! Diagram-type keywords and structural helpers.
//!
//! A diagram block is a code block tagged with the diagram language. Its
//! body must open with one of a fixed set of diagram-type keywords, and
//! its bracket, parenthesis, and brace counts must be pairwise equal.

use crate::balance::{self, BRACKET_PAIRS};

/// Recognized diagram-type keywords, as they open the first line of a
/// diagram body.
pub const DIAGRAM_TYPES: &[&str] = &[
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "erDiagram",
    "gantt",
    "pie",
    "journey",
];

/// Returns the diagram-type keyword the body opens with, if any.
///
/// The first non-blank line (after trimming) must start with one of the
/// [`DIAGRAM_TYPES`] keywords. The match is prefix-based, so variants
/// such as `stateDiagram-v2` and `graph TD` are accepted.
pub fn diagram_type(body: &str) -> Option<&'static str> {
    let first_line = body.lines().map(str::trim).find(|line| !line.is_empty())?;
    DIAGRAM_TYPES
        .iter()
        .find(|keyword| first_line.starts_with(*keyword))
        .copied()
}

/// Returns `true` when `[]`, `()`, and `{}` counts are pairwise equal.
pub fn is_balanced(body: &str) -> bool {
    balance::pairs_balanced(body, BRACKET_PAIRS)
}
