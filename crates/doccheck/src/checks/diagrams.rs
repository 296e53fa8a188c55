//! Diagram block checks: type keyword and delimiter balance.

use doccheck_core::{
    balance::{self, BRACKET_PAIRS},
    diagram,
};
use doccheck_parser::extract_diagram_blocks;

use crate::report::{Finding, FindingCollector};

use super::Context;

/// A diagram body must open with a recognized type keyword.
pub fn diagram_type(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        for block in extract_diagram_blocks(page.body()) {
            if diagram::diagram_type(block.body()).is_none() {
                out.emit(
                    Finding::error(
                        "diagram-type",
                        "diagram does not open with a recognized type keyword",
                    )
                    .with_page(page.path())
                    .with_line(block.line()),
                );
            }
        }
    }
}

/// Bracket, parenthesis, and brace counts must be pairwise equal.
pub fn balance(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        for block in extract_diagram_blocks(page.body()) {
            for &(open, close) in BRACKET_PAIRS {
                let opens = balance::count(block.body(), open);
                let closes = balance::count(block.body(), close);
                if opens != closes {
                    out.emit(
                        Finding::error(
                            "diagram-balance",
                            format!(
                                "unbalanced `{open}`/`{close}` in diagram ({opens} vs {closes})"
                            ),
                        )
                        .with_page(page.path())
                        .with_line(block.line()),
                    );
                }
            }
        }
    }
}
