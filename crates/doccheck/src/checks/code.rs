//! Code block checks: language tags, non-empty bodies, and shallow
//! per-language plausibility.
//!
//! Diagram-tagged blocks are excluded here; they have their own checks.

use doccheck_core::{
    balance::{self, BRACKET_PAIRS},
    language,
};
use doccheck_parser::extract_code_blocks;

use crate::report::{Finding, FindingCollector};

use super::Context;

/// Every code block must carry a tag from the language allow-list.
pub fn language(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        for block in code_blocks(page.body()) {
            match block.language() {
                None => out.emit(
                    Finding::error("code-language", "code block has no language tag")
                        .with_page(page.path())
                        .with_line(block.line()),
                ),
                Some(tag) if !language::is_recognized(tag) => out.emit(
                    Finding::error(
                        "code-language",
                        format!("unknown code language `{tag}`"),
                    )
                    .with_page(page.path())
                    .with_line(block.line()),
                ),
                Some(_) => {}
            }
        }
    }
}

/// A code block body must be non-empty after trimming.
pub fn non_empty(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        for block in code_blocks(page.body()) {
            if block.body().trim().is_empty() {
                out.emit(
                    Finding::error("code-non-empty", "empty code block")
                        .with_page(page.path())
                        .with_line(block.line()),
                );
            }
        }
    }
}

/// Shallow per-language plausibility. Empty bodies are skipped; the
/// non-empty check already reports them.
pub fn syntax(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        for block in code_blocks(page.body()) {
            let Some(tag) = block.language() else {
                continue;
            };
            if block.body().trim().is_empty() {
                continue;
            }
            if let Some(reason) = implausibility(&tag.to_lowercase(), block.body()) {
                out.emit(
                    Finding::error(
                        "code-syntax",
                        format!("implausible `{tag}` block: {reason}"),
                    )
                    .with_page(page.path())
                    .with_line(block.line()),
                );
            }
        }
    }
}

/// Mismatched `{`/`}` counts over the whole page body. Advisory only:
/// prose and inline JSX legitimately use lone braces.
pub fn page_balance(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        let open = balance::count(page.body(), '{');
        let close = balance::count(page.body(), '}');
        if open != close {
            out.emit(
                Finding::warning(
                    "page-balance",
                    format!("mismatched `{{`/`}}` counts across the page ({open} vs {close})"),
                )
                .with_page(page.path()),
            );
        }
    }
}

/// Returns the reason a block body is implausible for `tag`, or `None`.
fn implausibility(tag: &str, body: &str) -> Option<String> {
    match tag {
        "json" => serde_json::from_str::<serde_json::Value>(body)
            .err()
            .map(|err| format!("does not parse as JSON: {err}")),
        "yaml" | "yml" => body
            .contains('\t')
            .then(|| "contains tab characters".to_string()),
        "bash" | "sh" | "shell" => (body.contains("<<<") && !body.contains(">>>"))
            .then(|| "unterminated `<<<` sequence".to_string()),
        "javascript" | "js" | "typescript" | "ts" => (!balance::pairs_balanced(
            body,
            BRACKET_PAIRS,
        ))
        .then(|| "unbalanced delimiters".to_string()),
        "go" | "golang" => (balance::count(body, '{') != balance::count(body, '}'))
            .then(|| "unbalanced braces".to_string()),
        "python" | "py" => body
            .lines()
            .all(|line| line.trim().is_empty())
            .then(|| "no non-blank lines".to_string()),
        "protobuf" | "proto" => (!["message", "service", "syntax"]
            .iter()
            .any(|keyword| body.contains(keyword)))
        .then(|| "contains none of `message`, `service`, `syntax`".to_string()),
        _ => None,
    }
}

fn code_blocks(body: &str) -> impl Iterator<Item = doccheck_core::CodeBlock> {
    extract_code_blocks(body)
        .into_iter()
        .filter(|block| !block.is_diagram())
}
