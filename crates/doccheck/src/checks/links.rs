//! Internal link resolution.
//!
//! External targets (`http://`, `https://`, `mailto:`, in-page `#`
//! anchors) are skipped. Internal targets are resolved after stripping
//! query strings and anchors, relative to the content root when
//! `/`-prefixed and to the page directory otherwise, trying in order:
//! the exact path, the path with `.mdx`, with `.md`, and as a directory
//! index (`/index.mdx`).

use doccheck_parser::extract_links;

use crate::report::{Finding, FindingCollector};

use super::Context;

/// Every internal link must resolve to an existing file.
pub fn internal(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        for link in extract_links(page.body()) {
            if link.is_external() {
                continue;
            }
            let target = link.clean_target();
            if target.is_empty() {
                continue;
            }

            let base = match target.strip_prefix('/') {
                Some(rest) => rest.to_string(),
                None if page.dir().is_empty() => target.to_string(),
                None => format!("{}/{}", page.dir(), target),
            };
            let candidates = [
                base.clone(),
                format!("{base}.mdx"),
                format!("{base}.md"),
                format!("{base}/index.mdx"),
            ];

            if !candidates
                .iter()
                .any(|candidate| ctx.corpus.file_exists(candidate))
            {
                out.emit(
                    Finding::error(
                        "links",
                        format!("broken internal link `{}`", link.target()),
                    )
                    .with_page(page.path())
                    .with_line(link.line()),
                );
            }
        }
    }
}
