//! Frontmatter and page-body checks.

use crate::report::{Finding, FindingCollector};

use super::Context;

/// Every page must start with a frontmatter block carrying a non-empty
/// `title`. A missing `description` is advisory only.
pub fn frontmatter(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        if !page.has_frontmatter() {
            out.emit(
                Finding::error("frontmatter", "missing frontmatter block")
                    .with_page(page.path()),
            );
            continue;
        }
        if page.field("title").is_none() {
            out.emit(
                Finding::error("frontmatter", "missing or empty `title` frontmatter field")
                    .with_page(page.path()),
            );
        }
        if page.field("description").is_none() {
            out.emit(
                Finding::warning(
                    "frontmatter",
                    "missing `description` frontmatter field",
                )
                .with_page(page.path()),
            );
        }
    }
}

/// A page whose body is empty after the frontmatter is advisory.
pub fn page_body(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.corpus.pages() {
        if page.body().trim().is_empty() {
            out.emit(
                Finding::warning("page-body", "page body is empty").with_page(page.path()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{checks::test_support::*, config::AppConfig};

    use super::*;

    #[test]
    fn test_valid_page_passes() {
        let (_dir, corpus) = corpus_from(&[(
            "intro.mdx",
            "---\ntitle: Intro\ndescription: Start here\n---\n\nBody text.\n",
        )]);
        let report = run_check(
            frontmatter,
            &corpus,
            &empty_manifest(),
            &AppConfig::default(),
        );

        assert!(report.findings().is_empty());
    }

    #[test]
    fn test_missing_frontmatter_is_one_error() {
        let (_dir, corpus) = corpus_from(&[("bare.mdx", "Just prose, no frontmatter.\n")]);
        let report = run_check(
            frontmatter,
            &corpus,
            &empty_manifest(),
            &AppConfig::default(),
        );

        assert_eq!(report.error_count(), 1);
        assert_eq!(
            rendered(&report),
            vec!["error: bare.mdx: missing frontmatter block"]
        );
    }

    #[test]
    fn test_missing_title_is_error_missing_description_is_warning() {
        let (_dir, corpus) = corpus_from(&[("page.mdx", "---\nauthor: someone\n---\nBody\n")]);
        let report = run_check(
            frontmatter,
            &corpus,
            &empty_manifest(),
            &AppConfig::default(),
        );

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
    }

    #[test]
    fn test_blank_title_counts_as_missing() {
        let (_dir, corpus) = corpus_from(&[(
            "page.mdx",
            "---\ntitle: \"   \"\ndescription: d\n---\nBody\n",
        )]);
        let report = run_check(
            frontmatter,
            &corpus,
            &empty_manifest(),
            &AppConfig::default(),
        );

        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_empty_body_is_warning() {
        let (_dir, corpus) = corpus_from(&[(
            "stub.mdx",
            "---\ntitle: Stub\ndescription: d\n---\n\n   \n",
        )]);
        let report = run_check(
            page_body,
            &corpus,
            &empty_manifest(),
            &AppConfig::default(),
        );

        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 1);
    }
}
