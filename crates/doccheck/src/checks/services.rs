//! Service documentation coverage checks.

use doccheck_parser::extract_headings;

use crate::report::{Finding, FindingCollector};

use super::Context;

/// Every configured service name must occur in the designated overview
/// page, matched as a case-insensitive substring.
pub fn coverage(ctx: &Context<'_>, out: &mut FindingCollector) {
    if ctx.config.services().names().is_empty() {
        return;
    }
    let slug = ctx.config.services().overview_page();
    let Some(overview) = ctx.corpus.page_by_slug(slug) else {
        out.emit(Finding::error(
            "service-coverage",
            format!("overview page `{slug}` not found"),
        ));
        return;
    };

    let body = overview.body().to_lowercase();
    for name in ctx.config.services().names() {
        if !body.contains(&name.to_lowercase()) {
            out.emit(
                Finding::error(
                    "service-coverage",
                    format!("service `{name}` is not mentioned in `{slug}`"),
                )
                .with_page(overview.path()),
            );
        }
    }
}

/// Every service has a page of its own under the configured directory,
/// with a titled and described frontmatter block and every required
/// depth-2 section.
pub fn pages(ctx: &Context<'_>, out: &mut FindingCollector) {
    let services = ctx.config.services();
    for name in services.names() {
        let slug = format!("{}/{name}", services.pages_dir());
        let Some(page) = ctx.corpus.page_by_slug(&slug) else {
            out.emit(Finding::error(
                "service-pages",
                format!("service `{name}` has no page under `{}`", services.pages_dir()),
            ));
            continue;
        };

        if !page.has_frontmatter()
            || page.field("title").is_none()
            || page.field("description").is_none()
        {
            out.emit(
                Finding::error(
                    "service-pages",
                    format!("service page for `{name}` lacks titled frontmatter"),
                )
                .with_page(page.path()),
            );
        }

        let headings: Vec<String> = extract_headings(page.body(), 2)
            .into_iter()
            .map(|heading| heading.to_lowercase())
            .collect();
        for section in services.required_sections() {
            let wanted = section.to_lowercase();
            if !headings.iter().any(|heading| heading.starts_with(&wanted)) {
                out.emit(
                    Finding::error(
                        "service-pages",
                        format!("service page for `{name}` is missing section `{section}`"),
                    )
                    .with_page(page.path()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{checks::test_support::*, config::AppConfig};

    use super::*;

    fn two_service_config() -> AppConfig {
        toml::from_str(
            r#"
            [services]
            names = ["cartservice", "frontend"]
        "#,
        )
        .unwrap()
    }

    fn service_page(title: &str) -> String {
        format!(
            "---\ntitle: {title}\ndescription: About {title}\n---\n\n\
             ## Overview\n\nText.\n\n## Key Features\n\n- item\n"
        )
    }

    #[test]
    fn test_coverage_passes_when_all_mentioned() {
        let (_dir, corpus) = corpus_from(&[(
            "architecture/overview.mdx",
            "---\ntitle: O\ndescription: d\n---\nCartService talks to the Frontend.\n",
        )]);
        let report = run_check(
            coverage,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert!(report.findings().is_empty());
    }

    #[test]
    fn test_coverage_missing_mention_is_error() {
        let (_dir, corpus) = corpus_from(&[(
            "architecture/overview.mdx",
            "---\ntitle: O\ndescription: d\n---\nOnly the frontend here.\n",
        )]);
        let report = run_check(
            coverage,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert_eq!(report.error_count(), 1);
        assert!(rendered(&report)[0].contains("`cartservice`"));
    }

    #[test]
    fn test_coverage_missing_overview_is_single_error() {
        let (_dir, corpus) = corpus_from(&[]);
        let report = run_check(
            coverage,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert_eq!(report.error_count(), 1);
        assert!(rendered(&report)[0].contains("overview page"));
    }

    #[test]
    fn test_service_pages_complete() {
        let cart = service_page("Cart Service");
        let front = service_page("Frontend");
        let (_dir, corpus) = corpus_from(&[
            ("microservices/cartservice.mdx", cart.as_str()),
            ("microservices/frontend.mdx", front.as_str()),
        ]);
        let report = run_check(
            pages,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert!(report.findings().is_empty());
    }

    #[test]
    fn test_missing_service_page_is_error() {
        let cart = service_page("Cart Service");
        let (_dir, corpus) = corpus_from(&[("microservices/cartservice.mdx", cart.as_str())]);
        let report = run_check(
            pages,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert_eq!(report.error_count(), 1);
        assert!(rendered(&report)[0].contains("`frontend`"));
    }

    #[test]
    fn test_missing_section_reported_per_section() {
        let (_dir, corpus) = corpus_from(&[
            (
                "microservices/cartservice.mdx",
                "---\ntitle: Cart\ndescription: d\n---\n\n## Overview\n\nText.\n",
            ),
            (
                "microservices/frontend.mdx",
                service_page("Frontend").as_str(),
            ),
        ]);
        let report = run_check(
            pages,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert_eq!(report.error_count(), 1);
        assert!(rendered(&report)[0].contains("`Key Features`"));
    }

    #[test]
    fn test_section_match_is_case_insensitive_prefix() {
        let (_dir, corpus) = corpus_from(&[
            (
                "microservices/cartservice.mdx",
                "---\ntitle: Cart\ndescription: d\n---\n\n\
                 ## overview\n\n## key features and more\n",
            ),
            (
                "microservices/frontend.mdx",
                service_page("Frontend").as_str(),
            ),
        ]);
        let report = run_check(
            pages,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert!(report.findings().is_empty());
    }

    #[test]
    fn test_untitled_service_page_is_error() {
        let (_dir, corpus) = corpus_from(&[
            (
                "microservices/cartservice.mdx",
                "## Overview\n\n## Key Features\n",
            ),
            (
                "microservices/frontend.mdx",
                service_page("Frontend").as_str(),
            ),
        ]);
        let report = run_check(
            pages,
            &corpus,
            &empty_manifest(),
            &two_service_config(),
        );

        assert_eq!(report.error_count(), 1);
        assert!(rendered(&report)[0].contains("lacks titled frontmatter"));
    }
}
