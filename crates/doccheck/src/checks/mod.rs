//! The check registry.
//!
//! Every validation rule is a [`Check`]: a name, the [`Group`] it belongs
//! to, and a function over the shared [`Context`]. The runner evaluates
//! the registry entries selected by the suite, in registry order; a check
//! reports through the collector and never aborts the run.

pub mod code;
pub mod diagrams;
pub mod frontmatter;
pub mod links;
pub mod navigation;
pub mod services;

use doccheck_core::Manifest;

use crate::{config::AppConfig, corpus::Corpus, report::FindingCollector};

/// The group a check belongs to. Suites select checks by group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// Per-page structure: frontmatter, code blocks, diagrams.
    Pages,
    /// Internal link resolution.
    Links,
    /// Navigation manifest structure.
    Navigation,
    /// Service documentation coverage.
    Services,
}

/// Shared read-only inputs for a validation run.
pub struct Context<'a> {
    pub corpus: &'a Corpus,
    pub manifest: &'a Manifest,
    pub config: &'a AppConfig,
}

/// One registered validation rule.
pub struct Check {
    pub name: &'static str,
    pub group: Group,
    pub run: fn(&Context<'_>, &mut FindingCollector),
}

/// Every check, in evaluation order.
pub const REGISTRY: &[Check] = &[
    Check {
        name: "frontmatter",
        group: Group::Pages,
        run: frontmatter::frontmatter,
    },
    Check {
        name: "page-body",
        group: Group::Pages,
        run: frontmatter::page_body,
    },
    Check {
        name: "code-language",
        group: Group::Pages,
        run: code::language,
    },
    Check {
        name: "code-non-empty",
        group: Group::Pages,
        run: code::non_empty,
    },
    Check {
        name: "code-syntax",
        group: Group::Pages,
        run: code::syntax,
    },
    Check {
        name: "page-balance",
        group: Group::Pages,
        run: code::page_balance,
    },
    Check {
        name: "diagram-type",
        group: Group::Pages,
        run: diagrams::diagram_type,
    },
    Check {
        name: "diagram-balance",
        group: Group::Pages,
        run: diagrams::balance,
    },
    Check {
        name: "links",
        group: Group::Links,
        run: links::internal,
    },
    Check {
        name: "nav-depth",
        group: Group::Navigation,
        run: navigation::depth,
    },
    Check {
        name: "nav-unique",
        group: Group::Navigation,
        run: navigation::unique,
    },
    Check {
        name: "nav-pages-exist",
        group: Group::Navigation,
        run: navigation::pages_exist,
    },
    Check {
        name: "nav-groups",
        group: Group::Navigation,
        run: navigation::empty_groups,
    },
    Check {
        name: "nav-branding",
        group: Group::Navigation,
        run: navigation::branding,
    },
    Check {
        name: "service-coverage",
        group: Group::Services,
        run: services::coverage,
    },
    Check {
        name: "service-pages",
        group: Group::Services,
        run: services::pages,
    },
];

#[cfg(test)]
pub(crate) mod test_support {
    //! Fixture helpers shared by the check module tests.

    use std::fs;

    use doccheck_core::Manifest;
    use tempfile::TempDir;

    use crate::{config::AppConfig, corpus::Corpus, report::Report};

    use super::{Context, FindingCollector};

    /// Writes `(relative path, contents)` files into a fresh temp tree and
    /// loads it as a corpus.
    pub fn corpus_from(files: &[(&str, &str)]) -> (TempDir, Corpus) {
        let dir = tempfile::tempdir().unwrap();
        for (relative, contents) in files {
            let path = dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, contents).unwrap();
        }
        let corpus = Corpus::load(dir.path()).unwrap();
        (dir, corpus)
    }

    /// Parses a manifest literal.
    pub fn manifest_from(json: &str) -> Manifest {
        serde_json::from_str(json).unwrap()
    }

    /// An empty single-group manifest for checks that ignore navigation.
    pub fn empty_manifest() -> Manifest {
        manifest_from(r#"{"name": "Docs", "navigation": []}"#)
    }

    /// Runs a single check function over the given inputs.
    pub fn run_check(
        check: fn(&Context<'_>, &mut FindingCollector),
        corpus: &Corpus,
        manifest: &Manifest,
        config: &AppConfig,
    ) -> Report {
        let ctx = Context {
            corpus,
            manifest,
            config,
        };
        let mut collector = FindingCollector::new();
        check(&ctx, &mut collector);
        collector.finish()
    }

    /// Collects `(severity, message)` pairs for assertions.
    pub fn rendered(report: &Report) -> Vec<String> {
        report
            .findings()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
