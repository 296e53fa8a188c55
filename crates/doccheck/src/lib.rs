//! Doccheck - structural validation for documentation corpora.
//!
//! Loading, extraction, and checking for MDX/markdown documentation trees
//! with a JSON navigation manifest. Checks are grouped into suites and
//! produce a report of findings; validation outcomes never abort a run.

pub mod config;

mod checks;
mod corpus;
mod error;
mod report;

pub use doccheck_core::{CodeBlock, Link, Manifest, Page, Severity};

pub use corpus::{Corpus, ReadFailure};
pub use error::DoccheckError;
pub use report::{Finding, FindingCollector, Report};

use std::fs;
use std::path::Path;

use log::{debug, info};

use checks::{Context, Group, REGISTRY};
use config::AppConfig;

/// The set of checks a run evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Suite {
    /// Every check.
    #[default]
    All,
    /// Per-page structure: frontmatter, code blocks, diagrams.
    Pages,
    /// Internal link resolution.
    Links,
    /// Navigation manifest structure.
    Manifest,
    /// Service documentation coverage.
    Services,
}

impl Suite {
    fn selects(self, group: Group) -> bool {
        match self {
            Suite::All => true,
            Suite::Pages => group == Group::Pages,
            Suite::Links => group == Group::Links,
            Suite::Manifest => group == Group::Navigation,
            Suite::Services => group == Group::Services,
        }
    }
}

/// Runner for validating a documentation tree.
///
/// # Examples
///
/// ```rust,no_run
/// use doccheck::{DocsValidator, Suite, config::AppConfig};
///
/// let validator = DocsValidator::new(AppConfig::default());
/// let report = validator.run("docs", Suite::All)
///     .expect("docs tree should be loadable");
///
/// for finding in report.findings() {
///     println!("{finding}");
/// }
/// assert!(!report.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct DocsValidator {
    config: AppConfig,
}

impl DocsValidator {
    /// Create a new validator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Validate the tree rooted at `root` with the selected suite.
    ///
    /// Loads the navigation manifest and the content pages, evaluates every
    /// registered check in the suite, and returns the ordered findings.
    /// Unreadable content files become error findings; an unreadable or
    /// unparseable manifest is fatal.
    ///
    /// # Errors
    ///
    /// Returns `DoccheckError` when the root cannot be walked or the
    /// manifest is missing or fails to parse.
    pub fn run(&self, root: impl AsRef<Path>, suite: Suite) -> Result<Report, DoccheckError> {
        let root = root.as_ref();
        info!(root:% = root.display(); "validating documentation tree");

        let manifest = self.load_manifest(root)?;
        let corpus = Corpus::load(root)?;
        debug!(
            pages = corpus.pages().len(),
            groups = manifest.navigation().len();
            "corpus loaded"
        );

        let mut collector = FindingCollector::new();
        for failure in corpus.read_failures() {
            collector.emit(
                Finding::error(
                    "corpus",
                    format!("unreadable content file: {}", failure.reason()),
                )
                .with_page(failure.path()),
            );
        }

        let ctx = Context {
            corpus: &corpus,
            manifest: &manifest,
            config: &self.config,
        };
        for check in REGISTRY {
            if !suite.selects(check.group) {
                continue;
            }
            debug!(check = check.name; "running check");
            (check.run)(&ctx, &mut collector);
        }

        let report = collector.finish();
        info!(
            errors = report.error_count(),
            warnings = report.warning_count();
            "validation finished"
        );
        Ok(report)
    }

    fn load_manifest(&self, root: &Path) -> Result<Manifest, DoccheckError> {
        let path = root.join(self.config.manifest_file());
        if !path.is_file() {
            return Err(DoccheckError::ManifestMissing {
                path: path.display().to_string(),
            });
        }
        let src = fs::read_to_string(&path)?;
        serde_json::from_str(&src)
            .map_err(|err| DoccheckError::new_manifest_error(path.display().to_string(), err, src))
    }
}
