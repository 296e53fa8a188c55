//! CLI logic for the doccheck documentation validator.
//!
//! This module contains the core CLI logic for the doccheck tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, SuiteArg};

use log::info;

use doccheck::{DoccheckError, DocsValidator, Report};

/// Run the doccheck CLI application
///
/// Loads configuration, validates the documentation tree under the given
/// root with the selected suite, and prints one line per finding followed
/// by a summary.
///
/// # Errors
///
/// Returns `DoccheckError` for:
/// - File I/O errors on the documentation root
/// - Configuration loading errors
/// - A missing or unparseable navigation manifest
pub fn run(args: &Args) -> Result<Report, DoccheckError> {
    info!(
        root = args.root,
        suite:? = args.suite;
        "Validating documentation"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let validator = DocsValidator::new(app_config);
    let report = validator.run(&args.root, args.suite.into())?;

    for finding in report.findings() {
        println!("{finding}");
    }
    println!(
        "{} error(s), {} warning(s) in {}",
        report.error_count(),
        report.warning_count(),
        args.root
    );

    Ok(report)
}
