//! Command-line argument definitions for the doccheck CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the documentation root, the check
//! suite, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use doccheck::Suite;

/// Command-line arguments for the doccheck validator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the documentation root
    #[arg(default_value = ".", help = "Path to the documentation root")]
    pub root: String,

    /// Check suite to run
    #[arg(short, long, value_enum, default_value_t = SuiteArg::All)]
    pub suite: SuiteArg,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Check suite selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteArg {
    /// Every check.
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

impl From<SuiteArg> for Suite {
    fn from(arg: SuiteArg) -> Self {
        match arg {
            SuiteArg::All => Suite::All,
            SuiteArg::Pages => Suite::Pages,
            SuiteArg::Links => Suite::Links,
            SuiteArg::Manifest => Suite::Manifest,
            SuiteArg::Services => Suite::Services,
        }
    }
}
