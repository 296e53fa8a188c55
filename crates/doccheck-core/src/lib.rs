//! Doccheck Core Types and Definitions
//!
//! This crate provides the foundational types for the doccheck documentation
//! validator. It includes:
//!
//! - **Pages**: Content pages with frontmatter and body ([`page::Page`])
//! - **Blocks**: Fenced code and diagram blocks ([`block`] module)
//! - **Links**: Extracted link targets and their classification ([`link`] module)
//! - **Manifest**: The navigation manifest model ([`manifest`] module)
//! - **Languages**: The code-block language allow-list ([`language`] module)
//! - **Diagrams**: Diagram-type keywords and balance helpers ([`diagram`] module)
//! - **Severity**: Error/warning classification for findings ([`severity::Severity`])

pub mod balance;
pub mod block;
pub mod diagram;
pub mod language;
pub mod link;
pub mod manifest;
pub mod page;
pub mod severity;

pub use block::CodeBlock;
pub use link::{Link, LinkSyntax};
pub use manifest::{Manifest, NavGroup};
pub use page::Page;
pub use severity::Severity;
