//! # Doccheck Parser
//!
//! The extraction layer of the doccheck documentation validator. This
//! crate provides deterministic, side-effect-free functions that turn raw
//! page text into the typed entities defined in `doccheck-core`:
//!
//! 1. **Frontmatter** - flat `key: value` header parsing ([`parse_frontmatter`])
//! 2. **Fences** - paired code fence scanning ([`extract_code_blocks`],
//!    [`extract_diagram_blocks`])
//! 3. **Headings** - heading labels at a given depth ([`extract_headings`])
//! 4. **Links** - inline and attribute link targets ([`extract_links`])
//!
//! All functions fail soft: malformed input yields fewer entities, never
//! an error.
//!
//! ## Usage
//!
//! ```
//! use doccheck_parser::{extract_code_blocks, parse_frontmatter};
//!
//! let text = "---\ntitle: Intro\n---\n\n```json\n{\"a\": 1}\n```\n";
//! let (fields, body) = parse_frontmatter(text);
//! assert_eq!(fields.get("title").map(String::as_str), Some("Intro"));
//!
//! let blocks = extract_code_blocks(body);
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].language(), Some("json"));
//! ```

mod fences;
mod frontmatter;
mod headings;
mod links;


pub use fences::{extract_code_blocks, extract_diagram_blocks};
pub use frontmatter::parse_frontmatter;
pub use headings::extract_headings;
pub use links::extract_links;
