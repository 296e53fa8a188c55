//! Content tree loading.
//!
//! A [`Corpus`] is the set of content pages found under a root directory.
//! Loading walks the tree in sorted order, parses each `.mdx`/`.md` file
//! into a [`Page`], and records unreadable files instead of aborting, so
//! a single bad file cannot hide findings from the rest of the tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use doccheck_core::Page;
use doccheck_parser::parse_frontmatter;

/// A content file that could not be read.
#[derive(Debug, Clone)]
pub struct ReadFailure {
    /// Path relative to the content root, `/`-separated.
    path: String,

    /// The I/O error message.
    reason: String,
}

impl ReadFailure {
    /// Returns the path of the unreadable file, relative to the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the I/O error message.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// All content pages under a root directory.
#[derive(Debug)]
pub struct Corpus {
    root: PathBuf,
    pages: Vec<Page>,
    read_failures: Vec<ReadFailure>,
}

impl Corpus {
    /// Loads every `.mdx` and `.md` file under `root`.
    ///
    /// Hidden directories and `node_modules` are skipped. Entries are
    /// visited in sorted order so page order is stable across platforms.
    /// Files that cannot be read are recorded as [`ReadFailure`]s; only a
    /// failure to list a directory is an error.
    pub fn load(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        let mut corpus = Self {
            root: root.clone(),
            pages: Vec::new(),
            read_failures: Vec::new(),
        };
        corpus.walk(&root)?;
        Ok(corpus)
    }

    fn walk(&mut self, dir: &Path) -> io::Result<()> {
        let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .collect();
        entries.sort();

        for path in entries {
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if path.is_dir() {
                if name.starts_with('.') || name == "node_modules" {
                    continue;
                }
                self.walk(&path)?;
            } else if name.ends_with(".mdx") || name.ends_with(".md") {
                self.load_page(&path);
            }
        }
        Ok(())
    }

    fn load_page(&mut self, path: &Path) {
        let relative = self.relative_path(path);
        match fs::read_to_string(path) {
            Ok(raw) => {
                let (frontmatter, body) = parse_frontmatter(&raw);
                let has_frontmatter = raw.starts_with("---");
                log::debug!(page = relative.as_str(); "loaded content page");
                self.pages
                    .push(Page::new(relative, frontmatter, body, has_frontmatter));
            }
            Err(err) => {
                log::warn!(page = relative.as_str(); "failed to read content page: {err}");
                self.read_failures.push(ReadFailure {
                    path: relative,
                    reason: err.to_string(),
                });
            }
        }
    }

    fn relative_path(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Returns the content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the loaded pages in walk order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Returns the files that could not be read.
    pub fn read_failures(&self) -> &[ReadFailure] {
        &self.read_failures
    }

    /// Looks up a page by its extension-less slug, trying `.mdx` before
    /// `.md`.
    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        let mdx = format!("{slug}.mdx");
        let md = format!("{slug}.md");
        self.pages
            .iter()
            .find(|page| page.path() == mdx)
            .or_else(|| self.pages.iter().find(|page| page.path() == md))
    }

    /// Returns `true` when a file exists at the `/`-separated path
    /// relative to the root.
    pub fn file_exists(&self, relative: &str) -> bool {
        let mut path = self.root.clone();
        path.extend(relative.split('/'));
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_load_collects_content_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "b.mdx", "---\ntitle: B\n---\nbody");
        write(dir.path(), "a/nested.md", "nested body");
        write(dir.path(), "notes.txt", "ignored");

        let corpus = Corpus::load(dir.path()).unwrap();
        let paths: Vec<_> = corpus.pages().iter().map(Page::path).collect();

        assert_eq!(paths, vec!["a/nested.md", "b.mdx"]);
        assert!(corpus.read_failures().is_empty());
    }

    #[test]
    fn test_load_skips_hidden_and_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "visible.mdx", "body");
        write(dir.path(), ".git/hidden.mdx", "body");
        write(dir.path(), "node_modules/pkg/readme.md", "body");

        let corpus = Corpus::load(dir.path()).unwrap();

        assert_eq!(corpus.pages().len(), 1);
        assert_eq!(corpus.pages()[0].path(), "visible.mdx");
    }

    #[test]
    fn test_page_by_slug_prefers_mdx() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "guide/intro.mdx", "mdx body");
        write(dir.path(), "guide/intro.md", "md body");

        let corpus = Corpus::load(dir.path()).unwrap();
        let page = corpus.page_by_slug("guide/intro").unwrap();

        assert_eq!(page.path(), "guide/intro.mdx");
        assert!(corpus.page_by_slug("guide/missing").is_none());
    }

    #[test]
    fn test_file_exists_uses_slash_separated_paths() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "guide/intro.mdx", "body");

        let corpus = Corpus::load(dir.path()).unwrap();

        assert!(corpus.file_exists("guide/intro.mdx"));
        assert!(!corpus.file_exists("guide"));
        assert!(!corpus.file_exists("guide/other.mdx"));
    }

    #[test]
    fn test_frontmatter_parsed_into_page() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "intro.mdx",
            "---\ntitle: Intro\ndescription: Start here\n---\n\n# Hello\n",
        );

        let corpus = Corpus::load(dir.path()).unwrap();
        let page = &corpus.pages()[0];

        assert!(page.has_frontmatter());
        assert_eq!(page.field("title"), Some("Intro"));
        assert!(page.body().contains("# Hello"));
    }
}
