//! Navigation manifest checks.

use std::collections::{HashMap, HashSet};

use crate::report::{Finding, FindingCollector};

use super::Context;

/// Every navigation page reference stays within the configured depth.
pub fn depth(ctx: &Context<'_>, out: &mut FindingCollector) {
    let max_depth = ctx.config.navigation().max_depth();
    for group in ctx.manifest.navigation() {
        for page in &group.pages {
            let segments = page.split('/').count();
            if segments > max_depth {
                out.emit(Finding::error(
                    "nav-depth",
                    format!(
                        "navigation page `{page}` exceeds maximum depth {max_depth} \
                         ({segments} segments)"
                    ),
                ));
            }
        }
    }
}

/// No page path appears twice. A repeat within one group is advisory; a
/// repeat across groups is an error.
pub fn unique(ctx: &Context<'_>, out: &mut FindingCollector) {
    let mut first_group: HashMap<&str, &str> = HashMap::new();
    for group in ctx.manifest.navigation() {
        let mut seen_here: HashSet<&str> = HashSet::new();
        for page in &group.pages {
            if !seen_here.insert(page.as_str()) {
                out.emit(Finding::warning(
                    "nav-unique",
                    format!("page `{page}` listed twice in group `{}`", group.group),
                ));
                continue;
            }
            match first_group.get(page.as_str()) {
                Some(other) => out.emit(Finding::error(
                    "nav-unique",
                    format!("page `{page}` appears in groups `{other}` and `{}`", group.group),
                )),
                None => {
                    first_group.insert(page.as_str(), group.group.as_str());
                }
            }
        }
    }
}

/// Every referenced page exists as `<path>.mdx` or `<path>.md`.
pub fn pages_exist(ctx: &Context<'_>, out: &mut FindingCollector) {
    for page in ctx.manifest.all_pages() {
        let exists = ctx.corpus.file_exists(&format!("{page}.mdx"))
            || ctx.corpus.file_exists(&format!("{page}.md"));
        if !exists {
            out.emit(Finding::error(
                "nav-pages-exist",
                format!("navigation references missing page `{page}`"),
            ));
        }
    }
}

/// A group with no pages is advisory.
pub fn empty_groups(ctx: &Context<'_>, out: &mut FindingCollector) {
    for group in ctx.manifest.navigation() {
        if group.pages.is_empty() {
            out.emit(Finding::warning(
                "nav-groups",
                format!("navigation group `{}` has no pages", group.group),
            ));
        }
    }
}

/// Branding is recommended, not required: missing colors or logo entries
/// and logo files absent from disk are advisory.
pub fn branding(ctx: &Context<'_>, out: &mut FindingCollector) {
    match ctx.manifest.colors() {
        None => out.emit(Finding::warning(
            "nav-branding",
            "manifest has no colors table",
        )),
        Some(colors) => {
            for (name, value) in [
                ("primary", &colors.primary),
                ("light", &colors.light),
                ("dark", &colors.dark),
            ] {
                if value.is_none() {
                    out.emit(Finding::warning(
                        "nav-branding",
                        format!("missing recommended color `{name}`"),
                    ));
                }
            }
        }
    }

    match ctx.manifest.logo() {
        None => out.emit(Finding::warning(
            "nav-branding",
            "manifest has no logo configured",
        )),
        Some(logo) => {
            for path in logo.paths() {
                let relative = path.strip_prefix('/').unwrap_or(path);
                if !ctx.corpus.file_exists(relative) {
                    out.emit(Finding::warning(
                        "nav-branding",
                        format!("logo file `{path}` does not exist"),
                    ));
                }
            }
        }
    }
}
