//! Navigation manifest model.
//!
//! The manifest is a single structured record describing the site name,
//! the ordered navigation groups, and optional branding (colors, logo).
//! All types implement [`serde::Deserialize`]; the manifest file itself is
//! JSON and is loaded by the validator crate.

use serde::Deserialize;

/// The navigation manifest for a documentation site.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Site name.
    name: String,

    /// Ordered navigation groups.
    navigation: Vec<NavGroup>,

    /// Optional color configuration.
    #[serde(default)]
    colors: Option<Colors>,

    /// Optional logo configuration.
    #[serde(default)]
    logo: Option<Logo>,
}

impl Manifest {
    /// Returns the site name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the navigation groups in manifest order.
    pub fn navigation(&self) -> &[NavGroup] {
        &self.navigation
    }

    /// Returns the color configuration, if present.
    pub fn colors(&self) -> Option<&Colors> {
        self.colors.as_ref()
    }

    /// Returns the logo configuration, if present.
    pub fn logo(&self) -> Option<&Logo> {
        self.logo.as_ref()
    }

    /// Returns every page reference across all groups, flattened in
    /// manifest order.
    pub fn all_pages(&self) -> impl Iterator<Item = &str> {
        self.navigation
            .iter()
            .flat_map(|group| group.pages.iter().map(String::as_str))
    }
}

/// One named navigation group: a label and an ordered list of page paths.
#[derive(Debug, Clone, Deserialize)]
pub struct NavGroup {
    /// Group label shown in the sidebar.
    pub group: String,

    /// Ordered page paths, relative to the content root, without
    /// extensions.
    #[serde(default)]
    pub pages: Vec<String>,
}

/// Recommended site colors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Colors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
}

/// Logo configuration: either a single path or a light/dark pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Logo {
    /// A single logo path.
    Path(String),
    /// Separate light and dark logo paths.
    Themed {
        #[serde(default)]
        light: Option<String>,
        #[serde(default)]
        dark: Option<String>,
    },
}

impl Logo {
    /// Returns every configured logo path.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            Logo::Path(path) => vec![path.as_str()],
            Logo::Themed { light, dark } => light
                .iter()
                .chain(dark.iter())
                .map(String::as_str)
                .collect(),
        }
    }
}
