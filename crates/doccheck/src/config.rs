//! Configuration types for the doccheck validation engine.
//!
//! This module provides configuration structures that control how the
//! content tree is validated. All types implement [`serde::Deserialize`]
//! for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`NavigationConfig`] - Navigation manifest constraints.
//! - [`ServicesConfig`] - Service coverage rules.
//!
//! # Example
//!
//! ```
//! # use doccheck::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.navigation().max_depth(), 3);
//! ```

use serde::Deserialize;

/// Top-level configuration for a validation run.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Manifest file name, relative to the content root.
    #[serde(default = "default_manifest_file")]
    manifest_file: String,

    /// Navigation constraint section.
    #[serde(default)]
    navigation: NavigationConfig,

    /// Service coverage section.
    #[serde(default)]
    services: ServicesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manifest_file: default_manifest_file(),
            navigation: NavigationConfig::default(),
            services: ServicesConfig::default(),
        }
    }
}

impl AppConfig {
    /// Returns the manifest file name, relative to the content root.
    pub fn manifest_file(&self) -> &str {
        &self.manifest_file
    }

    /// Returns the navigation constraint configuration.
    pub fn navigation(&self) -> &NavigationConfig {
        &self.navigation
    }

    /// Returns the service coverage configuration.
    pub fn services(&self) -> &ServicesConfig {
        &self.services
    }
}

/// Constraints on the navigation manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    /// Maximum path-segment count for a navigation page reference.
    #[serde(default = "default_max_depth")]
    max_depth: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl NavigationConfig {
    /// Returns the maximum allowed path-segment count.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Rules for service documentation coverage.
///
/// Every configured service name must be mentioned in the overview page
/// and must have a dedicated page under `pages_dir` containing all of the
/// required depth-2 sections.
#[derive(Debug, Clone, Deserialize)]
pub struct ServicesConfig {
    /// Service names to check, matched case-insensitively.
    #[serde(default = "default_service_names")]
    names: Vec<String>,

    /// Page (extension-less) that must mention every service.
    #[serde(default = "default_overview_page")]
    overview_page: String,

    /// Directory holding one page per service.
    #[serde(default = "default_pages_dir")]
    pages_dir: String,

    /// Depth-2 headings every service page must contain.
    #[serde(default = "default_required_sections")]
    required_sections: Vec<String>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            names: default_service_names(),
            overview_page: default_overview_page(),
            pages_dir: default_pages_dir(),
            required_sections: default_required_sections(),
        }
    }
}

impl ServicesConfig {
    /// Returns the service names to check.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the extension-less path of the overview page.
    pub fn overview_page(&self) -> &str {
        &self.overview_page
    }

    /// Returns the directory holding per-service pages.
    pub fn pages_dir(&self) -> &str {
        &self.pages_dir
    }

    /// Returns the required depth-2 section headings.
    pub fn required_sections(&self) -> &[String] {
        &self.required_sections
    }
}

fn default_manifest_file() -> String {
    "mint.json".to_string()
}

fn default_max_depth() -> usize {
    3
}

fn default_overview_page() -> String {
    "architecture/overview".to_string()
}

fn default_pages_dir() -> String {
    "microservices".to_string()
}

fn default_required_sections() -> Vec<String> {
    vec!["Overview".to_string(), "Key Features".to_string()]
}

fn default_service_names() -> Vec<String> {
    [
        "frontend",
        "cartservice",
        "productcatalogservice",
        "currencyservice",
        "paymentservice",
        "shippingservice",
        "emailservice",
        "checkoutservice",
        "recommendationservice",
        "adservice",
        "loadgenerator",
        "shoppingassistantservice",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
