//! Validated site configuration.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entry::{NavEntry, Pages};

/// Per-locale site metadata, keyed in [`SiteConfig::locales`] by the locale
/// root path (e.g., `/`, `/fr/`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Locale {
    /// Language tag (e.g., `en-US`).
    pub lang: String,
    /// Display title for this locale.
    pub title: String,
}

/// Site author metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Author name.
    pub name: String,
    /// Contact link (homepage, profile, mailto).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Complete validated configuration for one documentation-build run.
///
/// Constructed once by the loader (see [`SiteConfig::from_value`]) and
/// immutable afterwards. There is no ambient singleton: callers construct
/// the value explicitly at process start and pass it by reference to the
/// rendering collaborator. All queries are read-only, so a shared
/// `SiteConfig` can be read from any number of threads without locking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SiteConfig {
    /// URL prefix for the whole site. Starts and ends with `/`.
    pub base_path: String,
    /// Site title.
    pub title: String,
    /// Static assets directory handed to the external renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<String>,
    /// Locale descriptors keyed by locale root path. Keys are unique.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub locales: BTreeMap<String, Locale>,
    /// Author metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Label shown next to the last-updated timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Enabled plugins with plugin-specific options, opaque to this model.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub plugins: BTreeMap<String, serde_json::Value>,
    /// Top-level navigation entries in document order.
    pub sidebar: Vec<NavEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_owned(),
            title: String::new(),
            assets_dir: None,
            locales: BTreeMap::new(),
            author: None,
            last_updated: None,
            plugins: BTreeMap::new(),
            sidebar: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Iterate over all page paths in depth-first document order.
    ///
    /// The traversal is lazy and restartable; each call returns an
    /// independent walker over the shared immutable tree.
    #[must_use]
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(&self.sidebar)
    }

    /// Total number of leaf pages in the sidebar.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages().count()
    }
}
