//! Navigation index over a validated configuration.
//!
//! Provides [`SiteNav`] for exact path lookups and breadcrumb building.
//!
//! # Architecture
//!
//! The sidebar tree lives in the shared [`SiteConfig`] and is never copied.
//! `SiteNav` walks it once at construction and records, for every reachable
//! path, the index trail from the sidebar root to its entry. Lookups are an
//! O(1) hash probe followed by an O(d) trail walk where d is the entry
//! depth.
//!
//! # Thread Safety
//!
//! The index is immutable after construction. `SiteNav` holds the
//! configuration behind an `Arc`, so any number of rendering workers can
//! share one index (or build their own over the same configuration) with no
//! locking.

use std::collections::HashMap;
use std::sync::Arc;

use docnav_config::{NavEntry, Pages, SiteConfig};

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path. Empty when the group has no landing page.
    pub path: String,
}

/// Immutable path index over a validated [`SiteConfig`].
pub struct SiteNav {
    config: Arc<SiteConfig>,
    /// Exact path to index trail from the sidebar root.
    path_index: HashMap<String, Vec<usize>>,
}

impl SiteNav {
    /// Build the index for a validated configuration.
    ///
    /// Indexes leaf paths and group landing paths. When the same path
    /// appears more than once the first occurrence wins; later ones are
    /// logged and left out of the index.
    #[must_use]
    pub fn new(config: Arc<SiteConfig>) -> Self {
        let mut path_index = HashMap::new();
        let mut trail = Vec::new();
        index_entries(&config.sidebar, &mut trail, &mut path_index);

        Self { config, path_index }
    }

    /// The underlying configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Look up an entry by exact path.
    ///
    /// Matches leaf paths and group landing paths, case-sensitively, with
    /// no prefix matching. A miss is a normal outcome, not an error.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&NavEntry> {
        let trail = self.path_index.get(path)?;
        entry_at(&self.config.sidebar, trail)
    }

    /// Ancestor group titles for the entry at `path`, root-first.
    ///
    /// The entry itself is not included. Unknown paths get no breadcrumbs.
    #[must_use]
    pub fn breadcrumbs(&self, path: &str) -> Vec<BreadcrumbItem> {
        let Some(trail) = self.path_index.get(path) else {
            return Vec::new();
        };

        let mut items = Vec::new();
        let mut entries = self.config.sidebar.as_slice();
        for &index in &trail[..trail.len().saturating_sub(1)] {
            let NavEntry::Group(group) = &entries[index] else {
                break;
            };
            items.push(BreadcrumbItem {
                title: group.title.clone(),
                path: group.path.clone().unwrap_or_default(),
            });
            entries = &group.children;
        }
        items
    }

    /// All page paths in sidebar order, for link checkers and sitemaps.
    #[must_use]
    pub fn pages(&self) -> Pages<'_> {
        self.config.pages()
    }
}

/// Record index trails for all entries, depth-first.
fn index_entries(
    entries: &[NavEntry],
    trail: &mut Vec<usize>,
    path_index: &mut HashMap<String, Vec<usize>>,
) {
    for (i, entry) in entries.iter().enumerate() {
        trail.push(i);
        if let Some(path) = entry.path() {
            if path_index.contains_key(path) {
                tracing::warn!(path, "duplicate navigation path, keeping the first occurrence");
            } else {
                path_index.insert(path.to_owned(), trail.clone());
            }
        }
        if let NavEntry::Group(group) = entry {
            index_entries(&group.children, trail, path_index);
        }
        trail.pop();
    }
}

/// Follow an index trail from the sidebar root to its entry.
fn entry_at<'a>(mut entries: &'a [NavEntry], trail: &[usize]) -> Option<&'a NavEntry> {
    let mut found = None;
    for &index in trail {
        let entry = entries.get(index)?;
        entries = match entry {
            NavEntry::Group(group) => &group.children,
            NavEntry::Leaf(_) => &[],
        };
        found = Some(entry);
    }
    found
}

#[cfg(test)]
mod tests {
    // SiteNav is shared across rendering workers
    static_assertions::assert_impl_all!(super::SiteNav: Send, Sync);

    use serde_json::json;

    use super::*;

    fn nav(raw: serde_json::Value) -> SiteNav {
        SiteNav::new(Arc::new(SiteConfig::from_value(&raw).unwrap()))
    }

    fn tutorial_nav() -> SiteNav {
        nav(json!({
            "basePath": "/docs/",
            "sidebar": [
                "/a",
                {
                    "title": "G",
                    "path": "/g/",
                    "children": [
                        "/b",
                        { "title": "Inner", "children": ["/c"] }
                    ]
                }
            ]
        }))
    }

    #[test]
    fn test_resolve_leaf() {
        let nav = tutorial_nav();

        let entry = nav.resolve("/b").unwrap();
        assert_eq!(entry.path(), Some("/b"));
        assert!(matches!(entry, NavEntry::Leaf(_)));
    }

    #[test]
    fn test_resolve_group_landing_path() {
        let nav = tutorial_nav();

        let entry = nav.resolve("/g/").unwrap();
        assert!(matches!(entry, NavEntry::Group(group) if group.title == "G"));
    }

    #[test]
    fn test_resolve_miss_is_none() {
        let nav = tutorial_nav();
        assert!(nav.resolve("/z").is_none());
    }

    #[test]
    fn test_resolve_is_case_sensitive_and_exact() {
        let nav = tutorial_nav();
        assert!(nav.resolve("/B").is_none());
        assert!(nav.resolve("/b/").is_none());
        assert!(nav.resolve("b").is_none());
    }

    #[test]
    fn test_resolve_round_trips_every_flattened_path() {
        let nav = tutorial_nav();

        let paths: Vec<String> = nav.pages().map(str::to_owned).collect();
        assert_eq!(paths, ["/a", "/b", "/c"]);

        for path in &paths {
            let entry = nav.resolve(path).unwrap();
            assert_eq!(entry.path(), Some(path.as_str()));
        }
    }

    #[test]
    fn test_breadcrumbs_for_nested_leaf() {
        let nav = tutorial_nav();

        let crumbs = nav.breadcrumbs("/c");
        assert_eq!(
            crumbs,
            [
                BreadcrumbItem {
                    title: "G".to_owned(),
                    path: "/g/".to_owned(),
                },
                BreadcrumbItem {
                    title: "Inner".to_owned(),
                    path: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_breadcrumbs_for_top_level_leaf_empty() {
        let nav = tutorial_nav();
        assert!(nav.breadcrumbs("/a").is_empty());
    }

    #[test]
    fn test_breadcrumbs_for_unknown_path_empty() {
        let nav = tutorial_nav();
        assert!(nav.breadcrumbs("/nope").is_empty());
    }

    #[test]
    fn test_duplicate_path_keeps_first_occurrence() {
        let nav = nav(json!({
            "sidebar": [
                { "title": "A", "children": ["/shared/"] },
                { "title": "B", "children": ["/shared/"] }
            ]
        }));

        // Both occurrences flatten; the index resolves to the first.
        assert_eq!(nav.pages().count(), 2);
        let crumbs = nav.breadcrumbs("/shared/");
        assert_eq!(crumbs.len(), 1);
        assert_eq!(crumbs[0].title, "A");
    }

    #[test]
    fn test_shared_across_threads() {
        let nav = Arc::new(tutorial_nav());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let nav = Arc::clone(&nav);
                std::thread::spawn(move || {
                    assert!(nav.resolve("/b").is_some());
                    assert_eq!(nav.pages().count(), 3);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_empty_sidebar() {
        let nav = nav(json!({}));
        assert!(nav.resolve("/").is_none());
        assert_eq!(nav.pages().count(), 0);
    }
}
