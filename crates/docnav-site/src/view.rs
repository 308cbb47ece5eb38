//! Serializable navigation views for a UI.
//!
//! Converts the sidebar tree into [`NavItem`] values the external renderer
//! can serialize directly, optionally scoped to a single group.

use serde::Serialize;

use docnav_config::{GroupEntry, NavEntry};

use crate::nav::SiteNav;

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target path. Empty for groups without a landing page.
    pub path: String,
    /// Collapsed-by-default flag. Only set for groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsable: Option<bool>,
    /// Child navigation items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Information about the group a navigation view is scoped to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScopeInfo {
    /// Group title.
    pub title: String,
    /// Group landing path, empty if none.
    pub path: String,
}

/// Result of a navigation query.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Navigation {
    /// Navigation items for this scope.
    pub items: Vec<NavItem>,
    /// Current scope (None at root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<ScopeInfo>,
}

impl SiteNav {
    /// Build a navigation view.
    ///
    /// An empty `scope` returns the whole sidebar. Otherwise `scope` names a
    /// group title; the first matching group (depth-first) provides the
    /// items. An unknown scope yields an empty view.
    #[must_use]
    pub fn navigation(&self, scope: &str) -> Navigation {
        if scope.is_empty() {
            return Navigation {
                items: self.config().sidebar.iter().map(build_nav_item).collect(),
                scope: None,
            };
        }

        let Some(group) = find_group(&self.config().sidebar, scope) else {
            return Navigation::default();
        };

        Navigation {
            items: group.children.iter().map(build_nav_item).collect(),
            scope: Some(ScopeInfo {
                title: group.title.clone(),
                path: group.path.clone().unwrap_or_default(),
            }),
        }
    }
}

fn build_nav_item(entry: &NavEntry) -> NavItem {
    match entry {
        NavEntry::Leaf(leaf) => NavItem {
            title: entry.title().to_owned(),
            path: leaf.path.clone(),
            collapsable: None,
            children: Vec::new(),
        },
        NavEntry::Group(group) => NavItem {
            title: group.title.clone(),
            path: group.path.clone().unwrap_or_default(),
            collapsable: Some(group.collapsable),
            children: group.children.iter().map(build_nav_item).collect(),
        },
    }
}

/// Depth-first search for the first group with the given title.
fn find_group<'a>(entries: &'a [NavEntry], title: &str) -> Option<&'a GroupEntry> {
    for entry in entries {
        if let NavEntry::Group(group) = entry {
            if group.title == title {
                return Some(group);
            }
            if let Some(found) = find_group(&group.children, title) {
                return Some(found);
            }
        }
    }
    None
}
