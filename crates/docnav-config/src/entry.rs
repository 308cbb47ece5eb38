//! Navigation entries: page leaves and titled groups.
//!
//! The sidebar is an ordered tree of [`NavEntry`] values. Entry order is
//! significant and preserved from the source document. The tree is built
//! once by the loader and never mutated afterwards, so any number of
//! concurrent readers may traverse it without coordination.

use serde::Serialize;

/// A single documentation page referenced by path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeafEntry {
    /// Page path, interpreted relative to the site's base path.
    pub path: String,
    /// Optional display text overriding the path in navigation UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An ordered collection of child entries under a display title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupEntry {
    /// Display title. Required; recommended unique among siblings.
    pub title: String,
    /// Optional page path for the group's own landing page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether the group renders collapsed by default.
    pub collapsable: bool,
    /// Child entries in document order. May be empty.
    pub children: Vec<NavEntry>,
}

/// Navigation entry: a page leaf or a titled group of entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// A page reference.
    Leaf(LeafEntry),
    /// A titled group of child entries.
    Group(GroupEntry),
}

impl NavEntry {
    /// Path this entry links to, if any.
    ///
    /// Leaves always have a path; groups only when they declare a landing
    /// page.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.path),
            Self::Group(group) => group.path.as_deref(),
        }
    }

    /// Display title for navigation UI.
    ///
    /// Leaves fall back to their path when no display text is set.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Leaf(leaf) => leaf.text.as_deref().unwrap_or(&leaf.path),
            Self::Group(group) => &group.title,
        }
    }
}

/// Lazy depth-first traversal of all leaf page paths.
///
/// Yields paths in pre-order, children before later siblings, matching the
/// document order of the sidebar. The iterator holds only borrowed slice
/// iterators; it is `Clone`, restartable from [`crate::SiteConfig::pages`],
/// and independent of any other walker over the same tree.
#[derive(Clone, Debug)]
pub struct Pages<'a> {
    stack: Vec<std::slice::Iter<'a, NavEntry>>,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(entries: &'a [NavEntry]) -> Self {
        Self {
            stack: vec![entries.iter()],
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.last_mut() {
            match current.next() {
                Some(NavEntry::Leaf(leaf)) => return Some(&leaf.path),
                Some(NavEntry::Group(group)) => self.stack.push(group.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(path: &str) -> NavEntry {
        NavEntry::Leaf(LeafEntry {
            path: path.to_owned(),
            text: None,
        })
    }

    fn group(title: &str, children: Vec<NavEntry>) -> NavEntry {
        NavEntry::Group(GroupEntry {
            title: title.to_owned(),
            path: None,
            collapsable: true,
            children,
        })
    }

    #[test]
    fn test_pages_empty_sidebar() {
        let entries: Vec<NavEntry> = Vec::new();
        assert_eq!(Pages::new(&entries).count(), 0);
    }

    #[test]
    fn test_pages_preorder_children_before_siblings() {
        let entries = vec![
            leaf("/a"),
            group(
                "First",
                vec![leaf("/b"), group("Nested", vec![leaf("/c")]), leaf("/d")],
            ),
            leaf("/e"),
        ];

        let paths: Vec<&str> = Pages::new(&entries).collect();
        assert_eq!(paths, ["/a", "/b", "/c", "/d", "/e"]);
    }

    #[test]
    fn test_pages_skips_empty_groups() {
        let entries = vec![group("Empty", Vec::new()), leaf("/only")];
        let paths: Vec<&str> = Pages::new(&entries).collect();
        assert_eq!(paths, ["/only"]);
    }

    #[test]
    fn test_pages_is_restartable() {
        let entries = vec![leaf("/a"), group("G", vec![leaf("/b")])];
        let first: Vec<&str> = Pages::new(&entries).collect();
        let second: Vec<&str> = Pages::new(&entries).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pages_clone_walks_independently() {
        let entries = vec![leaf("/a"), leaf("/b"), leaf("/c")];
        let mut walker = Pages::new(&entries);
        assert_eq!(walker.next(), Some("/a"));

        let mut forked = walker.clone();
        assert_eq!(walker.next(), Some("/b"));
        assert_eq!(forked.next(), Some("/b"));
        assert_eq!(forked.next(), Some("/c"));
    }

    #[test]
    fn test_entry_title_falls_back_to_path() {
        let plain = leaf("/guide/");
        assert_eq!(plain.title(), "/guide/");

        let labeled = NavEntry::Leaf(LeafEntry {
            path: "/".to_owned(),
            text: Some("Home".to_owned()),
        });
        assert_eq!(labeled.title(), "Home");
    }

    #[test]
    fn test_entry_path_for_group_without_landing_page() {
        let section = group("Section", vec![leaf("/a")]);
        assert_eq!(section.path(), None);
        assert_eq!(section.title(), "Section");
    }
}
