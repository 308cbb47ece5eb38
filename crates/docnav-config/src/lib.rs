//! Navigation configuration model for docnav.
//!
//! Validates the statically authored navigation/site configuration of a
//! documentation site and exposes it as an immutable [`SiteConfig`] value
//! for an external rendering collaborator.
//!
//! The sidebar is an ordered tree of [`NavEntry`] values: page leaves and
//! titled groups. Loading is fail-fast and atomic; any structurally invalid
//! entry rejects the whole document with a [`ConfigError`] naming the
//! entry's position.
//!
//! # Quick Start
//!
//! ```
//! use docnav_config::SiteConfig;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), docnav_config::ConfigError> {
//! let config = SiteConfig::from_value(&json!({
//!     "basePath": "/docs/",
//!     "sidebar": ["/a", { "title": "G", "children": ["/b", "/c"] }]
//! }))?;
//!
//! let pages: Vec<&str> = config.pages().collect();
//! assert_eq!(pages, ["/a", "/b", "/c"]);
//! # Ok(())
//! # }
//! ```

mod config;
mod entry;
mod error;
mod loader;

pub use config::{Author, Locale, SiteConfig};
pub use entry::{GroupEntry, LeafEntry, NavEntry, Pages};
pub use error::{ConfigError, Position, Segment};
