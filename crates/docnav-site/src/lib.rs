//! Navigation queries and UI views over a validated docnav configuration.
//!
//! This crate provides:
//! - [`SiteNav`]: an immutable path index with `resolve` and breadcrumbs
//! - [`Navigation`]/[`NavItem`]: serializable navigation trees for a UI
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use docnav_config::SiteConfig;
//! use docnav_site::SiteNav;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), docnav_config::ConfigError> {
//! let config = SiteConfig::from_value(&json!({
//!     "sidebar": ["/a", { "title": "G", "children": ["/b"] }]
//! }))?;
//! let nav = SiteNav::new(Arc::new(config));
//!
//! assert!(nav.resolve("/b").is_some());
//! assert!(nav.resolve("/z").is_none());
//! # Ok(())
//! # }
//! ```

mod nav;
mod view;

pub use nav::{BreadcrumbItem, SiteNav};
pub use view::{NavItem, Navigation, ScopeInfo};
