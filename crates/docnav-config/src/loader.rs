//! Loading and structural validation.
//!
//! The canonical input is an already-parsed document
//! ([`serde_json::Value`]), matching how the surrounding build tooling
//! hands the configuration over. Convenience constructors parse JSON and
//! TOML text, and [`SiteConfig::load`] reads a file and dispatches on its
//! extension.
//!
//! Validation is fail-fast and atomic: the first structural problem aborts
//! the load with a [`ConfigError::Invalid`] carrying the entry's
//! [`Position`]. There is no partial acceptance; documented defaults apply
//! only when a field is simply absent.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::{Author, Locale, SiteConfig};
use crate::entry::{GroupEntry, LeafEntry, NavEntry};
use crate::error::{ConfigError, Position};

impl SiteConfig {
    /// Validate an already-parsed configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for the first structurally invalid
    /// entry, identified by its position from the document root.
    pub fn from_value(raw: &Value) -> Result<Self, ConfigError> {
        parse_config(raw)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(document: &str) -> Result<Self, ConfigError> {
        let raw: Value = serde_json::from_str(document)?;
        parse_config(&raw)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let raw: toml::Value = toml::from_str(document)?;
        let raw = serde_json::to_value(raw)?;
        parse_config(&raw)
    }

    /// Load and validate a configuration file (`.toml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist,
    /// [`ConfigError::UnknownFormat`] for unrecognized extensions, and the
    /// parse/validation errors of the underlying format otherwise.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ConfigError::UnknownFormat(other.unwrap_or("").to_owned())),
        }
    }
}

/// First present key from `keys`, with the key that matched.
fn first_of<'a>(
    object: &'a Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, &'a Value)> {
    keys.iter()
        .find_map(|&key| object.get(key).map(|value| (key, value)))
}

fn expect_str<'a>(value: &'a Value, position: &Position) -> Result<&'a str, ConfigError> {
    value
        .as_str()
        .ok_or_else(|| ConfigError::invalid(position.clone(), "expected a string"))
}

fn expect_non_empty_str<'a>(
    value: &'a Value,
    position: &Position,
) -> Result<&'a str, ConfigError> {
    let text = expect_str(value, position)?;
    if text.is_empty() {
        return Err(ConfigError::invalid(
            position.clone(),
            "expected a non-empty string",
        ));
    }
    Ok(text)
}

fn parse_config(raw: &Value) -> Result<SiteConfig, ConfigError> {
    let root = Position::root();
    let Some(object) = raw.as_object() else {
        return Err(ConfigError::invalid(
            root,
            "configuration root must be an object",
        ));
    };

    let mut config = SiteConfig::default();

    if let Some((key, value)) = first_of(object, &["basePath", "base"]) {
        let position = root.key(key);
        let base = expect_str(value, &position)?;
        if !base.starts_with('/') || !base.ends_with('/') {
            return Err(ConfigError::invalid(
                position,
                "base path must start and end with '/'",
            ));
        }
        config.base_path = base.to_owned();
    }

    if let Some(value) = object.get("title") {
        config.title = expect_str(value, &root.key("title"))?.to_owned();
    }

    if let Some((key, value)) = first_of(object, &["public", "assetsDir"]) {
        config.assets_dir = Some(expect_non_empty_str(value, &root.key(key))?.to_owned());
    }

    if let Some(value) = object.get("locales") {
        config.locales = parse_locales(value, &root.key("locales"))?;
    }

    if let Some(value) = object.get("author") {
        config.author = Some(parse_author(value, &root.key("author"))?);
    }

    if let Some(value) = object.get("lastUpdated") {
        config.last_updated = Some(expect_str(value, &root.key("lastUpdated"))?.to_owned());
    }

    if let Some(value) = object.get("plugins") {
        config.plugins = parse_plugins(value, &root.key("plugins"))?;
    }

    if let Some((key, value)) = first_of(object, &["sidebar", "navbar"]) {
        config.sidebar = parse_entries(value, &root.key(key))?;
    }

    Ok(config)
}

/// Parse an ordered list of navigation entries.
fn parse_entries(raw: &Value, position: &Position) -> Result<Vec<NavEntry>, ConfigError> {
    let Some(items) = raw.as_array() else {
        return Err(ConfigError::invalid(
            position.clone(),
            "expected an array of entries",
        ));
    };

    let entries = items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_entry(item, &position.index(i)))
        .collect::<Result<Vec<_>, _>>()?;

    // Duplicate sibling titles break lookup determinism; tolerated with a warning.
    let mut seen = BTreeSet::new();
    for entry in &entries {
        if let NavEntry::Group(group) = entry
            && !seen.insert(group.title.as_str())
        {
            tracing::warn!(title = %group.title, position = %position, "duplicate group title among siblings");
        }
    }

    Ok(entries)
}

fn parse_entry(raw: &Value, position: &Position) -> Result<NavEntry, ConfigError> {
    match raw {
        Value::String(path) => {
            if path.is_empty() {
                return Err(ConfigError::invalid(
                    position.clone(),
                    "page path must not be empty",
                ));
            }
            Ok(NavEntry::Leaf(LeafEntry {
                path: path.clone(),
                text: None,
            }))
        }
        Value::Object(map) if map.contains_key("children") => parse_group(map, position),
        Value::Object(map) => match map.get("link") {
            Some(link) => parse_labeled_leaf(link, map.get("text"), position),
            None => Err(ConfigError::invalid(
                position.clone(),
                "entry object needs either children (group) or link (leaf)",
            )),
        },
        _ => Err(ConfigError::invalid(
            position.clone(),
            "entry must be a path string or an object",
        )),
    }
}

/// Parse a `{ text, link }` object into a labeled leaf.
fn parse_labeled_leaf(
    link: &Value,
    text: Option<&Value>,
    position: &Position,
) -> Result<NavEntry, ConfigError> {
    let path = expect_non_empty_str(link, &position.key("link"))?.to_owned();

    let text = match text {
        Some(value) => Some(expect_str(value, &position.key("text"))?.to_owned()),
        None => None,
    };

    Ok(NavEntry::Leaf(LeafEntry { path, text }))
}

fn parse_group(map: &Map<String, Value>, position: &Position) -> Result<NavEntry, ConfigError> {
    let title = match first_of(map, &["title", "text"]) {
        None => {
            return Err(ConfigError::invalid(
                position.clone(),
                "group is missing a title",
            ));
        }
        Some((key, value)) => expect_non_empty_str(value, &position.key(key))?.to_owned(),
    };

    let path = match map.get("path") {
        Some(value) => Some(expect_non_empty_str(value, &position.key("path"))?.to_owned()),
        None => None,
    };

    let collapsable = match map.get("collapsable") {
        Some(Value::Bool(flag)) => *flag,
        Some(_) => {
            return Err(ConfigError::invalid(
                position.key("collapsable"),
                "collapsable must be a boolean",
            ));
        }
        None => true,
    };

    // Presence is guaranteed by the caller's dispatch.
    let children = parse_entries(
        map.get("children").unwrap_or(&Value::Null),
        &position.key("children"),
    )?;

    Ok(NavEntry::Group(GroupEntry {
        title,
        path,
        collapsable,
        children,
    }))
}

fn parse_locale(raw: &Value, position: &Position) -> Result<Locale, ConfigError> {
    let Some(map) = raw.as_object() else {
        return Err(ConfigError::invalid(
            position.clone(),
            "locale must be an object",
        ));
    };

    let lang = map
        .get("lang")
        .ok_or_else(|| ConfigError::invalid(position.clone(), "locale is missing a lang"))
        .and_then(|value| expect_non_empty_str(value, &position.key("lang")))?
        .to_owned();

    let title = map
        .get("title")
        .ok_or_else(|| ConfigError::invalid(position.clone(), "locale is missing a title"))
        .and_then(|value| expect_str(value, &position.key("title")))?
        .to_owned();

    Ok(Locale { lang, title })
}

/// Parse locale descriptors.
///
/// Accepts the map form (locale root path to descriptor) and the list form
/// (descriptors carrying their own `path`). Only the list form can express
/// duplicate keys; they are rejected.
fn parse_locales(
    raw: &Value,
    position: &Position,
) -> Result<BTreeMap<String, Locale>, ConfigError> {
    match raw {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| Ok((key.clone(), parse_locale(value, &position.key(key))?)))
            .collect(),
        Value::Array(items) => {
            let mut locales = BTreeMap::new();
            for (i, item) in items.iter().enumerate() {
                let item_position = position.index(i);
                let Some(map) = item.as_object() else {
                    return Err(ConfigError::invalid(
                        item_position,
                        "locale must be an object",
                    ));
                };
                let key = map
                    .get("path")
                    .ok_or_else(|| {
                        ConfigError::invalid(item_position.clone(), "locale is missing a path")
                    })
                    .and_then(|value| expect_non_empty_str(value, &item_position.key("path")))?
                    .to_owned();
                let locale = parse_locale(item, &item_position)?;
                if locales.insert(key.clone(), locale).is_some() {
                    return Err(ConfigError::invalid(
                        item_position,
                        format!("duplicate locale key: {key}"),
                    ));
                }
            }
            Ok(locales)
        }
        _ => Err(ConfigError::invalid(
            position.clone(),
            "locales must be an object or an array",
        )),
    }
}

fn parse_author(raw: &Value, position: &Position) -> Result<Author, ConfigError> {
    let Some(map) = raw.as_object() else {
        return Err(ConfigError::invalid(
            position.clone(),
            "author must be an object",
        ));
    };

    let name = map
        .get("name")
        .ok_or_else(|| ConfigError::invalid(position.clone(), "author is missing a name"))
        .and_then(|value| expect_non_empty_str(value, &position.key("name")))?
        .to_owned();

    let link = match map.get("link") {
        Some(value) => Some(expect_str(value, &position.key("link"))?.to_owned()),
        None => None,
    };

    Ok(Author { name, link })
}

/// Parse enabled plugins.
///
/// Accepts the map form (name to opaque options) and the list form (bare
/// names, no options).
fn parse_plugins(
    raw: &Value,
    position: &Position,
) -> Result<BTreeMap<String, Value>, ConfigError> {
    match raw {
        Value::Object(map) => Ok(map
            .iter()
            .map(|(name, options)| (name.clone(), options.clone()))
            .collect()),
        Value::Array(items) => {
            let mut plugins = BTreeMap::new();
            for (i, item) in items.iter().enumerate() {
                let name = expect_non_empty_str(item, &position.index(i))?.to_owned();
                if plugins.insert(name.clone(), Value::Null).is_some() {
                    tracing::warn!(plugin = %name, "duplicate plugin name");
                }
            }
            Ok(plugins)
        }
        _ => Err(ConfigError::invalid(
            position.clone(),
            "plugins must be an object or an array",
        )),
    }
}
