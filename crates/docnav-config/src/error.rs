//! Configuration errors with structural positions.
//!
//! Validation failures carry a [`Position`]: the path of keys and array
//! indices from the configuration root to the offending entry, so authors
//! can locate the problem in a large sidebar declaration.

use std::fmt;
use std::path::PathBuf;

/// One step from the configuration root towards an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Object key (e.g., `sidebar`, `children`).
    Key(String),
    /// Array index.
    Index(usize),
}

/// Path of keys and indices from the configuration root to an entry.
///
/// Displays as `sidebar[1].children[2]`; the root position displays
/// as `<root>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Position(Vec<Segment>);

impl Position {
    /// The configuration root.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Extend with an object key.
    #[must_use]
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.to_owned()));
        Self(segments)
    }

    /// Extend with an array index.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }

    /// Segments from the root, in order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{key}")?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Configuration error.
///
/// Structural validation failures are [`ConfigError::Invalid`]; the
/// remaining variants come from the optional file loader.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Structurally invalid entry. The whole configuration is rejected.
    #[error("invalid configuration at {position}: {message}")]
    Invalid {
        /// Position of the offending entry.
        position: Position,
        /// Human-readable description of the problem.
        message: String,
    },
    /// Configuration file not found.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// File extension not recognized by the loader.
    #[error("unsupported configuration format: .{0}")]
    UnknownFormat(String),
}

impl ConfigError {
    /// Build an [`ConfigError::Invalid`] at the given position.
    pub(crate) fn invalid(position: Position, message: impl Into<String>) -> Self {
        Self::Invalid {
            position,
            message: message.into(),
        }
    }

    /// Position of the offending entry for validation errors.
    #[must_use]
    pub fn position(&self) -> Option<&Position> {
        match self {
            Self::Invalid { position, .. } => Some(position),
            _ => None,
        }
    }
}
