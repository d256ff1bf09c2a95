#![forbid(unsafe_code)]

//! Error types.
//!
//! Sequencing itself cannot fail: a missing layer means "not mounted yet"
//! and a dropped toggle is a policy decision, neither is an error. Errors
//! only come from the edges: configuration input and out-of-range item
//! indices coming from a host.

use std::fmt;

/// Configuration could not be loaded or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A color string is not `#rgb` or `#rrggbb` hex.
    InvalidColor { field: &'static str, value: String },
    /// A position string is neither `left` nor `right`.
    InvalidPosition(String),
    /// A boolean environment override could not be parsed.
    InvalidFlag { var: &'static str, value: String },
    /// JSON input did not match the configuration schema.
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { field, value } => {
                write!(f, "invalid color for {field}: {value:?} (expected #rgb or #rrggbb)")
            }
            Self::InvalidPosition(value) => {
                write!(f, "invalid position {value:?} (expected \"left\" or \"right\")")
            }
            Self::InvalidFlag { var, value } => {
                write!(f, "invalid value for {var}: {value:?} (expected true/false/1/0)")
            }
            Self::Json(msg) => write!(f, "invalid menu config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Error returned by [`StaggeredMenu`](crate::StaggeredMenu) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// No top-level item at this index.
    UnknownItem(usize),
    /// No child at `child` under the item at `parent`.
    UnknownChild { parent: usize, child: usize },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "menu configuration error: {err}"),
            Self::UnknownItem(index) => write!(f, "no menu item at index {index}"),
            Self::UnknownChild { parent, child } => {
                write!(f, "menu item {parent} has no child at index {child}")
            }
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let Self::Config(err) = self {
            return Some(err);
        }
        None
    }
}

impl From<ConfigError> for MenuError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
