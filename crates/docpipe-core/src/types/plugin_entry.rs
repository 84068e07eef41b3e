//! Plugin registration entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a plugin identifier is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// Starts with `.` or `/`: a filesystem path relative to the working directory.
    Path,
    /// Anything else: a package name looked up by the resolver.
    Package,
}

impl IdentifierKind {
    /// Classifies an identifier string.
    pub fn of(identifier: &str) -> Self {
        if identifier.starts_with('.') || identifier.starts_with('/') {
            Self::Path
        } else {
            Self::Package
        }
    }
}

/// One configured plugin: its identifier and the option handed to its handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Plugin identifier (path-like or package-like).
    pub name: String,
    /// Arbitrary JSON option passed to this plugin only.
    #[serde(default)]
    pub option: Value,
}

impl PluginEntry {
    /// Creates an entry with a `null` option.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            option: Value::Null,
        }
    }

    /// Sets the option.
    pub fn with_option(mut self, option: Value) -> Self {
        self.option = option;
        self
    }

    /// Returns how this entry's identifier is resolved.
    pub fn identifier_kind(&self) -> IdentifierKind {
        IdentifierKind::of(&self.name)
    }
}
