//! Shared value types.

pub mod plugin_entry;

pub use plugin_entry::{IdentifierKind, PluginEntry};
