//! Plugin resolution settings.

use serde::{Deserialize, Serialize};

/// Plugin system configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Local directory searched for package-named plugin libraries that are
    /// not compiled in.
    #[serde(default = "default_plugin_directory")]
    pub directory: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            directory: default_plugin_directory(),
        }
    }
}

fn default_plugin_directory() -> String {
    "./plugins".to_string()
}
