//! Application configuration schemas.
//!
//! Configuration is read with the `config` crate from an optional file
//! (format picked by extension) overlaid by `DOCPIPE__*` environment
//! variables.

pub mod logging;
pub mod plugin;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

pub use self::logging::LoggingConfig;
pub use self::plugin::PluginConfig;

use crate::error::AppError;
use crate::types::plugin_entry::PluginEntry;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ordered plugin registration list.
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
    /// Plugin resolution settings.
    #[serde(default)]
    pub plugin: PluginConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `path` (which may be absent) and the environment.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("DOCPIPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        debug!(
            path = %path,
            plugins = loaded.plugins.len(),
            plugin_dir = %loaded.plugin.directory,
            "Configuration loaded"
        );
        Ok(loaded)
    }

    /// Returns the configuration as a plain JSON value, the shape handed to
    /// the config hook.
    pub fn to_value(&self) -> Result<Value, AppError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuilds a configuration from the value returned by the config hook.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        serde_json::from_value(value).map_err(|e| {
            AppError::configuration(format!("Plugin produced an invalid config: {e}"))
        })
    }
}
