//! Compiled-in plugins shipped with docpipe.
//!
//! Every plugin here is registered under its identifier by
//! [`register_builtins`] and is resolved like any other plugin.

pub mod copy_assets;
pub mod exclude_private;
pub mod inject_script;
pub mod run_stats;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use docpipe_core::error::AppError;
use docpipe_core::result::AppResult;
use docpipe_plugin::registry::PluginRegistry;
use docpipe_plugin::traits::Plugin;

pub use copy_assets::CopyAssetsPlugin;
pub use exclude_private::ExcludePrivatePlugin;
pub use inject_script::InjectScriptPlugin;
pub use run_stats::RunStatsPlugin;

/// Registers every built-in plugin under its identifier.
pub fn register_builtins(registry: &mut PluginRegistry) -> AppResult<()> {
    registry.register(exclude_private::IDENTIFIER, || {
        Arc::new(ExcludePrivatePlugin) as Arc<dyn Plugin>
    })?;
    registry.register(inject_script::IDENTIFIER, || {
        Arc::new(InjectScriptPlugin) as Arc<dyn Plugin>
    })?;
    registry.register(copy_assets::IDENTIFIER, || {
        Arc::new(CopyAssetsPlugin) as Arc<dyn Plugin>
    })?;
    registry.register(run_stats::IDENTIFIER, || {
        Arc::new(RunStatsPlugin::new()) as Arc<dyn Plugin>
    })?;

    tracing::debug!(count = registry.len(), "Built-in plugins registered");
    Ok(())
}

/// Reads a plugin option into `T`, treating `null` as the default.
pub(crate) fn parse_option<T>(plugin: &str, option: &Value) -> AppResult<T>
where
    T: DeserializeOwned + Default,
{
    if option.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(option.clone()).map_err(|e| {
        AppError::configuration(format!("Invalid option for plugin '{}': {}", plugin, e))
    })
}
