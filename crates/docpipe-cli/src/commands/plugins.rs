//! `docpipe plugins`: list configured plugins and their hooks.

use serde::Serialize;
use tabled::Tabled;

use docpipe_core::config::AppConfig;
use docpipe_core::error::AppError;
use docpipe_core::types::plugin_entry::{IdentifierKind, PluginEntry};
use docpipe_plugin::resolver::PluginResolver;

use crate::output::{self, OutputFormat};

/// One row per active plugin entry.
#[derive(Debug, Serialize, Tabled)]
pub struct PluginRow {
    /// Identifier as configured
    #[tabled(rename = "Plugin")]
    pub identifier: String,
    /// Name reported by the plugin
    #[tabled(rename = "Name")]
    pub name: String,
    /// Where the plugin was resolved from
    #[tabled(rename = "Source")]
    pub source: String,
    /// Hooks, comma-separated for the table
    #[tabled(rename = "Hooks")]
    #[serde(skip)]
    pub hook_list: String,
    /// Hooks the plugin handles
    #[tabled(skip)]
    pub hooks: Vec<String>,
    /// Configured option
    #[tabled(rename = "Option")]
    pub option: serde_json::Value,
}

/// Describes where `entry` is resolved from: the built-in registry, a path
/// relative to the working directory, or the local plugin directory.
pub fn plugin_source(resolver: &PluginResolver, entry: &PluginEntry) -> String {
    if resolver.registry().contains(&entry.name) {
        return "builtin".to_string();
    }
    match entry.identifier_kind() {
        IdentifierKind::Path => "path".to_string(),
        IdentifierKind::Package => format!("library in {}", resolver.local_dir().display()),
    }
}

/// Execute the plugins command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let mut manager = super::build_manager(config)?;
    let entries = manager.plugins().to_vec();

    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let source = plugin_source(manager.resolver(), &entry);
        let plugin = manager.resolver_mut().resolve(&entry.name)?;
        let hooks: Vec<String> = plugin
            .registered_hooks()
            .iter()
            .map(|hook| hook.as_str().to_string())
            .collect();

        rows.push(PluginRow {
            identifier: entry.name,
            name: plugin.name().to_string(),
            source,
            hook_list: hooks.join(", "),
            hooks,
            option: entry.option,
        });
    }

    output::print_list(&rows, format);
    Ok(())
}
