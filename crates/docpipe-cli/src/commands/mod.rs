//! CLI command definitions and dispatch.

pub mod code;
pub mod config;
pub mod content;
pub mod plugins;
pub mod publish;

use clap::{Parser, Subcommand};

use docpipe_core::config::AppConfig;
use docpipe_core::error::AppError;
use docpipe_plugin::manager::PluginManager;
use docpipe_plugin::registry::PluginRegistry;
use docpipe_plugin::resolver::PluginResolver;

use crate::output::OutputFormat;

/// docpipe: run a documentation plugin configuration
#[derive(Debug, Parser)]
#[command(name = "docpipe", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docpipe.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List configured plugins and the hooks they handle
    Plugins,
    /// Pass a source file through the code hook
    Code(code::CodeArgs),
    /// Pass a rendered file through the content hook
    Content(content::ContentArgs),
    /// Show the configuration after the config hook
    Config,
    /// Run the publish hook against an output directory
    Publish(publish::PublishArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Plugins => plugins::execute(&config, self.format),
            Commands::Code(args) => code::execute(args, &config),
            Commands::Content(args) => content::execute(args, &config),
            Commands::Config => config::execute(&config, self.format),
            Commands::Publish(args) => publish::execute(args, &config),
        }
    }
}

/// Helper: build a manager over the built-in plugins and run the
/// plugin-list hook on the configured list.
pub fn build_manager(config: &AppConfig) -> Result<PluginManager, AppError> {
    let mut registry = PluginRegistry::new();
    docpipe_plugins::register_builtins(&mut registry)?;

    let resolver = PluginResolver::new(registry).with_local_dir(&config.plugin.directory);
    let mut manager = PluginManager::new(resolver);
    manager.init(config.plugins.clone())?;

    tracing::debug!(plugins = manager.plugins().len(), "Plugin manager ready");
    Ok(manager)
}
