//! # docpipe-plugin
//!
//! Plugin core for the docpipe documentation pipeline. Provides:
//!
//! - Eleven lifecycle hooks, each with a typed, mutable event payload
//! - Copy-isolated payloads for plain data, shared references for capabilities
//! - Identifier resolution through a compiled-in registry, with optional
//!   dynamic loading via `libloading` (feature `dynamic`)
//! - Sequential dispatch in declaration order, with per-plugin options
//!
//! ```rust,ignore
//! use docpipe_plugin::prelude::*;
//!
//! let mut registry = PluginRegistry::new();
//! registry.register("banner", || Arc::new(Banner) as Arc<dyn Plugin>)?;
//!
//! let mut manager = PluginManager::new(PluginResolver::new(registry));
//! manager.init(plugin_entries!["banner" => json!({"text": "// generated"})])?;
//! manager.on_start()?;
//! let code = manager.on_handle_code("const a = 1;", "src/a.js")?;
//! manager.on_complete()?;
//! ```

pub mod hooks;
pub mod loader;
pub mod macros;
pub mod manager;
pub mod prelude;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use hooks::definitions::HookPoint;
pub use hooks::dispatcher::HookDispatcher;
pub use hooks::event::PluginEvent;
pub use manager::{ParsingCapabilities, PluginManager};
pub use registry::PluginRegistry;
pub use resolver::PluginResolver;
pub use traits::Plugin;
