//! Plugin registry: compiled-in plugins available by identifier.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use docpipe_core::error::AppError;

use crate::traits::Plugin;

/// Factory producing a fresh plugin instance.
pub type PluginFactory = Box<dyn Fn() -> Arc<dyn Plugin> + Send + Sync>;

/// How a registered identifier yields its plugin.
enum Registration {
    /// Build a new instance on first resolution.
    Factory(PluginFactory),
    /// Hand out this instance.
    Instance(Arc<dyn Plugin>),
}

/// Registry of plugins that can be resolved without dynamic loading.
///
/// The registry only knows how to produce plugins; identity and caching
/// belong to the resolver.
#[derive(Default)]
pub struct PluginRegistry {
    /// Identifier → registration.
    entries: HashMap<String, Registration>,
}

impl PluginRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `identifier`.
    pub fn register<F>(&mut self, identifier: &str, factory: F) -> Result<(), AppError>
    where
        F: Fn() -> Arc<dyn Plugin> + Send + Sync + 'static,
    {
        self.insert(identifier, Registration::Factory(Box::new(factory)))
    }

    /// Registers a pre-built instance under `identifier`.
    pub fn register_instance(
        &mut self,
        identifier: &str,
        plugin: Arc<dyn Plugin>,
    ) -> Result<(), AppError> {
        self.insert(identifier, Registration::Instance(plugin))
    }

    fn insert(&mut self, identifier: &str, registration: Registration) -> Result<(), AppError> {
        if self.entries.contains_key(identifier) {
            return Err(AppError::configuration(format!(
                "Plugin '{}' is already registered",
                identifier
            )));
        }

        debug!(plugin = %identifier, "Registering compiled-in plugin");
        self.entries.insert(identifier.to_string(), registration);
        Ok(())
    }

    /// Produces the plugin registered under `identifier`, if any.
    pub fn create(&self, identifier: &str) -> Option<Arc<dyn Plugin>> {
        self.entries.get(identifier).map(|registration| match registration {
            Registration::Factory(factory) => factory(),
            Registration::Instance(plugin) => Arc::clone(plugin),
        })
    }

    /// Checks whether an identifier is registered.
    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Returns all registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("identifiers", &self.identifiers())
            .finish()
    }
}
