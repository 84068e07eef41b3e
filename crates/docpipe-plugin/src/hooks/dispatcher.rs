//! Hook dispatcher: runs one hook through the plugin list, in order.
//!
//! For each entry:
//! - the identifier is resolved (a resolution failure aborts the hook);
//! - plugins that do not handle the hook are skipped without touching the event;
//! - `option` is set to the entry's own option, then the handler runs;
//! - a handler error aborts the hook; later entries never run.

use tracing::{debug, error};

use docpipe_core::error::{AppError, ErrorKind};
use docpipe_core::result::AppResult;
use docpipe_core::types::plugin_entry::PluginEntry;

use super::definitions::HookPoint;
use super::event::PluginEvent;
use crate::resolver::PluginResolver;
use crate::traits::Plugin;

/// Dispatches hooks to the plugins of an entry list.
#[derive(Debug)]
pub struct HookDispatcher {
    /// Plugin resolver.
    resolver: PluginResolver,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(resolver: PluginResolver) -> Self {
        Self { resolver }
    }

    /// Runs `hook` over `entries`, calling `handler` for each plugin that
    /// handles it. Returns the number of plugins invoked.
    pub fn dispatch<D, F>(
        &mut self,
        entries: &[PluginEntry],
        hook: HookPoint,
        event: &mut PluginEvent<D>,
        handler: F,
    ) -> AppResult<usize>
    where
        F: Fn(&dyn Plugin, &mut PluginEvent<D>) -> AppResult<()>,
    {
        debug!(hook = %hook, plugin_count = entries.len(), "Dispatching hook");

        let mut invoked = 0;
        for entry in entries {
            let plugin = self.resolver.resolve(&entry.name)?;

            if !plugin.handles(hook) {
                continue;
            }

            event.set_option(&entry.option);

            debug!(hook = %hook, plugin = %entry.name, "Invoking plugin handler");
            handler(plugin.as_ref(), event).map_err(|e| {
                error!(hook = %hook, plugin = %entry.name, error = %e, "Plugin handler failed");
                let message = format!("Plugin '{}' failed in {}: {}", entry.name, hook, e.message);
                AppError::with_source(ErrorKind::Handler, message, e)
            })?;
            invoked += 1;
        }

        Ok(invoked)
    }

    /// Returns the plugin resolver.
    pub fn resolver(&self) -> &PluginResolver {
        &self.resolver
    }

    /// Returns the plugin resolver mutably.
    pub fn resolver_mut(&mut self) -> &mut PluginResolver {
        &mut self.resolver
    }
}
