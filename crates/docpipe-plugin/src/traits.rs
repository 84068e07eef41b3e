//! The plugin contract.

use docpipe_core::result::AppResult;

use crate::hooks::definitions::HookPoint;
use crate::hooks::event::{
    AstEvent, CodeEvent, CodeParserEvent, ConfigEvent, ContentEvent, DocClassEvent, DocsEvent,
    NotifyEvent, PluginsEvent, PublishEvent,
};

/// Trait that all plugins implement.
///
/// Every handler is optional. A handler only runs if its hook appears in
/// [`Plugin::registered_hooks`]; plugins that do not list a hook are skipped
/// for it entirely. Handlers communicate only by mutating the event; an `Err`
/// stops the remaining plugins for that hook and reaches the caller.
///
/// One instance serves a whole run, so state that must survive from
/// `on_start` to `on_complete` lives in the plugin behind interior mutability.
#[allow(unused_variables)]
pub trait Plugin: Send + Sync + std::fmt::Debug {
    /// Human-readable plugin name.
    fn name(&self) -> &str;

    /// Returns the hook points this plugin handles.
    fn registered_hooks(&self) -> Vec<HookPoint>;

    /// Returns whether this plugin handles `hook`.
    fn handles(&self, hook: HookPoint) -> bool {
        self.registered_hooks().contains(&hook)
    }

    /// Inspects or replaces the plugin list.
    fn on_handle_plugins(&self, event: &mut PluginsEvent) -> AppResult<()> {
        Ok(())
    }

    /// Called when the run starts.
    fn on_start(&self, event: &mut NotifyEvent) -> AppResult<()> {
        Ok(())
    }

    /// Inspects or rewrites the configuration.
    fn on_handle_config(&self, event: &mut ConfigEvent) -> AppResult<()> {
        Ok(())
    }

    /// Inspects or rewrites a source file's text.
    fn on_handle_code(&self, event: &mut CodeEvent) -> AppResult<()> {
        Ok(())
    }

    /// Replaces the parser or its options for a source file.
    fn on_handle_code_parser(&self, event: &mut CodeParserEvent) -> AppResult<()> {
        Ok(())
    }

    /// Replaces the doc factory for a doc kind.
    fn on_handle_doc_class(&self, event: &mut DocClassEvent) -> AppResult<()> {
        Ok(())
    }

    /// Inspects or rewrites a syntax tree.
    fn on_handle_ast(&self, event: &mut AstEvent) -> AppResult<()> {
        Ok(())
    }

    /// Inspects or rewrites the produced doc records.
    fn on_handle_docs(&self, event: &mut DocsEvent) -> AppResult<()> {
        Ok(())
    }

    /// Writes extra output through the publish callbacks.
    fn on_publish(&self, event: &mut PublishEvent) -> AppResult<()> {
        Ok(())
    }

    /// Inspects or rewrites a rendered output file.
    fn on_handle_content(&self, event: &mut ContentEvent) -> AppResult<()> {
        Ok(())
    }

    /// Called when the run completes.
    fn on_complete(&self, event: &mut NotifyEvent) -> AppResult<()> {
        Ok(())
    }
}
