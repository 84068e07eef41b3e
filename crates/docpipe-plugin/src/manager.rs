//! Plugin manager: one method per lifecycle point.
//!
//! Each method seeds a [`PluginEvent`], runs it through the active plugin
//! list, and returns the fields the caller needs back. Data hooks are seeded
//! by copy; hooks carrying parsers, doc factories or I/O callbacks are seeded
//! by reference.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use docpipe_core::error::AppError;
use docpipe_core::result::AppResult;
use docpipe_core::traits::{
    CodeParser, CommentParser, CopyDirFn, DocFactory, ParamParser, ReadFileFn, SyntaxParser,
    WriteFileFn,
};
use docpipe_core::types::plugin_entry::PluginEntry;

use crate::hooks::definitions::HookPoint;
use crate::hooks::dispatcher::HookDispatcher;
use crate::hooks::event::{
    AstData, CodeData, CodeParserData, ConfigData, ContentData, DocClassData, DocsData,
    PluginEvent, PluginsData, PublishData,
};
use crate::resolver::PluginResolver;

/// Host parsers exposed to plugins through the doc-class hook.
#[derive(Clone)]
pub struct ParsingCapabilities {
    /// Parameter parser.
    pub param_parser: Arc<dyn ParamParser>,
    /// Comment parser.
    pub comment_parser: Arc<dyn CommentParser>,
    /// Syntax parser.
    pub syntax_parser: Arc<dyn SyntaxParser>,
}

impl std::fmt::Debug for ParsingCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsingCapabilities").finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct PluginsSeed<'a> {
    plugins: &'a [PluginEntry],
}

#[derive(Serialize)]
struct ConfigSeed<'a, C: ?Sized> {
    config: &'a C,
}

#[derive(Serialize)]
struct DocsSeed<'a> {
    docs: &'a [Value],
}

#[derive(Serialize)]
struct ContentSeed<'a> {
    content: &'a str,
    file_name: &'a str,
}

/// Drives the plugin chain for every lifecycle point of a run.
///
/// Constructed and owned by the caller; independent managers do not share
/// plugin instances.
#[derive(Debug)]
pub struct PluginManager {
    /// Active plugin list, in declaration order.
    plugins: Vec<PluginEntry>,
    /// Hook dispatcher (owns the resolver).
    dispatcher: HookDispatcher,
    /// Parsers injected into the doc-class hook.
    capabilities: Option<ParsingCapabilities>,
}

impl PluginManager {
    /// Creates a manager with an empty plugin list.
    pub fn new(resolver: PluginResolver) -> Self {
        Self {
            plugins: Vec::new(),
            dispatcher: HookDispatcher::new(resolver),
            capabilities: None,
        }
    }

    /// Sets the parsers handed to the doc-class hook.
    pub fn with_capabilities(mut self, capabilities: ParsingCapabilities) -> Self {
        self.capabilities = Some(capabilities);
        self
    }

    /// Initializes the plugin list by running the plugin-list hook.
    pub fn init(&mut self, plugins: Vec<PluginEntry>) -> AppResult<()> {
        self.on_handle_plugins(plugins).map(|_| ())
    }

    /// Runs the plugin-list hook over `plugins` and makes the list the
    /// plugins leave behind the active list for every later hook.
    ///
    /// If the hook fails, `plugins` stays the active list.
    pub fn on_handle_plugins(&mut self, plugins: Vec<PluginEntry>) -> AppResult<&[PluginEntry]> {
        self.plugins = plugins;
        let mut event = PluginEvent::<PluginsData>::copied(&PluginsSeed {
            plugins: &self.plugins,
        })?;

        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandlePlugins,
            &mut event,
            |plugin, event| plugin.on_handle_plugins(event),
        )?;

        let replaced = event.into_data().plugins;
        if replaced != self.plugins {
            info!(
                before = self.plugins.len(),
                after = replaced.len(),
                "Plugin list replaced by plugin"
            );
        }
        self.plugins = replaced;
        Ok(&self.plugins)
    }

    /// Notifies plugins that the run starts.
    pub fn on_start(&mut self) -> AppResult<()> {
        let mut event = PluginEvent::assigned(());
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnStart,
            &mut event,
            |plugin, event| plugin.on_start(event),
        )?;
        Ok(())
    }

    /// Passes the configuration through the plugins.
    ///
    /// The config travels in plain JSON form and is rebuilt as `C` afterwards;
    /// a plugin that leaves it in a shape `C` cannot read yields a
    /// serialization error.
    pub fn on_handle_config<C>(&mut self, config: &C) -> AppResult<C>
    where
        C: Serialize + DeserializeOwned,
    {
        let mut event = PluginEvent::<ConfigData>::copied(&ConfigSeed { config })?;
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandleConfig,
            &mut event,
            |plugin, event| plugin.on_handle_config(event),
        )?;
        Ok(serde_json::from_value(event.into_data().config)?)
    }

    /// Passes a source file's text through the plugins.
    pub fn on_handle_code(&mut self, code: &str, file_path: impl AsRef<Path>) -> AppResult<String> {
        // An owned `String` is already alias-free and always has a JSON form.
        let mut event = PluginEvent::assigned(CodeData {
            code: code.to_owned(),
            file_path: file_path.as_ref().to_path_buf(),
        });
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandleCode,
            &mut event,
            |plugin, event| plugin.on_handle_code(event),
        )?;
        Ok(event.into_data().code)
    }

    /// Lets plugins replace the parser or its options for a source file.
    pub fn on_handle_code_parser(
        &mut self,
        parser: Arc<dyn CodeParser>,
        parser_option: Value,
        file_path: impl AsRef<Path>,
        code: &str,
    ) -> AppResult<(Arc<dyn CodeParser>, Value)> {
        let mut event = PluginEvent::assigned(CodeParserData {
            parser,
            parser_option,
            file_path: file_path.as_ref().to_path_buf(),
            code: code.to_owned(),
        });
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandleCodeParser,
            &mut event,
            |plugin, event| plugin.on_handle_code_parser(event),
        )?;
        let data = event.into_data();
        Ok((data.parser, data.parser_option))
    }

    /// Lets plugins replace the doc factory for a doc kind.
    ///
    /// Fails if the manager was built without [`ParsingCapabilities`].
    pub fn on_handle_doc_class(
        &mut self,
        kind: &str,
        class: Arc<dyn DocFactory>,
    ) -> AppResult<Arc<dyn DocFactory>> {
        let capabilities = self.capabilities.as_ref().ok_or_else(|| {
            AppError::internal("Doc-class hook requires parsing capabilities from the host")
        })?;

        let mut event = PluginEvent::assigned(DocClassData {
            kind: kind.to_owned(),
            class,
            param_parser: Arc::clone(&capabilities.param_parser),
            comment_parser: Arc::clone(&capabilities.comment_parser),
            syntax_parser: Arc::clone(&capabilities.syntax_parser),
        });
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandleDocClass,
            &mut event,
            |plugin, event| plugin.on_handle_doc_class(event),
        )?;
        Ok(event.into_data().class)
    }

    /// Passes a syntax tree through the plugins.
    pub fn on_handle_ast(
        &mut self,
        ast: &Value,
        file_path: impl AsRef<Path>,
        code: &str,
    ) -> AppResult<Value> {
        // `ast.clone()` is a deep copy and a `Value` always has a JSON form.
        let mut event = PluginEvent::assigned(AstData {
            ast: ast.clone(),
            file_path: file_path.as_ref().to_path_buf(),
            code: code.to_owned(),
        });
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandleAst,
            &mut event,
            |plugin, event| plugin.on_handle_ast(event),
        )?;
        Ok(event.into_data().ast)
    }

    /// Passes the produced doc records through the plugins.
    pub fn on_handle_docs(&mut self, docs: &[Value]) -> AppResult<Vec<Value>> {
        let mut event = PluginEvent::<DocsData>::copied(&DocsSeed { docs })?;
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandleDocs,
            &mut event,
            |plugin, event| plugin.on_handle_docs(event),
        )?;
        Ok(event.into_data().docs)
    }

    /// Hands the publish callbacks to the plugins.
    pub fn on_publish(
        &mut self,
        write_file: WriteFileFn,
        copy_dir: CopyDirFn,
        read_file: ReadFileFn,
    ) -> AppResult<()> {
        let mut event = PluginEvent::assigned(PublishData {
            write_file,
            copy_file: Arc::clone(&copy_dir),
            copy_dir,
            read_file,
        });
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnPublish,
            &mut event,
            |plugin, event| plugin.on_publish(event),
        )?;
        Ok(())
    }

    /// Passes a rendered output file through the plugins.
    pub fn on_handle_content(&mut self, content: &str, file_name: &str) -> AppResult<String> {
        let mut event =
            PluginEvent::<ContentData>::copied(&ContentSeed { content, file_name })?;
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnHandleContent,
            &mut event,
            |plugin, event| plugin.on_handle_content(event),
        )?;
        Ok(event.into_data().content)
    }

    /// Notifies plugins that the run completed.
    pub fn on_complete(&mut self) -> AppResult<()> {
        let mut event = PluginEvent::assigned(());
        self.dispatcher.dispatch(
            &self.plugins,
            HookPoint::OnComplete,
            &mut event,
            |plugin, event| plugin.on_complete(event),
        )?;
        Ok(())
    }

    /// Returns the active plugin list.
    pub fn plugins(&self) -> &[PluginEntry] {
        &self.plugins
    }

    /// Returns the plugin resolver.
    pub fn resolver(&self) -> &PluginResolver {
        self.dispatcher.resolver()
    }

    /// Returns the plugin resolver mutably.
    pub fn resolver_mut(&mut self) -> &mut PluginResolver {
        self.dispatcher.resolver_mut()
    }
}
