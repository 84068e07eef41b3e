//! Shared helpers for plugin dispatch tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use docpipe_plugin::prelude::*;

type Handler<E> = Box<dyn Fn(&mut E) -> AppResult<()> + Send + Sync>;

/// Ordered record of `plugin:hook` invocations shared between plugins.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: String) {
        self.0.lock().expect("call log poisoned").push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().expect("call log poisoned").clone()
    }
}

/// Plugin assembled from closures, one per hook it handles.
#[derive(Default)]
pub struct ScriptedPlugin {
    name: String,
    log: CallLog,
    plugins: Option<Handler<PluginsEvent>>,
    start: Option<Handler<NotifyEvent>>,
    config: Option<Handler<ConfigEvent>>,
    code: Option<Handler<CodeEvent>>,
    code_parser: Option<Handler<CodeParserEvent>>,
    doc_class: Option<Handler<DocClassEvent>>,
    ast: Option<Handler<AstEvent>>,
    docs: Option<Handler<DocsEvent>>,
    publish: Option<Handler<PublishEvent>>,
    content: Option<Handler<ContentEvent>>,
    complete: Option<Handler<NotifyEvent>>,
}

impl std::fmt::Debug for ScriptedPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedPlugin")
            .field("name", &self.name)
            .field("hooks", &self.registered_hooks())
            .finish()
    }
}

macro_rules! scripted_hook {
    ($builder:ident, $field:ident, $event:ty) => {
        pub fn $builder<F>(mut self, handler: F) -> Self
        where
            F: Fn(&mut $event) -> AppResult<()> + Send + Sync + 'static,
        {
            self.$field = Some(Box::new(handler));
            self
        }
    };
}

impl ScriptedPlugin {
    pub fn new(name: &str, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            log: log.clone(),
            ..Default::default()
        }
    }

    scripted_hook!(plugins, plugins, PluginsEvent);
    scripted_hook!(start, start, NotifyEvent);
    scripted_hook!(config, config, ConfigEvent);
    scripted_hook!(code, code, CodeEvent);
    scripted_hook!(code_parser, code_parser, CodeParserEvent);
    scripted_hook!(doc_class, doc_class, DocClassEvent);
    scripted_hook!(ast, ast, AstEvent);
    scripted_hook!(docs, docs, DocsEvent);
    scripted_hook!(publish, publish, PublishEvent);
    scripted_hook!(content, content, ContentEvent);
    scripted_hook!(complete, complete, NotifyEvent);

    pub fn build(self) -> Arc<dyn Plugin> {
        Arc::new(self)
    }

    fn run<E>(&self, hook: HookPoint, handler: &Option<Handler<E>>, event: &mut E) -> AppResult<()> {
        self.log.push(format!("{}:{}", self.name, hook));
        match handler {
            Some(handler) => handler(event),
            None => Ok(()),
        }
    }
}

impl Plugin for ScriptedPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn registered_hooks(&self) -> Vec<HookPoint> {
        let present = [
            (HookPoint::OnHandlePlugins, self.plugins.is_some()),
            (HookPoint::OnStart, self.start.is_some()),
            (HookPoint::OnHandleConfig, self.config.is_some()),
            (HookPoint::OnHandleCode, self.code.is_some()),
            (HookPoint::OnHandleCodeParser, self.code_parser.is_some()),
            (HookPoint::OnHandleDocClass, self.doc_class.is_some()),
            (HookPoint::OnHandleAst, self.ast.is_some()),
            (HookPoint::OnHandleDocs, self.docs.is_some()),
            (HookPoint::OnPublish, self.publish.is_some()),
            (HookPoint::OnHandleContent, self.content.is_some()),
            (HookPoint::OnComplete, self.complete.is_some()),
        ];
        present
            .into_iter()
            .filter_map(|(hook, present)| present.then_some(hook))
            .collect()
    }

    fn on_handle_plugins(&self, event: &mut PluginsEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandlePlugins, &self.plugins, event)
    }

    fn on_start(&self, event: &mut NotifyEvent) -> AppResult<()> {
        self.run(HookPoint::OnStart, &self.start, event)
    }

    fn on_handle_config(&self, event: &mut ConfigEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandleConfig, &self.config, event)
    }

    fn on_handle_code(&self, event: &mut CodeEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandleCode, &self.code, event)
    }

    fn on_handle_code_parser(&self, event: &mut CodeParserEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandleCodeParser, &self.code_parser, event)
    }

    fn on_handle_doc_class(&self, event: &mut DocClassEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandleDocClass, &self.doc_class, event)
    }

    fn on_handle_ast(&self, event: &mut AstEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandleAst, &self.ast, event)
    }

    fn on_handle_docs(&self, event: &mut DocsEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandleDocs, &self.docs, event)
    }

    fn on_publish(&self, event: &mut PublishEvent) -> AppResult<()> {
        self.run(HookPoint::OnPublish, &self.publish, event)
    }

    fn on_handle_content(&self, event: &mut ContentEvent) -> AppResult<()> {
        self.run(HookPoint::OnHandleContent, &self.content, event)
    }

    fn on_complete(&self, event: &mut NotifyEvent) -> AppResult<()> {
        self.run(HookPoint::OnComplete, &self.complete, event)
    }
}

/// Builds a manager whose registry holds `plugins` under their identifiers,
/// initialised with those identifiers in order and `null` options.
pub fn manager_with(plugins: Vec<(&str, Arc<dyn Plugin>)>) -> PluginManager {
    let entries = plugins
        .iter()
        .map(|(id, _)| PluginEntry::new(*id))
        .collect();
    let mut manager = manager_registering(plugins);
    manager.init(entries).expect("init");
    manager
}

/// Builds a manager whose registry holds `plugins`, without initialising it.
pub fn manager_registering(plugins: Vec<(&str, Arc<dyn Plugin>)>) -> PluginManager {
    let mut registry = PluginRegistry::new();
    for (id, plugin) in plugins {
        registry.register_instance(id, plugin).expect("register");
    }
    PluginManager::new(PluginResolver::new(registry))
}
