//! Event payloads passed through the plugin chain.
//!
//! A [`PluginEvent`] is created once per hook invocation and lent mutably to
//! every plugin in turn. Its `data` is a hook-specific struct seeded in one of
//! two ways:
//!
//! - **copied**: plain data is deep-copied through its JSON form, so nothing a
//!   plugin does can reach the caller's values ([`PluginEvent::copied`]);
//! - **assigned**: capability references (parsers, doc factories, I/O
//!   callbacks) are stored as shared `Arc`s ([`PluginEvent::assigned`]).
//!
//! `option` is rewritten before every plugin invocation with that plugin's own
//! configured option. `extra` holds fields a plugin adds on its own; they live
//! until the end of the hook and are never read back by the manager.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use docpipe_core::error::{AppError, ErrorKind};
use docpipe_core::result::AppResult;
use docpipe_core::traits::{
    CodeParser, CommentParser, CopyDirFn, DocFactory, ParamParser, ReadFileFn, SyntaxParser,
    WriteFileFn,
};
use docpipe_core::types::plugin_entry::PluginEntry;

/// Mutable payload for one hook invocation.
#[derive(Debug, Clone)]
pub struct PluginEvent<D> {
    /// Option of the plugin currently being invoked.
    pub option: Value,
    /// Hook-specific fields.
    pub data: D,
    /// Ad-hoc fields added by plugins during this hook.
    pub extra: Map<String, Value>,
}

impl<D> PluginEvent<D> {
    /// Creates an event storing `data` as given, without isolation.
    pub fn assigned(data: D) -> Self {
        Self {
            option: Value::Null,
            data,
            extra: Map::new(),
        }
    }

    /// Overwrites `option` with a fresh copy of `option`.
    pub fn set_option(&mut self, option: &Value) {
        self.option = option.clone();
    }

    /// Consumes the event, returning its data.
    pub fn into_data(self) -> D {
        self.data
    }
}

impl<D> PluginEvent<D>
where
    D: DeserializeOwned,
{
    /// Creates an event whose data is rebuilt from the plain JSON form of
    /// `seed`, so it shares nothing with the caller.
    ///
    /// `seed` is usually `D` itself or a borrowed view with the same field
    /// names. Fails with a serialization error if `seed` has no JSON form.
    pub fn copied<S: Serialize + ?Sized>(seed: &S) -> AppResult<Self> {
        let plain = to_plain(seed)?;
        Ok(Self::assigned(serde_json::from_value(plain)?))
    }
}

/// Converts a value into its plain JSON form.
pub fn to_plain<T: Serialize + ?Sized>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Event field is not JSON-representable: {e}"),
            e,
        )
    })
}

/// Data for the plugin-list hook (copied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginsData {
    /// Plugin list; whatever remains after the hook becomes the active list.
    pub plugins: Vec<PluginEntry>,
}

/// Data for the config hook (copied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigData {
    /// Configuration in plain JSON form.
    pub config: Value,
}

/// Data for the code hook: `code` is copied, `file_path` assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeData {
    /// Source text.
    pub code: String,
    /// Path of the source file.
    pub file_path: PathBuf,
}

/// Data for the code-parser hook (assigned).
#[derive(Clone)]
pub struct CodeParserData {
    /// Parser that will be used for this file.
    pub parser: Arc<dyn CodeParser>,
    /// Options passed to the parser.
    pub parser_option: Value,
    /// Path of the source file.
    pub file_path: PathBuf,
    /// Source text.
    pub code: String,
}

impl fmt::Debug for CodeParserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeParserData")
            .field("parser", &"<parser>")
            .field("parser_option", &self.parser_option)
            .field("file_path", &self.file_path)
            .field("code_len", &self.code.len())
            .finish()
    }
}

/// Data for the doc-class hook (assigned).
///
/// The three parser references are the host's own, so a plugin replacing
/// `class` can reuse them.
#[derive(Clone)]
pub struct DocClassData {
    /// Doc kind, e.g. `"Class"` or `"Method"`.
    pub kind: String,
    /// Factory that will build docs of this kind.
    pub class: Arc<dyn DocFactory>,
    /// Host parameter parser.
    pub param_parser: Arc<dyn ParamParser>,
    /// Host comment parser.
    pub comment_parser: Arc<dyn CommentParser>,
    /// Host syntax parser.
    pub syntax_parser: Arc<dyn SyntaxParser>,
}

impl fmt::Debug for DocClassData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocClassData")
            .field("kind", &self.kind)
            .field("class", &self.class.kind())
            .finish_non_exhaustive()
    }
}

/// Data for the AST hook: `ast` is copied, `file_path` and `code` assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct AstData {
    /// Syntax tree.
    pub ast: Value,
    /// Path of the source file.
    pub file_path: PathBuf,
    /// Source text the tree was parsed from.
    pub code: String,
}

/// Data for the docs hook (copied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocsData {
    /// Every doc record produced by the run.
    pub docs: Vec<Value>,
}

/// Data for the publish hook (assigned).
///
/// `copy_file` and `copy_dir` are the same callback under two names.
#[derive(Clone)]
pub struct PublishData {
    /// Writes a file into the output destination.
    pub write_file: WriteFileFn,
    /// Copies a file or directory into the output destination.
    pub copy_file: CopyDirFn,
    /// Copies a file or directory into the output destination.
    pub copy_dir: CopyDirFn,
    /// Reads a file from the output destination.
    pub read_file: ReadFileFn,
}

impl fmt::Debug for PublishData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishData").finish_non_exhaustive()
    }
}

/// Data for the content hook (copied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentData {
    /// Rendered output.
    pub content: String,
    /// Name of the output file.
    pub file_name: String,
}

/// Event for `on_start` and `on_complete`.
pub type NotifyEvent = PluginEvent<()>;
/// Event for `on_handle_plugins`.
pub type PluginsEvent = PluginEvent<PluginsData>;
/// Event for `on_handle_config`.
pub type ConfigEvent = PluginEvent<ConfigData>;
/// Event for `on_handle_code`.
pub type CodeEvent = PluginEvent<CodeData>;
/// Event for `on_handle_code_parser`.
pub type CodeParserEvent = PluginEvent<CodeParserData>;
/// Event for `on_handle_doc_class`.
pub type DocClassEvent = PluginEvent<DocClassData>;
/// Event for `on_handle_ast`.
pub type AstEvent = PluginEvent<AstData>;
/// Event for `on_handle_docs`.
pub type DocsEvent = PluginEvent<DocsData>;
/// Event for `on_publish`.
pub type PublishEvent = PluginEvent<PublishData>;
/// Event for `on_handle_content`.
pub type ContentEvent = PluginEvent<ContentData>;
