//! Prelude for convenient imports when writing plugins.

pub use docpipe_core::error::{AppError, ErrorKind};
pub use docpipe_core::result::AppResult;
pub use docpipe_core::traits::{
    CodeParser, CommentParser, CopyDirFn, DocFactory, ParamParser, ReadFileFn, SyntaxParser,
    WriteFileFn,
};
pub use docpipe_core::types::plugin_entry::PluginEntry;

pub use crate::hooks::definitions::HookPoint;
pub use crate::hooks::event::{
    AstEvent, CodeEvent, CodeParserEvent, ConfigEvent, ContentEvent, DocClassEvent, DocsEvent,
    NotifyEvent, PluginEvent, PluginsEvent, PublishEvent,
};
pub use crate::manager::{ParsingCapabilities, PluginManager};
pub use crate::registry::PluginRegistry;
pub use crate::resolver::PluginResolver;
pub use crate::traits::Plugin;

pub use crate::{declare_plugin, plugin_entries};
