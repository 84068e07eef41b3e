//! The eleven lifecycle points plugins can observe.

use serde::{Deserialize, Serialize};

/// Enumeration of all hook points, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    /// Fired once with the configured plugin list; may replace it.
    OnHandlePlugins,
    /// Fired when the run starts.
    OnStart,
    /// Fired with the loaded configuration.
    OnHandleConfig,
    /// Fired with the text of each source file.
    OnHandleCode,
    /// Fired to choose the parser for each source file.
    OnHandleCodeParser,
    /// Fired when the doc factory for a doc kind is chosen.
    OnHandleDocClass,
    /// Fired with the syntax tree of each source file.
    OnHandleAst,
    /// Fired with every produced doc record.
    OnHandleDocs,
    /// Fired at publish time with the output I/O callbacks.
    OnPublish,
    /// Fired with each rendered output file.
    OnHandleContent,
    /// Fired when the run completes.
    OnComplete,
}

impl HookPoint {
    /// Every hook point, in lifecycle order.
    pub const ALL: [HookPoint; 11] = [
        Self::OnHandlePlugins,
        Self::OnStart,
        Self::OnHandleConfig,
        Self::OnHandleCode,
        Self::OnHandleCodeParser,
        Self::OnHandleDocClass,
        Self::OnHandleAst,
        Self::OnHandleDocs,
        Self::OnPublish,
        Self::OnHandleContent,
        Self::OnComplete,
    ];

    /// Returns the string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnHandlePlugins => "on_handle_plugins",
            Self::OnStart => "on_start",
            Self::OnHandleConfig => "on_handle_config",
            Self::OnHandleCode => "on_handle_code",
            Self::OnHandleCodeParser => "on_handle_code_parser",
            Self::OnHandleDocClass => "on_handle_doc_class",
            Self::OnHandleAst => "on_handle_ast",
            Self::OnHandleDocs => "on_handle_docs",
            Self::OnPublish => "on_publish",
            Self::OnHandleContent => "on_handle_content",
            Self::OnComplete => "on_complete",
        }
    }
}

impl std::fmt::Display for HookPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
