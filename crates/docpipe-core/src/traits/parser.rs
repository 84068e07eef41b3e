//! Parsing and doc-construction capabilities.

use std::path::Path;

use serde_json::Value;

use crate::result::AppResult;

/// Parser selected through the code-parser hook.
///
/// Any `Fn(&str, &Value) -> AppResult<Value>` closure is a parser, so a plugin
/// can swap in a wrapper around the host parser without a new type.
pub trait CodeParser: Send + Sync {
    /// Parses source text into a syntax tree using the given parser options.
    fn parse(&self, code: &str, option: &Value) -> AppResult<Value>;
}

impl<F> CodeParser for F
where
    F: Fn(&str, &Value) -> AppResult<Value> + Send + Sync,
{
    fn parse(&self, code: &str, option: &Value) -> AppResult<Value> {
        self(code, option)
    }
}

/// Parses a parameter type expression such as `{string|number} [name=1] - desc`.
pub trait ParamParser: Send + Sync {
    /// Parses one parameter description into a structured value.
    fn parse_param(&self, value: &str) -> AppResult<Value>;
}

/// Splits a documentation comment into tags.
pub trait CommentParser: Send + Sync {
    /// Parses a raw comment body into a list of `{tagName, tagValue}` records.
    fn parse_comment(&self, comment: &str) -> AppResult<Vec<Value>>;
}

/// The host's own source parser.
pub trait SyntaxParser: Send + Sync {
    /// Parses a source file into a syntax tree.
    fn parse_file(&self, code: &str, file_path: &Path) -> AppResult<Value>;
}

/// Builds doc records for one kind of syntax node (class, method, member, ...).
pub trait DocFactory: Send + Sync {
    /// Name of the doc kind this factory produces.
    fn kind(&self) -> &str;

    /// Creates a doc record for `node` inside `ast` of the file at `file_path`.
    fn create(&self, ast: &Value, node: &Value, file_path: &Path) -> AppResult<Value>;
}
