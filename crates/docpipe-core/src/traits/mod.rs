//! Capability traits implemented by the host pipeline and handed to plugins.
//!
//! The plugin core never calls these itself; it only forwards references.

pub mod parser;
pub mod publish;

pub use parser::{CodeParser, CommentParser, DocFactory, ParamParser, SyntaxParser};
pub use publish::{CopyDirFn, ReadFileFn, WriteFileFn};
