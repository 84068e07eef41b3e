//! # docpipe-core
//!
//! Core crate for docpipe. Contains the plugin registration entry type,
//! configuration schemas, the opaque capability traits handed to plugins
//! (parsers, doc factories, publish callbacks), and the unified error system.
//!
//! This crate has **no** internal dependencies on other docpipe crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
pub use types::plugin_entry::PluginEntry;
