//! Hook system: lifecycle points, event payloads, and the dispatch loop.

pub mod definitions;
pub mod dispatcher;
pub mod event;

pub use definitions::HookPoint;
pub use dispatcher::HookDispatcher;
pub use event::PluginEvent;
