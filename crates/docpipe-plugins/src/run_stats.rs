//! Counts source files seen during a run.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;

use docpipe_core::result::AppResult;
use docpipe_plugin::hooks::definitions::HookPoint;
use docpipe_plugin::hooks::event::{CodeEvent, NotifyEvent};
use docpipe_plugin::traits::Plugin;

/// Registry identifier.
pub const IDENTIFIER: &str = "run-stats";

/// Counts files passing through the code hook and logs a summary on completion.
#[derive(Debug, Default)]
pub struct RunStatsPlugin {
    files: AtomicUsize,
    bytes: AtomicUsize,
}

impl RunStatsPlugin {
    /// Creates a plugin with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files seen since the last start.
    pub fn files(&self) -> usize {
        self.files.load(Ordering::Relaxed)
    }

    /// Total source bytes seen since the last start.
    pub fn bytes(&self) -> usize {
        self.bytes.load(Ordering::Relaxed)
    }
}

impl Plugin for RunStatsPlugin {
    fn name(&self) -> &str {
        IDENTIFIER
    }

    fn registered_hooks(&self) -> Vec<HookPoint> {
        vec![
            HookPoint::OnStart,
            HookPoint::OnHandleCode,
            HookPoint::OnComplete,
        ]
    }

    fn on_start(&self, _event: &mut NotifyEvent) -> AppResult<()> {
        self.files.store(0, Ordering::Relaxed);
        self.bytes.store(0, Ordering::Relaxed);
        Ok(())
    }

    fn on_handle_code(&self, event: &mut CodeEvent) -> AppResult<()> {
        self.files.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(event.data.code.len(), Ordering::Relaxed);
        Ok(())
    }

    fn on_complete(&self, _event: &mut NotifyEvent) -> AppResult<()> {
        info!(files = self.files(), bytes = self.bytes(), "Run complete");
        Ok(())
    }
}
