//! Drops doc records that should not be published.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use docpipe_core::result::AppResult;
use docpipe_plugin::hooks::definitions::HookPoint;
use docpipe_plugin::hooks::event::DocsEvent;
use docpipe_plugin::traits::Plugin;

use crate::parse_option;

/// Registry identifier.
pub const IDENTIFIER: &str = "exclude-private";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExcludeOption {
    /// Also drop `protected` records.
    protected: bool,
}

/// Removes doc records whose `access` is `private`.
#[derive(Debug, Default)]
pub struct ExcludePrivatePlugin;

impl ExcludePrivatePlugin {
    fn is_excluded(doc: &Value, option: &ExcludeOption) -> bool {
        match doc.get("access").and_then(Value::as_str) {
            Some("private") => true,
            Some("protected") => option.protected,
            _ => false,
        }
    }
}

impl Plugin for ExcludePrivatePlugin {
    fn name(&self) -> &str {
        IDENTIFIER
    }

    fn registered_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::OnHandleDocs]
    }

    fn on_handle_docs(&self, event: &mut DocsEvent) -> AppResult<()> {
        let option: ExcludeOption = parse_option(IDENTIFIER, &event.option)?;
        let before = event.data.docs.len();
        event
            .data
            .docs
            .retain(|doc| !Self::is_excluded(doc, &option));

        debug!(
            removed = before - event.data.docs.len(),
            remaining = event.data.docs.len(),
            "Excluded non-public docs"
        );
        Ok(())
    }
}
