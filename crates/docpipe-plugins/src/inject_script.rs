//! Adds `<script>` tags to rendered HTML pages.

use serde::Deserialize;

use docpipe_core::result::AppResult;
use docpipe_plugin::hooks::definitions::HookPoint;
use docpipe_plugin::hooks::event::ContentEvent;
use docpipe_plugin::traits::Plugin;

use crate::parse_option;

/// Registry identifier.
pub const IDENTIFIER: &str = "inject-script";

const BODY_END: &str = "</body>";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InjectOption {
    /// Script sources, inserted in order.
    scripts: Vec<String>,
}

/// Inserts one `<script src>` per configured source before `</body>`.
///
/// Content without a closing body tag, or that is not an `.html` file, is
/// left unchanged.
#[derive(Debug, Default)]
pub struct InjectScriptPlugin;

impl Plugin for InjectScriptPlugin {
    fn name(&self) -> &str {
        IDENTIFIER
    }

    fn registered_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::OnHandleContent]
    }

    fn on_handle_content(&self, event: &mut ContentEvent) -> AppResult<()> {
        let option: InjectOption = parse_option(IDENTIFIER, &event.option)?;
        if option.scripts.is_empty() || !event.data.file_name.ends_with(".html") {
            return Ok(());
        }

        let Some(at) = event.data.content.rfind(BODY_END) else {
            return Ok(());
        };

        let tags: String = option
            .scripts
            .iter()
            .map(|src| format!("<script src=\"{}\"></script>\n", src))
            .collect();
        event.data.content.insert_str(at, &tags);
        Ok(())
    }
}
