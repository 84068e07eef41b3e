//! Copies a directory of static assets into the output at publish time.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use docpipe_core::error::AppError;
use docpipe_core::result::AppResult;
use docpipe_plugin::hooks::definitions::HookPoint;
use docpipe_plugin::hooks::event::PublishEvent;
use docpipe_plugin::traits::Plugin;

use crate::parse_option;

/// Registry identifier.
pub const IDENTIFIER: &str = "copy-assets";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CopyOption {
    /// Source directory.
    src: Option<PathBuf>,
    /// Destination inside the output; defaults to the source's last component.
    dest: Option<PathBuf>,
}

/// Copies `option.src` to `option.dest` through the host's `copy_dir`.
#[derive(Debug, Default)]
pub struct CopyAssetsPlugin;

impl Plugin for CopyAssetsPlugin {
    fn name(&self) -> &str {
        IDENTIFIER
    }

    fn registered_hooks(&self) -> Vec<HookPoint> {
        vec![HookPoint::OnPublish]
    }

    fn on_publish(&self, event: &mut PublishEvent) -> AppResult<()> {
        let option: CopyOption = parse_option(IDENTIFIER, &event.option)?;
        let src = option.src.ok_or_else(|| {
            AppError::configuration(format!("Plugin '{}' requires option 'src'", IDENTIFIER))
        })?;
        let dest = match option.dest {
            Some(dest) => dest,
            None => src.file_name().map(PathBuf::from).ok_or_else(|| {
                AppError::configuration(format!(
                    "Plugin '{}' cannot derive 'dest' from '{}'",
                    IDENTIFIER,
                    src.display()
                ))
            })?,
        };

        (event.data.copy_dir)(&src, &dest)?;
        info!(src = %src.display(), dest = %dest.display(), "Assets copied");
        Ok(())
    }
}
