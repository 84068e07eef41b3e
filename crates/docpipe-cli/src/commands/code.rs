//! `docpipe code`: pass a source file through the code hook.

use std::path::PathBuf;

use clap::Args;

use docpipe_core::config::AppConfig;
use docpipe_core::error::{AppError, ErrorKind};

/// Arguments for the code command
#[derive(Debug, Args)]
pub struct CodeArgs {
    /// Source file to transform
    pub file: PathBuf,
}

/// Execute the code command
pub fn execute(args: &CodeArgs, config: &AppConfig) -> Result<(), AppError> {
    let code = std::fs::read_to_string(&args.file).map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read '{}': {}", args.file.display(), e),
            e,
        )
    })?;

    let mut manager = super::build_manager(config)?;
    manager.on_start()?;
    let code = manager.on_handle_code(&code, &args.file)?;
    manager.on_complete()?;

    print!("{}", code);
    Ok(())
}
