//! `docpipe content`: pass a rendered file through the content hook.

use std::path::PathBuf;

use clap::Args;

use docpipe_core::config::AppConfig;
use docpipe_core::error::{AppError, ErrorKind};

/// Arguments for the content command
#[derive(Debug, Args)]
pub struct ContentArgs {
    /// Rendered file to transform
    pub file: PathBuf,

    /// Output file name reported to plugins (defaults to the file's name)
    #[arg(short, long)]
    pub name: Option<String>,
}

/// Execute the content command
pub fn execute(args: &ContentArgs, config: &AppConfig) -> Result<(), AppError> {
    let content = std::fs::read_to_string(&args.file).map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read '{}': {}", args.file.display(), e),
            e,
        )
    })?;
    let file_name = match &args.name {
        Some(name) => name.clone(),
        None => args
            .file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let mut manager = super::build_manager(config)?;
    manager.on_start()?;
    let content = manager.on_handle_content(&content, &file_name)?;
    manager.on_complete()?;

    print!("{}", content);
    Ok(())
}
