//! `docpipe publish`: run the publish hook against an output directory.

use std::path::PathBuf;

use clap::Args;

use docpipe_core::config::AppConfig;
use docpipe_core::error::AppError;

use crate::io::OutputDir;
use crate::output;

/// Arguments for the publish command
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Output directory
    #[arg(short, long, default_value = "./docs")]
    pub out: PathBuf,
}

/// Execute the publish command
pub fn execute(args: &PublishArgs, config: &AppConfig) -> Result<(), AppError> {
    let out = OutputDir::create(&args.out)?;

    let mut manager = super::build_manager(config)?;
    manager.on_start()?;
    manager.on_publish(out.write_file(), out.copy_dir(), out.read_file())?;
    manager.on_complete()?;

    output::print_success(&format!("Published to '{}'", args.out.display()));
    Ok(())
}
