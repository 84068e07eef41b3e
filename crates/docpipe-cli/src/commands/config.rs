//! `docpipe config`: show the configuration after the config hook.

use docpipe_core::config::AppConfig;
use docpipe_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Execute the config command
pub fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let mut manager = super::build_manager(config)?;
    let handled = manager.on_handle_config(&config.to_value()?)?;
    let handled = AppConfig::from_value(handled)?;

    output::print_value(&handled.to_value()?, format);
    Ok(())
}
