//! Trace command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::TraceConfig;
use crate::error::FeedbackFinderError;

impl FromCommand for TraceConfig {
    fn from_command(command: Commands) -> Result<Self, FeedbackFinderError> {
        match command {
            Commands::Trace { chain_file, entry } => TraceConfig::builder()
                .with_chain_file(chain_file)
                .with_entry(entry)
                .build(),
            _ => Err(FeedbackFinderError::ConfigurationError {
                message: "Invalid command type for TraceConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(TraceConfig);

/// Execute the trace command for walking a chain stage by stage
pub fn execute_trace_command(command: Commands) -> Result<()> {
    let config =
        TraceConfig::from_command(command).wrap_err("Failed to parse trace command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::trace::TraceExecutor;
    TraceExecutor::execute(config)
}
