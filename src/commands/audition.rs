//! Audition command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::AuditionConfig;
use crate::error::FeedbackFinderError;

impl FromCommand for AuditionConfig {
    fn from_command(command: Commands) -> Result<Self, FeedbackFinderError> {
        match command {
            Commands::Audition {
                chain_file,
                entry,
                format,
                error_on_feedback,
            } => AuditionConfig::builder()
                .with_chain_file(chain_file)
                .with_entry(entry)
                .with_format(format.format)
                .with_error_on_feedback(error_on_feedback)
                .build(),
            _ => Err(FeedbackFinderError::ConfigurationError {
                message: "Invalid command type for AuditionConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(AuditionConfig);

/// Execute the audition command for detecting chain feedback loops
pub fn execute_audition_command(command: Commands) -> Result<()> {
    let config = AuditionConfig::from_command(command)
        .wrap_err("Failed to parse audition command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::audition::AuditionExecutor;
    AuditionExecutor::execute(config)
}
