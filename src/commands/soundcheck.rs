//! Soundcheck command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SoundcheckConfig;
use crate::error::FeedbackFinderError;

impl FromCommand for SoundcheckConfig {
    fn from_command(command: Commands) -> Result<Self, FeedbackFinderError> {
        match command {
            Commands::Soundcheck { format } => SoundcheckConfig::builder()
                .with_format(format.format)
                .build(),
            _ => Err(FeedbackFinderError::ConfigurationError {
                message: "Invalid command type for SoundcheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SoundcheckConfig);

/// Execute the soundcheck command for running the built-in scenarios
pub fn execute_soundcheck_command(command: Commands) -> Result<()> {
    let config = SoundcheckConfig::from_command(command)
        .wrap_err("Failed to parse soundcheck command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::soundcheck::SoundcheckExecutor;
    SoundcheckExecutor::execute(config)
}
