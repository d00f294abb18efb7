//! Soundcheck command configuration

use crate::cli::OutputFormat;

/// Configuration for the soundcheck command
#[derive(Debug, Clone)]
pub struct SoundcheckConfig {
    /// Output format for the scenario results
    pub format: OutputFormat,
}

impl SoundcheckConfig {
    pub fn builder() -> SoundcheckConfigBuilder {
        SoundcheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct SoundcheckConfigBuilder {
    format: Option<OutputFormat>,
}

impl SoundcheckConfigBuilder {
    pub fn new() -> Self {
        Self { format: None }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for SoundcheckConfigBuilder {
    type Config = SoundcheckConfig;

    fn build(self) -> Result<Self::Config, crate::error::FeedbackFinderError> {
        Ok(SoundcheckConfig {
            format: self.format.ok_or_else(|| {
                crate::error::FeedbackFinderError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
        })
    }
}
