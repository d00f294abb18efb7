//! Audition command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;

/// Configuration for the audition command
///
/// This struct contains all options for detecting and reporting feedback
/// loops in a chain definition file.
#[derive(Debug, Clone)]
pub struct AuditionConfig {
    /// Chain definition file to analyze
    pub chain_file: PathBuf,
    /// Entry stage name (None = use the file's entry)
    pub entry: Option<String>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if a feedback loop is found
    pub error_on_feedback: bool,
}

impl AuditionConfig {
    pub fn builder() -> AuditionConfigBuilder {
        AuditionConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct AuditionConfigBuilder {
    chain_file: Option<PathBuf>,
    entry: Option<Option<String>>,
    format: Option<OutputFormat>,
    error_on_feedback: Option<bool>,
}

impl AuditionConfigBuilder {
    pub fn new() -> Self {
        Self {
            chain_file: None,
            entry: None,
            format: None,
            error_on_feedback: None,
        }
    }

    pub fn with_chain_file(mut self, chain_file: PathBuf) -> Self {
        self.chain_file = Some(chain_file);
        self
    }

    pub fn with_entry(mut self, entry: Option<String>) -> Self {
        self.entry = Some(entry);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_feedback(mut self, error_on_feedback: bool) -> Self {
        self.error_on_feedback = Some(error_on_feedback);
        self
    }
}

impl crate::common::ConfigBuilder for AuditionConfigBuilder {
    type Config = AuditionConfig;

    fn build(self) -> Result<Self::Config, crate::error::FeedbackFinderError> {
        Ok(AuditionConfig {
            chain_file: self.chain_file.ok_or_else(|| {
                crate::error::FeedbackFinderError::ConfigurationError {
                    message: "Missing required field: chain_file".to_string(),
                }
            })?,
            entry: self.entry.ok_or_else(|| {
                crate::error::FeedbackFinderError::ConfigurationError {
                    message: "Missing required field: entry".to_string(),
                }
            })?,
            format: self.format.ok_or_else(|| {
                crate::error::FeedbackFinderError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                }
            })?,
            error_on_feedback: self.error_on_feedback.ok_or_else(|| {
                crate::error::FeedbackFinderError::ConfigurationError {
                    message: "Missing required field: error_on_feedback".to_string(),
                }
            })?,
        })
    }
}
