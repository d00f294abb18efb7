//! Trace command configuration

use std::path::PathBuf;

/// Configuration for the trace command
#[derive(Debug, Clone)]
pub struct TraceConfig {
    /// Chain definition file to walk
    pub chain_file: PathBuf,
    /// Entry stage name (None = use the file's entry)
    pub entry: Option<String>,
}

impl TraceConfig {
    pub fn builder() -> TraceConfigBuilder {
        TraceConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct TraceConfigBuilder {
    chain_file: Option<PathBuf>,
    entry: Option<Option<String>>,
}

impl TraceConfigBuilder {
    pub fn new() -> Self {
        Self {
            chain_file: None,
            entry: None,
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
}

impl crate::common::ConfigBuilder for TraceConfigBuilder {
    type Config = TraceConfig;

    fn build(self) -> Result<Self::Config, crate::error::FeedbackFinderError> {
        Ok(TraceConfig {
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
        })
    }
}
