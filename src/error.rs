use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(feedback_finder::chain_file_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct ChainFileParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum FeedbackFinderError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(feedback_finder::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ChainFileParseError(Box<ChainFileParseError>),

    #[error("Stage '{name}' is declared more than once")]
    #[diagnostic(
        code(feedback_finder::duplicate_stage),
        help("Stage names must be unique within a chain file")
    )]
    DuplicateStage { name: String },

    #[error("Stage '{from}' points to unknown stage '{to}'")]
    #[diagnostic(
        code(feedback_finder::unknown_successor),
        help("Every 'next' value must name a declared [[stage]]")
    )]
    UnknownSuccessor { from: String, to: String },

    #[error("Entry stage '{name}' is not declared in the chain")]
    #[diagnostic(
        code(feedback_finder::unknown_entry),
        help("The entry must name one of the declared [[stage]] entries")
    )]
    UnknownEntry { name: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(feedback_finder::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(feedback_finder::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(feedback_finder::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(feedback_finder::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_chain_file_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = ChainFileParseError {
            file: "chain.toml".to_string(),
            source_code: NamedSource::new("chain.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Invalid TOML syntax in 'chain.toml'");
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = FeedbackFinderError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_unknown_successor_error() {
        let error = FeedbackFinderError::UnknownSuccessor {
            from: "reverb".to_string(),
            to: "delya".to_string(),
        };

        let error_str = error.to_string();
        assert_eq!(error_str, "Stage 'reverb' points to unknown stage 'delya'");
    }

    #[test]
    fn test_configuration_error() {
        let error = FeedbackFinderError::ConfigurationError {
            message: "Invalid configuration value".to_string(),
        };

        let error_str = error.to_string();
        assert_eq!(
            error_str,
            "Configuration error: Invalid configuration value"
        );
    }

    #[test]
    fn test_error_codes() {
        // Test that the error variants carry proper diagnostic information
        let error = FeedbackFinderError::DuplicateStage {
            name: "chorus".to_string(),
        };

        use miette::Diagnostic;
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let err: FeedbackFinderError = io_err.into();

        match err {
            FeedbackFinderError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_str = "{invalid json}";
        let json_err = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let err: FeedbackFinderError = json_err.into();

        match err {
            FeedbackFinderError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
