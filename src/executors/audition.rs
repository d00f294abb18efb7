//! Audition command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::chain_file::ChainFile;
use crate::cli::OutputFormat;
use crate::config::AuditionConfig;
use crate::detector::FeedbackDetector;
use crate::error::FeedbackFinderError;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct AuditionExecutor;

impl CommandExecutor for AuditionExecutor {
    type Config = AuditionConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Auditioning '{}' for feedback loops...\n",
            style("🔁").cyan(),
            config.chain_file.display()
        );

        // Load and resolve the chain definition
        let chain_file = ChainFile::parse_file(&config.chain_file)
            .wrap_err("Failed to parse chain definition file")?;

        let (arena, file_entry) = chain_file
            .into_arena()
            .into_diagnostic()
            .wrap_err("Failed to resolve chain definition")?;

        // A --entry flag overrides the file's entry stage
        let entry = match &config.entry {
            Some(name) => Some(
                arena
                    .find(name)
                    .ok_or_else(|| FeedbackFinderError::UnknownEntry { name: name.clone() })
                    .into_diagnostic()?,
            ),
            None => file_entry,
        };

        eprintln!(
            "  {} Stages declared: {}",
            style("→").dim(),
            style(arena.len()).bold()
        );
        match entry {
            Some(id) => eprintln!(
                "  {} Entry stage: {}",
                style("→").dim(),
                style(arena.name(id)).bold()
            ),
            None => eprintln!("  {} Entry stage: {}", style("→").dim(), style("none").dim()),
        }

        // Detect feedback
        let mut detector = FeedbackDetector::new();
        detector.scan(&arena, entry);

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new();
                generator.generate_report(&detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if a loop was found and requested
        if config.error_on_feedback && detector.has_feedback() {
            std::process::exit(1);
        }

        Ok(())
    }
}
