//! Trace command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::chain_file::ChainFile;
use crate::config::TraceConfig;
use crate::constants::trace::FOLD_BACK_MARKER;
use crate::detector::FeedbackDetector;
use crate::error::FeedbackFinderError;
use crate::executors::CommandExecutor;

pub struct TraceExecutor;

impl CommandExecutor for TraceExecutor {
    type Config = TraceConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Tracing '{}'...\n",
            style("🔁").cyan(),
            config.chain_file.display()
        );

        let chain_file = ChainFile::parse_file(&config.chain_file)
            .wrap_err("Failed to parse chain definition file")?;

        let (arena, file_entry) = chain_file
            .into_arena()
            .into_diagnostic()
            .wrap_err("Failed to resolve chain definition")?;

        let entry = match &config.entry {
            Some(name) => Some(
                arena
                    .find(name)
                    .ok_or_else(|| FeedbackFinderError::UnknownEntry { name: name.clone() })
                    .into_diagnostic()?,
            ),
            None => file_entry,
        };

        let Some(entry) = entry else {
            println!("{} (empty chain)", style("•").dim());
            return Ok(());
        };

        // Detect first so the walk is guaranteed to terminate
        let mut detector = FeedbackDetector::new();
        detector.scan(&arena, Some(entry));

        match detector.feedback() {
            None => {
                // Simple path: print every stage up to the end
                let mut step = 1;
                let mut cursor = Some(entry);
                while let Some(id) = cursor {
                    println!("{:3}. {}", step, style(arena.name(id)).bold());
                    cursor = arena.stage(id).next();
                    step += 1;
                }
                println!("     {}", style("(end of chain)").dim());
            }
            Some(feedback) => {
                // Transient stages, printed once
                let mut step = 1;
                let mut cursor = entry;
                for _ in 0..feedback.transient_length() {
                    println!("{:3}. {}", step, style(arena.name(cursor)).bold());
                    cursor = arena
                        .stage(cursor)
                        .next()
                        .expect("transient stage has a successor");
                    step += 1;
                }

                // Loop stages, each marked
                for name in feedback.stage_names() {
                    println!(
                        "{:3}. {} {}",
                        step,
                        style(name).bold(),
                        style("(loop)").yellow()
                    );
                    step += 1;
                }

                println!(
                    "     {} {}",
                    style(FOLD_BACK_MARKER).yellow().bold(),
                    style(format!(
                        "back to '{}'",
                        arena.name(feedback.loop_start())
                    ))
                    .yellow()
                );
            }
        }

        Ok(())
    }
}
