//! # Feedback Finder - Detect Feedback Loops in Stage Chains
//!
//! Feedback Finder is a tool for detecting feedback loops in linked chains of
//! processing stages. A chain is a set of stages where each stage has at most
//! one successor; a feedback loop exists when following the successor links
//! from the entry ever revisits a stage. Detection uses Floyd's two-pointer
//! cycle-finding algorithm: O(n) time, O(1) auxiliary space, and the chain is
//! never modified.
//!
//! ## Main Components
//!
//! - **Chain**: Index-based arena of stages with non-owning successor links
//! - **Detector**: Implements feedback detection (Floyd's tortoise and hare)
//! - **Chain files**: TOML definitions of chains for the CLI
//! - **Reports**: Generates human-readable and machine-readable reports
//!
//! ## Usage
//!
//! ### Example: Checking a Chain Built in Code
//!
//! ```
//! use feedback_finder::chain::StageArena;
//! use feedback_finder::detector::{FeedbackDetector, detect_feedback};
//!
//! // Build a chain: input → reverb → delay, and close a loop back to reverb
//! let mut arena = StageArena::new();
//! let input = arena.add_stage("input");
//! let reverb = arena.add_stage("reverb");
//! let delay = arena.add_stage("delay");
//! arena.link(input, Some(reverb));
//! arena.link(reverb, Some(delay));
//! arena.link(delay, Some(reverb));
//!
//! // The boolean answer
//! assert!(detect_feedback(&arena, Some(&input)));
//!
//! // Or a full description of the loop
//! let mut detector = FeedbackDetector::new();
//! detector.scan(&arena, Some(input));
//!
//! let feedback = detector.feedback().unwrap();
//! assert_eq!(feedback.transient_length(), 1);
//! assert_eq!(feedback.cycle_length(), 2);
//! assert_eq!(feedback.stage_names(), ["reverb", "delay"]);
//! ```
//!
//! ### Example: Loading a Chain from a TOML File
//!
//! ```
//! use feedback_finder::chain_file::ChainFile;
//! use feedback_finder::detector::detect_feedback;
//!
//! # fn main() -> miette::Result<()> {
//! let chain = ChainFile::parse_str(
//!     "chain.toml",
//!     r#"
//! [[stage]]
//! name = "input"
//! next = "compressor"
//!
//! [[stage]]
//! name = "compressor"
//! "#,
//! )?;
//!
//! let (arena, entry) = chain.into_arena()?;
//! assert!(!detect_feedback(&arena, entry.as_ref()));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Generating Reports
//!
//! ```
//! use feedback_finder::chain::StageArena;
//! use feedback_finder::detector::FeedbackDetector;
//! use feedback_finder::reports::{JsonReportGenerator, ReportGenerator};
//!
//! # fn main() -> Result<(), feedback_finder::error::FeedbackFinderError> {
//! let mut arena = StageArena::new();
//! let a = arena.add_stage("a");
//! arena.link(a, Some(a)); // self-loop
//!
//! let mut detector = FeedbackDetector::new();
//! detector.scan(&arena, Some(a));
//!
//! let json = JsonReportGenerator::new().generate_report(&detector)?;
//! assert!(json.contains("\"has_feedback\": true"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod chain;
pub mod chain_file;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod reports;
pub mod scenarios;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
