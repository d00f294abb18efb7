use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::FormatArgs;

#[derive(Parser)]
#[command(
    name = "feedback-finder",
    about = "🔁 Detect feedback loops in linked chains of processing stages",
    long_about = "feedback-finder analyzes chains of processing stages, where each stage has at \
                  most one successor, and reports whether following the chain from its entry \
                  ever loops back on itself. Detection uses Floyd's two-pointer algorithm: O(n) \
                  time, O(1) extra space, and the chain is never modified.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Listen to a chain and report any feedback loop
    ///
    /// Loads a chain definition from a TOML file, walks it from the entry
    /// stage, and reports whether the successor links ever fold back on an
    /// earlier stage. When a loop is found the report names the stage where
    /// the loop starts and the stages it passes through.
    #[command(
        long_about = "Analyze a chain definition file for feedback loops. The file declares \
                      [[stage]] entries with optional 'next' links; the entry stage defaults to \
                      the first declared stage. Detection follows successor links with two \
                      cursors (one and two steps per iteration) and reports a loop when the \
                      cursors meet. Use --error-on-feedback to fail CI when a loop exists."
    )]
    Audition {
        /// Chain definition file to analyze
        #[arg(value_name = "CHAIN_FILE", env = "FEEDBACK_FINDER_CHAIN_FILE")]
        chain_file: PathBuf,

        /// Entry stage (overrides the file's entry)
        #[arg(long, value_name = "STAGE_NAME", env = "FEEDBACK_FINDER_ENTRY")]
        entry: Option<String>,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if a feedback loop is found
        #[arg(long, env = "FEEDBACK_FINDER_ERROR_ON_FEEDBACK")]
        error_on_feedback: bool,
    },

    /// Follow a chain stage by stage and print the walk
    ///
    /// Prints the sequence of stages reached from the entry. On a clean
    /// chain the walk ends at the last stage; on a loop the walk marks the
    /// stage where the chain folds back.
    #[command(
        long_about = "Walk a chain definition from its entry stage and print each stage in \
                      order. Loops are detected first, so the walk always terminates: the \
                      stages before the loop are printed once, the loop stages are printed \
                      once, and the fold-back target is marked at the end."
    )]
    Trace {
        /// Chain definition file to walk
        #[arg(value_name = "CHAIN_FILE", env = "FEEDBACK_FINDER_CHAIN_FILE")]
        chain_file: PathBuf,

        /// Entry stage (overrides the file's entry)
        #[arg(long, value_name = "STAGE_NAME", env = "FEEDBACK_FINDER_ENTRY")]
        entry: Option<String>,
    },

    /// Run the built-in detection scenarios
    ///
    /// Runs a fixed set of chain shapes with known answers (straight chain,
    /// rho-shaped loop, empty chain, self-loop, full cycle) and prints a
    /// pass/fail line per scenario. Exits non-zero if any computed result
    /// differs from the expected one.
    #[command(
        long_about = "Run the built-in detection scenarios against the detector and report \
                      expected versus computed results. Every scenario builds its own fixture, \
                      so scenarios are independent and re-runnable. A mismatch means the \
                      detector itself is broken, and the process exits with a non-zero code."
    )]
    Soundcheck {
        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
