//! Command implementations for the feedback-finder CLI
//!
//! This module contains the implementations for each CLI command:
//! - audition: Listen to a chain and report any feedback loop
//! - trace: Follow a chain stage by stage and print the walk
//! - soundcheck: Run the built-in detection scenarios

pub mod audition;
pub mod soundcheck;
pub mod trace;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Audition { .. } => audition::execute_audition_command(command),
        Commands::Trace { .. } => trace::execute_trace_command(command),
        Commands::Soundcheck { .. } => soundcheck::execute_soundcheck_command(command),
    }
}
