//! Soundcheck command executor

use console::style;
use miette::{IntoDiagnostic, Result};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::SoundcheckConfig;
use crate::executors::CommandExecutor;
use crate::scenarios;
use crate::utils::string::pluralize;

pub struct SoundcheckExecutor;

impl CommandExecutor for SoundcheckExecutor {
    type Config = SoundcheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Running built-in detection scenarios...\n",
            style("🔁").cyan()
        );

        let outcomes = scenarios::run_all();
        let failures = outcomes.iter().filter(|o| !o.passed()).count();

        match config.format {
            OutputFormat::Human => {
                for outcome in &outcomes {
                    let verdict = if outcome.passed() {
                        style("PASS").green().bold()
                    } else {
                        style("FAIL").red().bold()
                    };
                    println!(
                        "{} {} — expected: {}, computed: {}",
                        verdict,
                        outcome.name,
                        style(outcome.expected).bold(),
                        style(outcome.computed).bold()
                    );
                }

                if failures == 0 {
                    println!(
                        "\n{} All {} scenarios passed.",
                        style("✅").green().bold(),
                        outcomes.len()
                    );
                } else {
                    println!(
                        "\n{} {} {} failed out of {}.",
                        style("❌").red().bold(),
                        style(failures).red().bold(),
                        pluralize("scenario", failures),
                        outcomes.len()
                    );
                }
            }
            OutputFormat::Json => {
                let report = json!({
                    "scenario_count": outcomes.len(),
                    "failures": failures,
                    "scenarios": outcomes
                        .iter()
                        .map(|o| {
                            json!({
                                "name": o.name,
                                "expected": o.expected,
                                "computed": o.computed,
                                "passed": o.passed(),
                            })
                        })
                        .collect::<Vec<_>>(),
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).into_diagnostic()?
                );
            }
        }

        // A mismatch means the detector itself is broken; fail the run
        if failures > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
