//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::FeedbackDetector;
use crate::error::FeedbackFinderError;
use crate::utils::string::pluralize;

#[derive(Default)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &FeedbackDetector) -> Result<String, FeedbackFinderError> {
        let mut output = String::new();

        let Some(feedback) = detector.feedback() else {
            write!(
                output,
                "\n{} No feedback loop detected! The chain runs straight through to its end.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        };

        write!(
            output,
            "\n{} Feedback loop detected:\n\n",
            style("❌").red().bold()
        )?;

        writeln!(
            output,
            "  {} Loop starts at {} ({} {} after the entry)",
            style("🔄").yellow(),
            style(&feedback.stage_names()[0]).bold(),
            style(feedback.transient_length()).bold(),
            pluralize("stage", feedback.transient_length())
        )?;

        writeln!(
            output,
            "  {} Loop length: {} {}",
            style("📏").blue(),
            style(feedback.cycle_length()).bold(),
            pluralize("stage", feedback.cycle_length())
        )?;

        writeln!(output, "\n  {} Stages on the loop:", style("🔗").cyan())?;
        for name in feedback.stage_names() {
            writeln!(output, "    {} {}", style("•").dim(), style(name).bold())?;
        }

        writeln!(
            output,
            "\n{} To break the loop, clear the 'next' link of the stage that points back into \
             the chain.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::StageArena;
    use crate::detector::FeedbackDetector;

    fn scanned_detector(cyclic: bool) -> FeedbackDetector {
        let mut arena = StageArena::new();
        let a = arena.add_stage("input");
        let b = arena.add_stage("reverb");
        arena.link(a, Some(b));
        if cyclic {
            arena.link(b, Some(a));
        }

        let mut detector = FeedbackDetector::new();
        detector.scan(&arena, Some(a));
        detector
    }

    #[test]
    fn test_human_report_without_feedback() {
        let generator = HumanReportGenerator::new();
        let report = generator.generate_report(&scanned_detector(false)).unwrap();

        assert!(report.contains("No feedback loop detected"));
    }

    #[test]
    fn test_human_report_with_feedback() {
        let generator = HumanReportGenerator::new();
        let report = generator.generate_report(&scanned_detector(true)).unwrap();

        assert!(report.contains("Feedback loop detected"));
        assert!(report.contains("input"));
        assert!(report.contains("reverb"));
        assert!(report.contains("Loop length"));
    }

    #[test]
    fn test_human_report_pluralization() {
        // Self-loop: loop length is exactly one stage
        let mut arena = StageArena::new();
        let a = arena.add_stage("solo");
        arena.link(a, Some(a));

        let mut detector = FeedbackDetector::new();
        detector.scan(&arena, Some(a));

        let generator = HumanReportGenerator::new();
        let report = generator.generate_report(&detector).unwrap();

        assert!(report.contains("1 stage"));
        assert!(!report.contains("1 stages"));
    }
}
