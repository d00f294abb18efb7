//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::detector::FeedbackDetector;
use crate::error::FeedbackFinderError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &FeedbackDetector) -> Result<String, FeedbackFinderError> {
        let feedback = detector.feedback().map(|feedback| {
            json!({
                "loop_start": feedback.stage_names()[0],
                "transient_length": feedback.transient_length(),
                "cycle_length": feedback.cycle_length(),
                "stages": feedback.stage_names(),
            })
        });

        let report = json!({
            "has_feedback": detector.has_feedback(),
            "feedback": feedback,
        });

        serde_json::to_string_pretty(&report).map_err(FeedbackFinderError::Json)
    }
}
