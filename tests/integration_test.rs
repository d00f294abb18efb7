//! Integration tests for feedback-finder using the library interface

use std::fs;

use feedback_finder::chain_file::ChainFile;
use feedback_finder::detector::{FeedbackDetector, detect_feedback};
use feedback_finder::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use feedback_finder::scenarios;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Write a chain definition file into a temp dir and return its path.
fn write_chain_file(temp_dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_clean_chain_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_chain_file(
        &temp_dir,
        "pedalboard.toml",
        r#"
[[stage]]
name = "input"
next = "compressor"

[[stage]]
name = "compressor"
next = "reverb"

[[stage]]
name = "reverb"
next = "output"

[[stage]]
name = "output"
"#,
    );

    let chain = ChainFile::parse_file(&path).unwrap();
    let (arena, entry) = chain.into_arena().unwrap();

    assert_eq!(arena.len(), 4);
    assert!(!detect_feedback(&arena, entry.as_ref()));

    let mut detector = FeedbackDetector::new();
    detector.scan(&arena, entry);
    assert!(!detector.has_feedback());

    let report = HumanReportGenerator::new()
        .generate_report(&detector)
        .unwrap();
    assert!(report.contains("No feedback loop detected"));
}

#[test]
fn test_feedback_chain_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_chain_file(
        &temp_dir,
        "feedback.toml",
        r#"
[[stage]]
name = "input"
next = "reverb"

[[stage]]
name = "reverb"
next = "delay"

[[stage]]
name = "delay"
next = "chorus"

[[stage]]
name = "chorus"
next = "reverb"
"#,
    );

    let chain = ChainFile::parse_file(&path).unwrap();
    let (arena, entry) = chain.into_arena().unwrap();

    assert!(detect_feedback(&arena, entry.as_ref()));

    let mut detector = FeedbackDetector::new();
    detector.scan(&arena, entry);

    let feedback = detector.feedback().unwrap();
    assert_eq!(feedback.transient_length(), 1);
    assert_eq!(feedback.cycle_length(), 3);
    assert_eq!(feedback.stage_names(), ["reverb", "delay", "chorus"]);

    let json_report = JsonReportGenerator::new()
        .generate_report(&detector)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&json_report).unwrap();
    assert_eq!(json["has_feedback"], true);
    assert_eq!(json["feedback"]["loop_start"], "reverb");
}

#[test]
fn test_entry_override_changes_the_answer() {
    // The loop hangs off the side of the chain: entry "input" reaches it,
    // entry "output" does not.
    let chain = ChainFile::parse_str(
        "side-loop.toml",
        r#"
[[stage]]
name = "input"
next = "reverb"

[[stage]]
name = "reverb"
next = "reverb"

[[stage]]
name = "output"
"#,
    )
    .unwrap();

    let (arena, default_entry) = chain.into_arena().unwrap();

    assert_eq!(default_entry, arena.find("input"));
    assert!(detect_feedback(&arena, default_entry.as_ref()));

    let output = arena.find("output").unwrap();
    assert!(!detect_feedback(&arena, Some(&output)));
}

#[test]
fn test_missing_file_reports_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let result = ChainFile::parse_file(&missing);
    assert!(result.is_err());
}

#[test]
fn test_builtin_scenarios_all_pass() {
    let outcomes = scenarios::run_all();
    assert_eq!(outcomes.len(), 6);

    for outcome in outcomes {
        assert!(
            outcome.passed(),
            "scenario '{}' expected {} but computed {}",
            outcome.name,
            outcome.expected,
            outcome.computed
        );
    }
}

#[test]
fn test_detection_has_no_side_effects() {
    let chain = ChainFile::parse_str(
        "loop.toml",
        r#"
[[stage]]
name = "a"
next = "b"

[[stage]]
name = "b"
next = "a"
"#,
    )
    .unwrap();

    let (arena, entry) = chain.into_arena().unwrap();

    // The links must read the same before and after repeated detection
    let before: Vec<_> = arena.iter().map(|(_, s)| s.next()).collect();
    for _ in 0..3 {
        assert!(detect_feedback(&arena, entry.as_ref()));
    }
    let after: Vec<_> = arena.iter().map(|(_, s)| s.next()).collect();

    assert_eq!(before, after);
}
