//! Tests for report structures and their JSON shape

use chrono::Utc;
use panelrun::output::{PipelineListing, RunReport, StepInfo, StepReport, StepStatus};

fn sample_report() -> RunReport {
    RunReport {
        passed: false,
        started_at: Utc::now(),
        steps: vec![
            StepReport {
                name: "ingest_data".to_string(),
                status: StepStatus::Ok,
                exit_code: Some(0),
                duration_ms: Some(1200),
            },
            StepReport {
                name: "ingest_facilities".to_string(),
                status: StepStatus::Failed,
                exit_code: Some(1),
                duration_ms: Some(300),
            },
            StepReport {
                name: "clean_data".to_string(),
                status: StepStatus::Skipped,
                exit_code: None,
                duration_ms: None,
            },
        ],
    }
}

#[test]
fn test_step_status_display() {
    assert_eq!(StepStatus::Ok.to_string(), "ok");
    assert_eq!(StepStatus::Failed.to_string(), "failed");
    assert_eq!(StepStatus::Skipped.to_string(), "skipped");
}

#[test]
fn test_failed_step_lookup() {
    let report = sample_report();
    assert_eq!(report.failed_step().unwrap().name, "ingest_facilities");
}

#[test]
fn test_failed_step_none_when_passed() {
    let mut report = sample_report();
    report.steps.truncate(1);
    report.passed = true;
    assert!(report.failed_step().is_none());
}

#[test]
fn test_run_report_json_shape() {
    let report = sample_report();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["passed"], false);
    assert_eq!(value["steps"][0]["status"], "ok");
    assert_eq!(value["steps"][1]["status"], "failed");
    assert_eq!(value["steps"][1]["exit_code"], 1);
    assert_eq!(value["steps"][2]["status"], "skipped");
    assert!(value["steps"][2]["exit_code"].is_null());
    assert!(value["started_at"].is_string());
}

#[test]
fn test_listing_json_shape() {
    let listing = PipelineListing {
        interpreter: ".venv/bin/python".to_string(),
        working_dir: None,
        steps: vec![StepInfo {
            name: "clean_data".to_string(),
            command: "python clean_data.py".to_string(),
            description: Some("Clean the raw detentions data".to_string()),
        }],
    };
    let value = serde_json::to_value(&listing).unwrap();

    assert_eq!(value["interpreter"], ".venv/bin/python");
    assert_eq!(value["steps"][0]["name"], "clean_data");
    assert_eq!(value["steps"][0]["command"], "python clean_data.py");
}
