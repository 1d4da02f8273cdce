//! Tests for sequential step execution and exit-status gating

use std::path::PathBuf;

use panelrun::error::Error;
use panelrun::output::StepStatus;
use panelrun::pipeline::Step;
use panelrun::runner::{Runner, StepEvent};
use tempfile::TempDir;

fn shell_step(name: &str, command: &str) -> Step {
    Step::program(name, "sh", &["-c", command])
}

fn runner(working_dir: &TempDir, steps: Vec<Step>) -> Runner {
    Runner::new(
        PathBuf::from("python3"),
        Some(working_dir.path().to_path_buf()),
        steps,
    )
}

fn run_collecting(runner: &Runner) -> (panelrun::output::RunReport, Vec<String>) {
    let mut events = Vec::new();
    let report = runner
        .run(&mut |event| match event {
            StepEvent::Started(step) => events.push(format!("started {}", step.name)),
            StepEvent::Finished(report) => {
                events.push(format!("finished {} {}", report.name, report.status));
            },
        })
        .unwrap();
    (report, events)
}

#[test]
fn test_all_steps_succeed_in_order() {
    let temp = TempDir::new().unwrap();
    let runner = runner(
        &temp,
        vec![
            shell_step("first", "touch first.done"),
            shell_step("second", "test -f first.done && touch second.done"),
            shell_step("third", "test -f second.done"),
        ],
    );

    let (report, events) = run_collecting(&runner);

    assert!(report.passed);
    assert!(report.failed_step().is_none());
    assert_eq!(report.steps.len(), 3);
    assert!(report.steps.iter().all(|s| s.status == StepStatus::Ok));
    assert!(report.steps.iter().all(|s| s.exit_code == Some(0)));
    assert_eq!(
        events,
        [
            "started first",
            "finished first ok",
            "started second",
            "finished second ok",
            "started third",
            "finished third ok",
        ]
    );
}

#[test]
fn test_first_failure_stops_the_sequence() {
    let temp = TempDir::new().unwrap();
    let runner = runner(
        &temp,
        vec![
            shell_step("first", "exit 2"),
            shell_step("second", "touch second.ran"),
            shell_step("third", "touch third.ran"),
        ],
    );

    let (report, events) = run_collecting(&runner);

    assert!(!report.passed);
    let failed = report.failed_step().unwrap();
    assert_eq!(failed.name, "first");
    assert_eq!(failed.exit_code, Some(2));
    assert_eq!(report.steps[1].status, StepStatus::Skipped);
    assert_eq!(report.steps[2].status, StepStatus::Skipped);
    assert_eq!(report.steps[1].exit_code, None);

    // Skipped steps never ran and never produced events
    assert!(!temp.path().join("second.ran").exists());
    assert!(!temp.path().join("third.ran").exists());
    assert_eq!(events, ["started first", "finished first failed"]);
}

#[test]
fn test_middle_failure_skips_only_the_rest() {
    let temp = TempDir::new().unwrap();
    let runner = runner(
        &temp,
        vec![
            shell_step("first", "touch first.ran"),
            shell_step("second", "exit 1"),
            shell_step("third", "touch third.ran"),
        ],
    );

    let (report, _) = run_collecting(&runner);

    assert_eq!(report.steps[0].status, StepStatus::Ok);
    assert_eq!(report.steps[1].status, StepStatus::Failed);
    assert_eq!(report.steps[2].status, StepStatus::Skipped);
    assert!(temp.path().join("first.ran").exists());
    assert!(!temp.path().join("third.ran").exists());
}

#[test]
fn test_last_step_failure_fails_the_run() {
    let temp = TempDir::new().unwrap();
    let runner = runner(
        &temp,
        vec![shell_step("first", "true"), shell_step("last", "exit 3")],
    );

    let (report, _) = run_collecting(&runner);

    assert!(!report.passed);
    assert_eq!(report.failed_step().unwrap().name, "last");
    assert_eq!(report.failed_step().unwrap().exit_code, Some(3));
}

#[test]
fn test_unlaunchable_program_is_a_spawn_error() {
    let temp = TempDir::new().unwrap();
    let runner = runner(
        &temp,
        vec![Step::program("ghost", "panelrun-no-such-program", &[])],
    );

    let err = runner.run(&mut |_| {}).unwrap_err();
    match err {
        Error::Spawn { step, .. } => assert_eq!(step, "ghost"),
        other => panic!("expected Spawn, got: {other}"),
    }
}

#[test]
fn test_script_steps_run_via_the_interpreter() {
    let temp = TempDir::new().unwrap();
    // Use sh as the "interpreter" so the test does not depend on Python
    std::fs::write(temp.path().join("step.sh"), "touch script.ran\n").unwrap();
    let runner = Runner::new(
        PathBuf::from("sh"),
        Some(temp.path().to_path_buf()),
        vec![Step::script("scripted", "step.sh")],
    );

    let (report, _) = run_collecting(&runner);

    assert!(report.passed);
    assert!(temp.path().join("script.ran").exists());
}

#[test]
fn test_steps_record_durations() {
    let temp = TempDir::new().unwrap();
    let runner = runner(&temp, vec![shell_step("quick", "true")]);

    let (report, _) = run_collecting(&runner);

    assert!(report.steps[0].duration_ms.is_some());
}
