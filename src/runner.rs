//! Sequential step execution
//!
//! The runner executes steps strictly in order, blocking on each one. Child
//! processes inherit stdio so step output streams to the terminal. A non-zero
//! exit stops the sequence; remaining steps are recorded as skipped. Every
//! step failure is fatal to the run, including the last step's.

use std::path::PathBuf;
use std::process::Command;
use std::time::Instant;

use chrono::Utc;

use crate::error::Error;
use crate::output::{RunReport, StepReport, StepStatus};
use crate::pipeline::Step;

/// Progress events emitted while a pipeline runs
#[derive(Debug, Clone, Copy)]
pub enum StepEvent<'a> {
    /// A step is about to run
    Started(&'a Step),
    /// A step finished, successfully or not
    Finished(&'a StepReport),
}

/// Sequential pipeline executor
///
/// The runner never prints; the CLI layer renders progress from the events
/// it emits.
#[derive(Debug)]
pub struct Runner {
    interpreter: PathBuf,
    working_dir: Option<PathBuf>,
    steps: Vec<Step>,
}

impl Runner {
    /// Create a runner over an ordered list of steps
    #[must_use]
    pub const fn new(interpreter: PathBuf, working_dir: Option<PathBuf>, steps: Vec<Step>) -> Self {
        Self {
            interpreter,
            working_dir,
            steps,
        }
    }

    /// Run the steps in order, stopping at the first failure
    ///
    /// Returns `Err` only when a step's program cannot be started at all;
    /// a step that runs and exits non-zero is recorded in the report with
    /// `passed` set to false.
    pub fn run(&self, on_event: &mut dyn FnMut(StepEvent<'_>)) -> Result<RunReport, Error> {
        let started_at = Utc::now();
        let mut reports = Vec::with_capacity(self.steps.len());
        let mut failed = false;

        for step in &self.steps {
            if failed {
                log::debug!("skipping step '{}' after earlier failure", step.name);
                reports.push(StepReport {
                    name: step.name.clone(),
                    status: StepStatus::Skipped,
                    exit_code: None,
                    duration_ms: None,
                });
                continue;
            }

            on_event(StepEvent::Started(step));
            let mut command = self.command_for(step);
            log::debug!("running step '{}': {command:?}", step.name);

            let start = Instant::now();
            let status = command.status().map_err(|e| Error::Spawn {
                step: step.name.clone(),
                source: e,
            })?;
            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            let report = StepReport {
                name: step.name.clone(),
                status: if status.success() {
                    StepStatus::Ok
                } else {
                    StepStatus::Failed
                },
                exit_code: status.code(),
                duration_ms: Some(duration_ms),
            };
            failed = !status.success();
            on_event(StepEvent::Finished(&report));
            reports.push(report);
        }

        Ok(RunReport {
            passed: !failed,
            started_at,
            steps: reports,
        })
    }

    fn command_for(&self, step: &Step) -> Command {
        let mut command = step.script.as_ref().map_or_else(
            || {
                let mut c = Command::new(step.program.as_deref().unwrap_or_default());
                c.args(&step.args);
                c
            },
            |script| {
                let mut c = Command::new(&self.interpreter);
                c.arg(script);
                c
            },
        );
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}
