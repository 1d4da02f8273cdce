//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Outcome of one step in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    /// Step ran and exited zero
    Ok,
    /// Step ran and exited non-zero (or was killed by a signal)
    Failed,
    /// Step never ran because an earlier step failed
    Skipped,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Failed => write!(f, "failed"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}

/// Per-step record in a run report
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Step name
    pub name: String,
    /// Outcome
    pub status: StepStatus,
    /// Exit code, if the step ran and exited normally
    pub exit_code: Option<i32>,
    /// Wall-clock duration in milliseconds, if the step ran
    pub duration_ms: Option<u64>,
}

/// Result of a pipeline run
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Whether every executed step succeeded
    pub passed: bool,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Per-step outcomes, in pipeline order
    pub steps: Vec<StepReport>,
}

impl RunReport {
    /// The step that stopped the run, if any
    #[must_use]
    pub fn failed_step(&self) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.status == StepStatus::Failed)
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let succeeded = self
            .steps
            .iter()
            .filter(|s| s.status == StepStatus::Ok)
            .count();
        if self.passed {
            println!("\nPipeline complete: {succeeded} step(s) succeeded.");
        } else {
            let skipped = self
                .steps
                .iter()
                .filter(|s| s.status == StepStatus::Skipped)
                .count();
            let name = self.failed_step().map_or("?", |s| s.name.as_str());
            println!(
                "\nPipeline failed at '{name}': {succeeded} succeeded, {skipped} skipped."
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct PipelineListing {
    /// Resolved Python interpreter for script steps
    pub interpreter: String,
    /// Working directory the steps run in, if configured
    pub working_dir: Option<String>,
    /// Configured steps, in execution order
    pub steps: Vec<StepInfo>,
}

/// Information about a configured step
#[derive(Debug, Serialize)]
pub struct StepInfo {
    /// Step name
    pub name: String,
    /// What the step invokes
    pub command: String,
    /// Short description, if configured
    pub description: Option<String>,
}

impl PipelineListing {
    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Interpreter: {}", self.interpreter);
        if let Some(dir) = &self.working_dir {
            println!("Working dir: {dir}");
        }
        println!("\nSteps:\n");
        for (i, step) in self.steps.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, step.name, step.command);
            if let Some(description) = &step.description {
                println!("     {description}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
