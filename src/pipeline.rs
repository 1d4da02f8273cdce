//! Pipeline step model
//!
//! A step is one external program invocation treated as an atomic unit of
//! work. The built-in pipeline mirrors the original panel build: ingest the
//! raw detentions data, ingest the facilities reference data, then clean.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One external step in the pipeline
///
/// Exactly one of `script` (a Python file, run via the resolved interpreter)
/// or `program` (an arbitrary executable) must be set; config validation
/// enforces this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    /// Step name, unique within the pipeline (e.g. "ingest_data")
    pub name: String,

    /// Python script to run via the resolved interpreter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,

    /// Executable to run as-is, instead of a Python script
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,

    /// Arguments passed to `program`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Short human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Step {
    /// Create a script step (run via the Python interpreter)
    #[must_use]
    pub fn script(name: &str, script: &str) -> Self {
        Self {
            name: name.to_string(),
            script: Some(script.to_string()),
            program: None,
            args: Vec::new(),
            description: None,
        }
    }

    /// Create a program step (run as-is)
    #[must_use]
    pub fn program(name: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            script: None,
            program: Some(program.to_string()),
            args: args.iter().map(ToString::to_string).collect(),
            description: None,
        }
    }

    /// One-line rendering of what this step invokes, for listings
    #[must_use]
    pub fn command_label(&self) -> String {
        self.script.as_ref().map_or_else(
            || {
                let program = self.program.as_deref().unwrap_or("?");
                if self.args.is_empty() {
                    program.to_string()
                } else {
                    format!("{program} {}", self.args.join(" "))
                }
            },
            |script| format!("python {script}"),
        )
    }
}

/// The built-in pipeline, used when no config file exists
///
/// Matches the original wrapper: two ingestion steps, then cleaning.
#[must_use]
pub fn default_steps() -> Vec<Step> {
    vec![
        Step::script("ingest_data", "ingest_data.py"),
        Step::script("ingest_facilities", "ingest_facilities.py"),
        Step::script("clean_data", "clean_data.py"),
    ]
}

/// Restrict the pipeline to the steps selected on the command line
///
/// `only` keeps a single named step; `from` keeps the suffix starting at the
/// named step. With neither, the whole pipeline is kept. An unknown name is
/// an error listing the valid ones.
pub fn select(steps: &[Step], from: Option<&str>, only: Option<&str>) -> Result<Vec<Step>, Error> {
    if let Some(name) = only {
        let index = position(steps, name)?;
        return Ok(vec![steps[index].clone()]);
    }
    if let Some(name) = from {
        let index = position(steps, name)?;
        return Ok(steps[index..].to_vec());
    }
    Ok(steps.to_vec())
}

fn position(steps: &[Step], name: &str) -> Result<usize, Error> {
    steps
        .iter()
        .position(|s| s.name == name)
        .ok_or_else(|| Error::UnknownStep {
            name: name.to_string(),
            known: steps
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
}
