//! Pipeline configuration
//!
//! The pipeline is described by a `panel.toml` in the working directory:
//! an `[environment]` table naming the Python interpreter (or virtualenv)
//! and a `[[step]]` array in execution order. When no config file exists,
//! the built-in default pipeline is used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::pipeline::{self, Step};

/// Default config file name
pub const DEFAULT_CONFIG_FILE: &str = "panel.toml";

/// A loaded, validated pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Execution environment settings
    #[serde(default)]
    pub environment: EnvironmentConfig,

    /// Steps in execution order
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

/// Execution environment settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Virtualenv directory providing the Python interpreter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venv: Option<PathBuf>,

    /// Explicit interpreter, overriding `venv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<PathBuf>,

    /// Directory the steps run in (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl PipelineConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content =
            fs::read_to_string(path).map_err(|e| Error::config(path, e.to_string()))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| Error::config(path, e.to_string()))?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load a config file, or fall back to the built-in pipeline when the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, Error> {
        if path.exists() {
            Self::load(path)
        } else {
            log::debug!("no config at {}, using built-in pipeline", path.display());
            Ok(Self {
                environment: EnvironmentConfig::default(),
                steps: pipeline::default_steps(),
            })
        }
    }

    fn validate(&self, path: &Path) -> Result<(), Error> {
        if self.steps.is_empty() {
            return Err(Error::config(path, "pipeline has no steps"));
        }
        for step in &self.steps {
            if step.name.is_empty() {
                return Err(Error::config(path, "step with empty name"));
            }
            match (&step.script, &step.program) {
                (Some(_), Some(_)) => {
                    return Err(Error::config(
                        path,
                        format!("step '{}' sets both script and program", step.name),
                    ));
                },
                (None, None) => {
                    return Err(Error::config(
                        path,
                        format!("step '{}' sets neither script nor program", step.name),
                    ));
                },
                _ => {},
            }
            if step.program.is_none() && !step.args.is_empty() {
                return Err(Error::config(
                    path,
                    format!("step '{}' sets args without a program", step.name),
                ));
            }
        }
        for (i, step) in self.steps.iter().enumerate() {
            if self.steps[..i].iter().any(|s| s.name == step.name) {
                return Err(Error::config(
                    path,
                    format!("duplicate step name '{}'", step.name),
                ));
            }
        }
        Ok(())
    }
}

/// Config template written by `panelrun init`
#[must_use]
pub fn template() -> &'static str {
    r#"# panelrun pipeline

[environment]
# Virtualenv providing the Python interpreter for script steps:
# venv = ".venv"
# Or point at an interpreter directly:
# python = "/usr/bin/python3"
# Directory the steps run in (default: current directory):
# working_dir = "."

[[step]]
name = "ingest_data"
script = "ingest_data.py"
description = "Download and ingest the raw detentions workbook"

[[step]]
name = "ingest_facilities"
script = "ingest_facilities.py"
description = "Download and ingest the facilities reference data"

[[step]]
name = "clean_data"
script = "clean_data.py"
description = "Clean the raw detentions data"

# Optional final step (uncomment to assemble the panel after cleaning):
# [[step]]
# name = "build_panel"
# script = "build_panel.py"
# description = "Build the daily detention panel"
"#
}
