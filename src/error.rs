//! Error types for pipeline loading and execution

use std::io;
use std::path::PathBuf;

/// Errors produced while loading or running a pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file could not be read or parsed
    #[error("invalid pipeline config at {path}: {reason}")]
    Config {
        /// Path to the config file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// A configured virtualenv has no Python interpreter inside it
    #[error("no Python interpreter at {0} (is the virtualenv built?)")]
    MissingInterpreter(PathBuf),

    /// A step name passed on the command line is not in the pipeline
    #[error("unknown step '{name}' (expected one of: {known})")]
    UnknownStep {
        /// The name that did not match
        name: String,
        /// Comma-separated valid step names
        known: String,
    },

    /// A step's program could not be started at all
    #[error("failed to start step '{step}': {source}")]
    Spawn {
        /// Name of the step that failed to launch
        step: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A step ran but terminated unsuccessfully
    #[error("step '{step}' failed{}", .code.as_ref().map_or_else(
        || " (terminated by signal)".to_string(),
        |c| format!(" with exit code {c}"),
    ))]
    StepFailed {
        /// Name of the failed step
        step: String,
        /// Exit code, or None if terminated by a signal
        code: Option<i32>,
    },
}

impl Error {
    /// Create a config error for the given path
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
