//! Python interpreter resolution
//!
//! The original wrapper sourced a virtualenv before running anything. The
//! equivalent here is resolving the interpreter once, up front, so a broken
//! environment aborts the run before any step executes.
//!
//! Resolution order:
//! 1. explicit `python` from the config;
//! 2. `venv` from the config (its interpreter must exist);
//! 3. an active `VIRTUAL_ENV` environment variable;
//! 4. `python3` from `PATH`.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::EnvironmentConfig;
use crate::error::Error;

/// Resolve the Python interpreter used for script steps
pub fn resolve(environment: &EnvironmentConfig) -> Result<PathBuf, Error> {
    if let Some(python) = &environment.python {
        return Ok(python.clone());
    }
    if let Some(venv) = &environment.venv {
        return venv_interpreter(venv);
    }
    if let Some(venv) = env::var_os("VIRTUAL_ENV") {
        return venv_interpreter(Path::new(&venv));
    }
    Ok(PathBuf::from("python3"))
}

/// The interpreter inside a virtualenv directory
fn venv_interpreter(venv: &Path) -> Result<PathBuf, Error> {
    let candidate = if cfg!(windows) {
        venv.join("Scripts").join("python.exe")
    } else {
        venv.join("bin").join("python")
    };
    if candidate.exists() {
        Ok(candidate)
    } else {
        Err(Error::MissingInterpreter(candidate))
    }
}
