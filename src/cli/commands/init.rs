//! Write a config template

use std::fs;
use std::path::Path;

use panelrun::config;
use panelrun::output::{OperationResult, OutputMode};

/// Write a `panel.toml` template describing the default pipeline
pub fn init(config_path: &Path, force: bool, mode: OutputMode) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        let result = OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to overwrite.",
                config_path.display()
            ),
        };
        result.render(mode);
        return Ok(());
    }

    fs::write(config_path, config::template())?;

    let result = OperationResult {
        success: true,
        message: format!(
            "Created {}.\n\nNext steps:\n  \
             edit [environment] to point at your virtualenv\n  \
             panelrun run",
            config_path.display()
        ),
    };
    result.render(mode);
    Ok(())
}
