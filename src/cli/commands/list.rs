//! Show the configured pipeline

use std::path::Path;

use panelrun::config::PipelineConfig;
use panelrun::interpreter;
use panelrun::output::{OutputMode, PipelineListing, StepInfo};

/// List the configured steps and the resolved interpreter
pub fn list(config_path: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let config = PipelineConfig::load_or_default(config_path)?;
    let python = interpreter::resolve(&config.environment)?;

    let listing = PipelineListing {
        interpreter: python.display().to_string(),
        working_dir: config
            .environment
            .working_dir
            .as_ref()
            .map(|d| d.display().to_string()),
        steps: config
            .steps
            .iter()
            .map(|s| StepInfo {
                name: s.name.clone(),
                command: s.command_label(),
                description: s.description.clone(),
            })
            .collect(),
    };

    listing.render(mode);
    Ok(())
}
