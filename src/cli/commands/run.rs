//! Run the pipeline

use std::path::Path;

use panelrun::config::PipelineConfig;
use panelrun::error::Error;
use panelrun::output::{OutputMode, StepStatus};
use panelrun::runner::{Runner, StepEvent};
use panelrun::{interpreter, pipeline};

/// Run the pipeline, optionally restricted by `--from` or `--only`
pub fn run(
    config_path: &Path,
    from: Option<&str>,
    only: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = PipelineConfig::load_or_default(config_path)?;
    let steps = pipeline::select(&config.steps, from, only)?;
    let python = interpreter::resolve(&config.environment)?;
    log::debug!("interpreter: {}", python.display());

    let runner = Runner::new(python, config.environment.working_dir.clone(), steps);

    let mut on_event = |event: StepEvent<'_>| {
        if mode == OutputMode::Json {
            return;
        }
        match event {
            StepEvent::Started(step) => println!("Running {}...", step.name),
            StepEvent::Finished(report) => {
                if report.status == StepStatus::Ok {
                    println!("  {} completed.\n", report.name);
                } else {
                    let label = report.exit_code.map_or_else(
                        || " (terminated by signal)".to_string(),
                        |code| format!(" with exit code {code}"),
                    );
                    println!("  {} failed{label}.", report.name);
                }
            },
        }
    };

    let report = runner.run(&mut on_event)?;
    report.render(mode);

    // Any step failure exits non-zero, including the last step's
    if let Some(failed) = report.failed_step() {
        return Err(Error::StepFailed {
            step: failed.name.clone(),
            code: failed.exit_code,
        }
        .into());
    }
    Ok(())
}
