//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use panelrun::config::DEFAULT_CONFIG_FILE;
use panelrun::output::OutputMode;

/// panelrun - Run the panel-build pipeline with exit-status gating
#[derive(Parser, Debug)]
#[command(
    name = "panelrun",
    version,
    about = "Run the panel-build pipeline with exit-status gating",
    long_about = "Run the external data steps of the panel build in order.\n\n\
                  Each step must exit zero before the next one starts. The\n\
                  first failure stops the pipeline and names the failed step."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the pipeline config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the pipeline (all steps, in order)
    Run {
        /// Start at the named step instead of the beginning
        #[arg(long, conflicts_with = "only")]
        from: Option<String>,

        /// Run a single named step
        #[arg(long)]
        only: Option<String>,
    },

    /// Show the configured steps and resolved interpreter
    List,

    /// Write a panel.toml config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run { from, only }) => {
            commands::run(&cli.config, from.as_deref(), only.as_deref(), output_mode)
        },
        Some(Command::List) => commands::list(&cli.config, output_mode),
        Some(Command::Init { force }) => commands::init(&cli.config, force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("panelrun v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("panelrun v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'panelrun --help' for usage");
                println!("Run 'panelrun init' to get started");
            }
            Ok(())
        },
    }
}
