//! gnb-integrator
//!
//! Replays host events against a snapshot of the host model and prints the
//! resulting unit status and published relation data.
//!
//! # Usage
//!
//! ```bash
//! gnb-integrator -c config/integrator.yaml -s state.yaml \
//!     -e relation-changed:0 -e collect-unit-status
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::sync::mpsc;
use tracing::{error, info};

use gnbint_charm::{
    load_and_validate_integrator_config, load_model_state, CharmEvent, CharmTask, StatusReport,
    Task, TaskMessage, DEFAULT_CHANNEL_CAPACITY,
};
use gnbint_common::{init_logging, LogLevel};

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

/// gnb-integrator - gNB identity integrator
#[derive(Parser, Debug)]
#[command(name = "gnb-integrator")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the integrator configuration file (YAML)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config_file: String,

    /// Path to the host model snapshot (YAML)
    #[arg(short = 's', long = "state", value_name = "FILE")]
    state_file: String,

    /// Event to deliver, in order (e.g. config-changed, relation-changed:0)
    #[arg(short = 'e', long = "event", value_name = "EVENT")]
    events: Vec<CharmEvent>,

    /// Report output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Yaml)]
    output: OutputFormat,

    /// Log level (overridden by RUST_LOG)
    #[arg(short = 'l', long = "log-level", default_value = "info")]
    log_level: LogLevel,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run_integrator(args).await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("gnb-integrator failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads inputs, replays events and renders the report.
async fn run_integrator(args: Args) -> Result<String> {
    info!("Loading configuration from: {}", args.config_file);
    let config = load_and_validate_integrator_config(&args.config_file)
        .with_context(|| format!("Failed to load configuration from {}", args.config_file))?;
    info!(
        "Configuration loaded: mode={}, relation={}, TAC policy={:?}",
        config.mode,
        config.relation_name(),
        config.tac_policy()
    );

    let state = load_model_state(&args.state_file)
        .with_context(|| format!("Failed to load model state from {}", args.state_file))?;

    let mut task = CharmTask::new(config, state);

    // Events plus shutdown must fit without a concurrent receiver.
    let capacity = DEFAULT_CHANNEL_CAPACITY.max(args.events.len() + 1);
    let (tx, rx) = mpsc::channel(capacity);
    for event in &args.events {
        tx.send(TaskMessage::message(*event))
            .await
            .context("Event channel closed")?;
    }
    tx.send(TaskMessage::shutdown())
        .await
        .context("Event channel closed")?;

    task.run(rx).await;

    let report = StatusReport::from_host(task.config(), task.host());
    match args.output {
        OutputFormat::Yaml => report.to_yaml().context("Failed to render YAML report"),
        OutputFormat::Json => report.to_json().context("Failed to render JSON report"),
    }
}
