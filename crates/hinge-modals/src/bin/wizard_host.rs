//! Scripted host for the CodeHinge wizards.
//!
//! Plays a TOML script of host actions against the Premium Center or the
//! Create Actions wizard and prints one JSON record per step. Without a
//! script it plays the built-in Premium Center demo.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hinge_modals::{FlowKind, HostedWizard, RecordingCheckout, Script, SessionError};
use hinge_wizard::WizardConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wizard-host")]
#[command(about = "Drive CodeHinge modal wizards from a script", long_about = None)]
struct Cli {
    /// Wizard to drive; overrides the script's `flow`
    #[arg(short, long)]
    flow: Option<FlowKind>,

    /// TOML script of host actions
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Wizard config file (max_depth, copy overrides)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut script = match &cli.script {
        Some(path) => Script::load_from_file(path)
            .map_err(hint)
            .with_context(|| format!("loading script {}", path.display()))?,
        None => Script::premium_demo(),
    };
    if let Some(flow) = cli.flow {
        script.flow = flow;
    }

    let config = match &cli.config {
        Some(path) => WizardConfig::load_from_file(path)
            .map_err(|err| hint(SessionError::from(err)))
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WizardConfig::default(),
    };

    let checkout = RecordingCheckout::new();
    let mut wizard = HostedWizard::new(script.flow, config, checkout.clone()).map_err(hint)?;
    tracing::info!(flow = %script.flow, steps = script.steps.len(), "Running wizard script");

    for record in wizard.run(&script).map_err(hint)? {
        println!("{}", serde_json::to_string(&record)?);
    }

    let plans = checkout.plans();
    if !plans.is_empty() {
        tracing::info!(count = plans.len(), "Checkout requests: {}", plans.join(", "));
    }
    Ok(())
}

/// Point the user at their input files when editing them fixes the error.
fn hint(err: SessionError) -> SessionError {
    if err.is_user_correctable() {
        tracing::error!("{err}; fix the script or config file and rerun");
    }
    err
}
