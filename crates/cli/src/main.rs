// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! formflow - form submission pipeline CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod backends;
mod commands;
mod output;
mod view;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{catalog, check, submit};
use formflow_core::{Clock, FlowConfig, SystemClock};
use output::OutputFormat;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG: &str = "formflow.toml";

#[derive(Parser)]
#[command(
    name = "formflow",
    version,
    about = "formflow - validate and submit booking and contact forms"
)]
struct Cli {
    /// Configuration file (defaults to ./formflow.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a form through the pipeline
    Submit(submit::SubmitArgs),
    /// Validate a single value
    Check {
        #[command(subcommand)]
        command: check::CheckCommand,
    },
    /// Format a phone number for display
    FormatPhone { value: String },
    /// List bookable services
    Services,
    /// List time slots
    Slots {
        /// List open booking dates instead
        #[arg(long)]
        dates: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging();

    let config = load_config(cli.config.as_deref())?;
    let format = OutputFormat::new(cli.json);
    let today = SystemClock.today();

    match cli.command {
        Commands::Submit(args) => submit::handle(args, &config, format).await,
        Commands::Check { command } => check::handle(command, &config.booking, today, format),
        Commands::FormatPhone { value } => {
            catalog::phone(value, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Services => {
            catalog::services(&config.booking, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Slots { dates } => {
            catalog::slots(&config.booking, dates, today, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Log to stderr so stdout stays parseable; `RUST_LOG` overrides the level
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<FlowConfig> {
    match path {
        Some(path) => {
            FlowConfig::load(path).with_context(|| format!("loading {}", path.display()))
        }
        None if Path::new(DEFAULT_CONFIG).exists() => FlowConfig::load(Path::new(DEFAULT_CONFIG))
            .with_context(|| format!("loading {}", DEFAULT_CONFIG)),
        None => Ok(FlowConfig::default()),
    }
}
