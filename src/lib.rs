//! rTimewatch library root.
//! Exposes the CLI parser, the high-level run() function and the
//! deadline engine (`core`) with its table store.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Run { .. } => cli::commands::run::handle(cli, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg),
        Commands::Show { .. } => cli::commands::show::handle(cli, cfg),
        Commands::Load { .. } => cli::commands::load::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging diagnostico su stderr
    init_tracing(cli.quiet, cli.verbose)?;

    // 3️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 4️⃣ override da riga di comando
    if let Some(store) = &cli.store {
        cfg.store = store.clone();
    }
    if let Some(tz) = &cli.tz {
        cfg.timezone = tz.clone();
    }

    dispatch(&cli, &cfg)
}

fn init_tracing(quiet: bool, verbose: bool) -> AppResult<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RTIMEWATCH_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Other(format!("failed to initialize logging: {e}")))
}
