use crate::cli::commands::cycle_config;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::run_cycle;
use crate::errors::AppResult;
use crate::ui::render::print_report;

/// Handle the `run` command: a single cycle, fatal errors propagate.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Run { highlight } = &cli.command {
        let cycle = cycle_config(cli, cfg, *highlight)?;
        let report = run_cycle(&cycle)?;
        print_report(&report);
    }
    Ok(())
}
