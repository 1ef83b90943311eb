use crate::cli::commands::{cycle_config, sample_now};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::{CycleConfig, run_cycle};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, fatal, info};
use crate::ui::render::print_report;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Handle the `watch` command.
///
/// A failed cycle is reported and the next tick tries again; only invalid
/// settings stop the loop.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        interval,
        cycles,
        highlight,
    } = &cli.command
    {
        let secs = interval.unwrap_or(cfg.refresh_interval);
        if secs == 0 {
            return Err(AppError::Config(
                "refresh interval must be at least 1 second".to_string(),
            ));
        }

        let base = cycle_config(cli, cfg, *highlight)?;
        info(format!(
            "Monitoring {} every {} (Ctrl+C to stop)",
            base.table_location.display(),
            describe_interval(secs)
        ));

        let mut done: u32 = 0;
        loop {
            let cycle = CycleConfig {
                now: sample_now(cli)?,
                ..base.clone()
            };

            match run_cycle(&cycle) {
                Ok(report) => print_report(&report),
                Err(e) => {
                    warn!(error = %e, "cycle failed, retrying at next tick");
                    if e.is_store_error() {
                        fatal(&e);
                    } else {
                        error(&e);
                    }
                }
            }

            done += 1;
            if cycles.is_some_and(|n| done >= n) {
                break;
            }
            thread::sleep(Duration::from_secs(secs));
        }
    }
    Ok(())
}

fn describe_interval(secs: u64) -> String {
    if secs >= 60 && secs % 60 == 0 {
        format!("{} min", secs / 60)
    } else {
        format!("{secs} s")
    }
}
