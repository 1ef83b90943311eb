pub mod config;
pub mod export;
pub mod init;
pub mod load;
pub mod run;
pub mod show;
pub mod watch;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{CycleConfig, HighlightScope};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};

/// Reference instant: `--now` when given, the system clock otherwise.
pub(crate) fn sample_now(cli: &Cli) -> AppResult<DateTime<Utc>> {
    match &cli.now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .map_err(|_| AppError::InvalidInstant(s.clone())),
        None => Ok(Utc::now()),
    }
}

/// Everything one cycle needs, with `now` sampled here and only here.
pub(crate) fn cycle_config(
    cli: &Cli,
    cfg: &Config,
    highlight: Option<HighlightScope>,
) -> AppResult<CycleConfig> {
    Ok(CycleConfig {
        now: sample_now(cli)?,
        table_location: cfg.store_path(),
        timezone: cfg.tz()?,
        highlight: highlight.unwrap_or(cfg.highlight),
    })
}
