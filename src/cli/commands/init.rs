use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the monitored table with the fixed columns, if missing
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test {
        let path = cfg.save()?;
        success(format!("Config file: {}", path.display()));
    }

    let table = cfg.store_path();
    if store::exists(&table) {
        info(format!("Table already present: {}", table.display()));
    } else {
        store::initialize(&table)?;
        success(format!("Table initialized at {}", table.display()));
    }

    Ok(())
}
