use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::ui::messages::{info, warning};
use crate::ui::render::render_table;

/// Handle the `show` command: print the persisted table as is.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { json } = &cli.command {
        let path = cfg.store_path();

        if !store::exists(&path) {
            warning(format!(
                "No table at {}. Run `rtimewatch init` or `rtimewatch run` first.",
                path.display()
            ));
            return Ok(());
        }

        let loaded = store::read_table(&path)?;

        if *json {
            let out = serde_json::to_string_pretty(&loaded.table.records)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
        } else {
            print!("{}", render_table(&loaded.table, true));
            info(format!(
                "{} rows, {} expired",
                loaded.table.len(),
                loaded.table.expired_count()
            ));
        }
    }
    Ok(())
}
