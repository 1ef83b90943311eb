use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Column;
use crate::store::{self, StoreFormat};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `load` command: replace the monitored table wholesale.
///
/// The source is read first so a broken file never replaces a good one.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Load { file } = &cli.command {
        let src = expand_tilde(file);
        let dest = cfg.store_path();

        if !store::exists(&src) {
            return Err(AppError::StoreRead {
                path: src.display().to_string(),
                cause: "file not found".to_string(),
            });
        }

        let loaded = store::read_table(&src)?;
        if loaded.has_header && loaded.missing.contains(&Column::Deadline) {
            return Err(AppError::MissingColumn {
                path: src.display().to_string(),
                column: Column::Deadline.header(),
            });
        }

        if StoreFormat::from_path(&src)? == StoreFormat::from_path(&dest)? {
            fs::copy(&src, &dest).map_err(|e| AppError::StoreWrite {
                path: dest.display().to_string(),
                cause: e.to_string(),
            })?;
        } else {
            store::write_table(&dest, &loaded.table, None)?;
        }

        success(format!(
            "File loaded successfully: {} rows into {}",
            loaded.table.len(),
            dest.display()
        ));
    }
    Ok(())
}
