use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::{self, ensure_writable};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `export` command: copy the persisted table byte for byte.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = &cli.command {
        let src = cfg.store_path();
        let dest = expand_tilde(file);

        if !store::exists(&src) {
            return Err(AppError::StoreRead {
                path: src.display().to_string(),
                cause: "file not found".to_string(),
            });
        }

        ensure_writable(&dest, *force)?;
        fs::copy(&src, &dest).map_err(|e| AppError::StoreWrite {
            path: dest.display().to_string(),
            cause: e.to_string(),
        })?;

        success(format!("Table exported: {}", dest.display()));
    }
    Ok(())
}
