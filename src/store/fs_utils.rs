// src/store/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Verifica se un file può essere creato o sovrascritto.
///
/// - Se il file NON esiste → Ok
/// - Se esiste ed è abilitato `force` → Ok
/// - Se esiste e `force == false` → chiede conferma all'utente.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Other(
            "Export cancelled: existing file not overwritten".to_string(),
        ))
    }
}

/// Replace `path` with `bytes` without ever leaving a half-written file:
/// write a sibling temp file, then rename it over the target.
pub(crate) fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(path);

    {
        let mut f = fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp, path) {
        // rename can fail across devices or on locked targets (Windows)
        let copied = fs::copy(&tmp, path);
        let _ = fs::remove_file(&tmp);
        copied.map_err(|_| e)?;
    }

    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "table".to_string());
    path.with_file_name(format!(".{name}.tmp"))
}
