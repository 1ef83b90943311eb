//! Path utilities: expand ~, resolve the table location.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paths_untouched() {
        assert_eq!(expand_tilde("data/m.xlsx"), PathBuf::from("data/m.xlsx"));
    }
}
