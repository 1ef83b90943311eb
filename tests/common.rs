#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const HEADER: &str = "Item,Operador,Termino,Tempo restante,Tempo excedente";

/// 2024-01-01 00:00:00 in Sao Paulo
pub const NEW_YEAR_2024: &str = "2024-01-01T00:00:00-03:00";

/// Command with HOME redirected, so no real config file is read or written.
pub fn rtw(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimewatch");
    cmd.env("HOME", temp_home(name));
    cmd.env("APPDATA", temp_home(name));
    cmd.env_remove("RTIMEWATCH_LOG");
    cmd
}

/// Unique, empty home directory inside the system temp dir
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimewatch_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Unique table path inside the temp dir; any previous file is removed
pub fn temp_table(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimewatch.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write a CSV table with the given lines after the header line
pub fn write_csv(path: &PathBuf, header: &str, lines: &[&str]) {
    let mut content = String::from(header);
    content.push('\n');
    for l in lines {
        content.push_str(l);
        content.push('\n');
    }
    fs::write(path, content).expect("write csv table");
}

/// Parsed CSV lines of a table (header included)
pub fn read_csv(path: &PathBuf) -> Vec<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("open csv");
    rdr.records()
        .map(|r| r.expect("csv record").iter().map(str::to_string).collect())
        .collect()
}
