use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `config` command.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        if *print_config {
            print!("{}", cfg.to_yaml()?);
        }

        if *check {
            let path = Config::config_file();
            if !path.exists() {
                info(format!(
                    "No config file at {}: defaults in use.",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_fields(&fs::read_to_string(&path)?)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!(
                    "Missing fields (defaults in use): {}",
                    missing.join(", ")
                ));
            }
        }

        if !*print_config && !*check {
            info(format!("Config file: {}", Config::config_file().display()));
        }
    }
    Ok(())
}
