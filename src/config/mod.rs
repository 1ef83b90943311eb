use crate::core::HighlightScope;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Monitored table (.xlsx or .csv)
    #[serde(default = "default_store")]
    pub store: String,
    /// IANA zone the deadlines are written in
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Seconds between two cycles of `watch`
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
    #[serde(default)]
    pub highlight: HighlightScope,
}

/// Keys a complete config file carries.
pub const FIELDS: [&str; 4] = ["store", "timezone", "refresh_interval", "highlight"];

fn default_store() -> String {
    "monitoramento.xlsx".to_string()
}
fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}
fn default_refresh_interval() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            timezone: default_timezone(),
            refresh_interval: default_refresh_interval(),
            highlight: HighlightScope::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimewatch")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimewatch")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimewatch.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write this configuration to the standard location.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir())?;
        let path = Self::config_file();
        fs::write(&path, self.to_yaml()?)?;
        Ok(path)
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn tz(&self) -> AppResult<Tz> {
        parse_timezone(&self.timezone)
    }

    /// Keys of `FIELDS` absent from a YAML document (older files).
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("cannot parse configuration: {e}")))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(FIELDS.to_vec());
        };

        Ok(FIELDS
            .into_iter()
            .filter(|k| !map.contains_key(serde_yaml::Value::String(k.to_string())))
            .collect())
    }
}

pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| AppError::InvalidTimezone(name.to_string()))
}
