use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory holding the events.json blob
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Duration used when `new` is given neither --end nor --duration
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u16,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            data_dir: default_data_dir(),
            default_duration_minutes: default_duration_minutes(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("timetable"))
        .unwrap_or_else(|| PathBuf::from(".timetable"))
}

fn default_duration_minutes() -> u16 {
    60
}

/// Get the config file path (~/.config/timetable/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("timetable");
    Ok(config_dir.join("config.toml"))
}

/// Load the config, falling back to defaults when no file exists.
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
