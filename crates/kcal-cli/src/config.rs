//! Optional TOML configuration and data-directory resolution.
//!
//! Resolution order for the data directory: `--data-dir`/`KCAL_DATA_DIR`,
//! then `[storage] path` from the config file, then the XDG data default.
//! A missing config file is not an error; there is no init step, the store
//! materializes on first write.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct KcalConfig {
    pub storage: StorageSection,
}

#[derive(Debug, Deserialize)]
pub struct StorageSection {
    pub path: String,
}

/// Resolve the data directory from flag/env, config, or the XDG default.
pub fn resolve_data_dir(cli_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli_override {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let config_path = default_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.storage.path));
    }

    default_data_dir()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<KcalConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("kcal"));
        }
    }
    Ok(home_dir()?.join(".config").join("kcal"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("kcal"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("kcal"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
